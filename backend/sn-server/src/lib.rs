pub mod cli;
pub mod error;
pub mod gateway;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod server_state;
pub mod startup;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{Result, ServerError};
pub use routes::build_router;
pub use server_state::ServerState;
