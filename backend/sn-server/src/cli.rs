use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sn-server")]
#[command(about = "Relays CI stage-status events to WebSocket subscribers and a remote receiver")]
#[command(version)]
pub struct Cli {
    /// Directory holding stage-notifier.toml (defaults to $SN_CONFIG_DIR, then home)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Load and validate configuration, print a summary, then exit
    #[arg(long)]
    pub check_config: bool,
}
