use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Success,
    Failure,
}

/// Outcome of relaying one event, as reported to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayVerdict {
    pub status: VerdictStatus,
    pub messages: Vec<String>,
}

impl RelayVerdict {
    pub fn success() -> Self {
        Self {
            status: VerdictStatus::Success,
            messages: Vec::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: VerdictStatus::Failure,
            messages: vec![message.into()],
        }
    }

    /// Mark the verdict failed and record why. Earlier messages are kept.
    pub fn add_failure(&mut self, message: impl Into<String>) {
        self.status = VerdictStatus::Failure;
        self.messages.push(message.into());
    }

    pub fn is_success(&self) -> bool {
        self.status == VerdictStatus::Success
    }
}
