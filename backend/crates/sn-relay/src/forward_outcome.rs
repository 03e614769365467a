/// How the remote receiver's status code is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardOutcome {
    Accepted,
    Rejected(u16),
}

/// Any status in [200, 299] is accepted; everything else is a rejection.
pub fn classify_status(status: u16) -> ForwardOutcome {
    if (200..=299).contains(&status) {
        ForwardOutcome::Accepted
    } else {
        ForwardOutcome::Rejected(status)
    }
}
