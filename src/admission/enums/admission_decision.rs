use std::time::Duration;
use crate::admission::enums::deny_reason::DenyReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionDecision {
    Allow,
    Deny {
        reason: DenyReason,
        /// `None` when the client is banned until an operator lifts it.
        retry_after: Option<Duration>,
    },
}
