use std::fmt;
use crate::admission::enums::deny_reason::DenyReason;

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::RateLimited => f.write_str("rate limited"),
            DenyReason::Blocked => f.write_str("blocked"),
        }
    }
}
