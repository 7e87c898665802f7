use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub requests_admitted: i64,
    pub requests_rate_limited: i64,
    pub requests_blocked: i64,
    pub downloads_started: i64,
    pub downloads_rejected: i64,
    pub downloads_completed: i64,
    pub downloads_failed: i64,
    pub bytes_sent: i64,
    pub files_viewed: i64,
    pub listings_served: i64,
    pub details_served: i64,
    pub not_found: i64,
}
