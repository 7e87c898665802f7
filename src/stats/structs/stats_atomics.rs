use std::sync::atomic::AtomicI64;

#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub requests_admitted: AtomicI64,
    pub requests_rate_limited: AtomicI64,
    pub requests_blocked: AtomicI64,
    pub downloads_started: AtomicI64,
    pub downloads_rejected: AtomicI64,
    pub downloads_completed: AtomicI64,
    pub downloads_failed: AtomicI64,
    pub bytes_sent: AtomicI64,
    pub files_viewed: AtomicI64,
    pub listings_served: AtomicI64,
    pub details_served: AtomicI64,
    pub not_found: AtomicI64,
}
