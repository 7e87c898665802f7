use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(chrono::Utc::now().timestamp()),
            requests_admitted: AtomicI64::new(0),
            requests_rate_limited: AtomicI64::new(0),
            requests_blocked: AtomicI64::new(0),
            downloads_started: AtomicI64::new(0),
            downloads_rejected: AtomicI64::new(0),
            downloads_completed: AtomicI64::new(0),
            downloads_failed: AtomicI64::new(0),
            bytes_sent: AtomicI64::new(0),
            files_viewed: AtomicI64::new(0),
            listings_served: AtomicI64::new(0),
            details_served: AtomicI64::new(0),
            not_found: AtomicI64::new(0),
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::RequestsAdmitted => &self.requests_admitted,
            StatsEvent::RequestsRateLimited => &self.requests_rate_limited,
            StatsEvent::RequestsBlocked => &self.requests_blocked,
            StatsEvent::DownloadsStarted => &self.downloads_started,
            StatsEvent::DownloadsRejected => &self.downloads_rejected,
            StatsEvent::DownloadsCompleted => &self.downloads_completed,
            StatsEvent::DownloadsFailed => &self.downloads_failed,
            StatsEvent::BytesSent => &self.bytes_sent,
            StatsEvent::FilesViewed => &self.files_viewed,
            StatsEvent::ListingsServed => &self.listings_served,
            StatsEvent::DetailsServed => &self.details_served,
            StatsEvent::NotFound => &self.not_found,
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::Relaxed); }
        if value < 0 { counter.fetch_sub(-value, Ordering::Relaxed); }
    }

    pub fn get_stats(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::Relaxed),
            requests_admitted: self.requests_admitted.load(Ordering::Relaxed),
            requests_rate_limited: self.requests_rate_limited.load(Ordering::Relaxed),
            requests_blocked: self.requests_blocked.load(Ordering::Relaxed),
            downloads_started: self.downloads_started.load(Ordering::Relaxed),
            downloads_rejected: self.downloads_rejected.load(Ordering::Relaxed),
            downloads_completed: self.downloads_completed.load(Ordering::Relaxed),
            downloads_failed: self.downloads_failed.load(Ordering::Relaxed),
            bytes_sent: self.bytes_sent.load(Ordering::Relaxed),
            files_viewed: self.files_viewed.load(Ordering::Relaxed),
            listings_served: self.listings_served.load(Ordering::Relaxed),
            details_served: self.details_served.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
        }
    }
}
