use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    RequestsAdmitted,
    RequestsRateLimited,
    RequestsBlocked,
    DownloadsStarted,
    DownloadsRejected,
    DownloadsCompleted,
    DownloadsFailed,
    BytesSent,
    FilesViewed,
    ListingsServed,
    DetailsServed,
    NotFound,
}
