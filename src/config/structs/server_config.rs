use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Accepted requests per client per rolling 60 seconds.
    pub max_requests: u64,
    /// Length of the automatic block once `max_requests` is exceeded.
    pub block_duration_millis: u64,
    /// Length of an operator ban, 0 keeps the ban until `unban`.
    pub manual_ban_duration_millis: u64,
    #[serde(rename = "maxDownloadsPerIP")]
    pub max_downloads_per_ip: u64,
    /// Bytes per second per client, 0 disables pacing.
    pub max_download_speed: u64,
    #[serde(rename = "BUFFER_SIZE")]
    pub buffer_size: usize,
    pub threads: u64,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub shutdown_timeout: u64,
    pub real_ip: Option<String>,
    pub ssl_bind_address: Option<String>,
    pub request_log_capacity: usize,
}
