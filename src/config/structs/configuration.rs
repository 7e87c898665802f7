use serde::{Deserialize, Serialize};
use crate::config::structs::packages_config::PackagesConfig;
use crate::config::structs::paths_config::PathsConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::server_config::ServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_file: Option<String>,
    pub log_console_interval: u64,
    pub server: ServerConfig,
    pub paths: PathsConfig,
    pub packages: PackagesConfig,
    pub sentry_config: SentryConfig
}
