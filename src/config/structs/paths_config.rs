use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    pub packages: String,
    pub static_dir: String,
    pub icons_dir: String,
    pub errors_dir: String,
    /// Relative to `static_dir`.
    pub favicon: String,
    /// Relative to `static_dir`.
    pub index: String
}
