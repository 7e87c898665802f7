use serde::{Deserialize, Serialize};
use crate::config::enums::version_ordering::VersionOrdering;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PackagesConfig {
    /// Placeholders: `{name}`, `{version}`, `{release}`, `{architecture}`.
    pub download_url_template: String,
    pub version_ordering: VersionOrdering
}
