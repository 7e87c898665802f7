use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    /// Absent in older metadata files, read as 0.
    #[serde(default)]
    pub release: i64,
    pub architecture: String,
}
