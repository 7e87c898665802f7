use std::collections::BTreeMap;
use serde::Serialize;
use crate::packages::enums::version_rank::VersionRank;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ArchitectureEntry {
    /// `"<version>-<release>"` of the highest ranked build.
    pub latest: String,
    #[serde(skip)]
    pub latest_rank: VersionRank,
    /// `"<version>-<release>"` to download URL.
    pub versions: BTreeMap<String, String>,
}
