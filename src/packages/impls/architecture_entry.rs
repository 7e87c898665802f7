use std::collections::BTreeMap;
use crate::packages::enums::version_rank::VersionRank;
use crate::packages::structs::architecture_entry::ArchitectureEntry;

impl ArchitectureEntry {
    pub fn new(version_release: String, rank: VersionRank, download_url: String) -> ArchitectureEntry {
        let mut versions = BTreeMap::new();
        versions.insert(version_release.clone(), download_url);
        ArchitectureEntry {
            latest: version_release,
            latest_rank: rank,
            versions,
        }
    }

    /// Records another build; it becomes `latest` only when it strictly
    /// outranks the current one.
    pub fn record(&mut self, version_release: String, rank: VersionRank, download_url: String) {
        if rank.outranks(&self.latest_rank) {
            self.latest = version_release.clone();
            self.latest_rank = rank;
        }
        self.versions.insert(version_release, download_url);
    }
}
