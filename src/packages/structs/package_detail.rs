use std::collections::BTreeMap;
use serde::Serialize;
use crate::packages::structs::architecture_entry::ArchitectureEntry;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PackageDetail {
    pub package: String,
    pub architectures: BTreeMap<String, ArchitectureEntry>,
}
