use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::packages::enums::file_kind::FileKind;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PackageListing {
    pub name: String,
    pub files: BTreeMap<String, FileKind>,
}
