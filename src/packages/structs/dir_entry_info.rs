use crate::packages::enums::file_kind::FileKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: FileKind,
}
