use std::fmt;
use crate::config::enums::version_ordering::VersionOrdering;

impl fmt::Display for VersionOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionOrdering::score => f.write_str("score"),
            VersionOrdering::numeric => f.write_str("numeric"),
        }
    }
}
