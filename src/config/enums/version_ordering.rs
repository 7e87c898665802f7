use serde::{Deserialize, Serialize};

/// How versions of one package/architecture are ranked.
///
/// - `score`: `version` parsed as a float, times 1000, plus `release`.
///   Distinct strings can collide ("1.10" and "1.1" are the same float) and an
///   unparsable version scores 0. This is what existing repository clients
///   observe, so it stays the default.
/// - `numeric`: dot-separated components compared numerically left to right,
///   `release` breaks ties.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionOrdering {
    #[default]
    score,
    numeric,
}
