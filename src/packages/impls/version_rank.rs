use std::cmp::Ordering;
use crate::config::enums::version_ordering::VersionOrdering;
use crate::packages::enums::version_rank::VersionRank;

impl VersionRank {
    pub fn compute(ordering: VersionOrdering, version: &str, release: i64) -> VersionRank {
        match ordering {
            VersionOrdering::score => VersionRank::Score(
                version.trim()
                    .parse::<f64>()
                    .map(|value| value * 1000.0 + release as f64)
                    .unwrap_or(0.0)
            ),
            VersionOrdering::numeric => VersionRank::Numeric {
                components: version.trim()
                    .split('.')
                    .map(|part| part.trim().parse::<u64>().unwrap_or(0))
                    .collect(),
                release,
            },
        }
    }

    /// Strictly higher than `other`. Equal ranks never displace each other.
    pub fn outranks(&self, other: &VersionRank) -> bool {
        match (self, other) {
            (VersionRank::Score(a), VersionRank::Score(b)) => a > b,
            (
                VersionRank::Numeric { components: a, release: a_release },
                VersionRank::Numeric { components: b, release: b_release },
            ) => compare_components(a, b).then(a_release.cmp(b_release)) == Ordering::Greater,
            _ => false,
        }
    }
}

/// Missing trailing components count as 0, so `1.2` equals `1.2.0`.
fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let length = a.len().max(b.len());
    for index in 0..length {
        let left = a.get(index).copied().unwrap_or(0);
        let right = b.get(index).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
