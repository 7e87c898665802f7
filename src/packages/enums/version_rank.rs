#[derive(Debug, Clone, PartialEq)]
pub enum VersionRank {
    /// `parse(version) * 1000 + release`, or 0 when the version is not a number.
    Score(f64),
    /// Dot-separated numeric components, `release` breaking ties.
    Numeric {
        components: Vec<u64>,
        release: i64,
    },
}
