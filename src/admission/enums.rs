/// Outcome of an admission check.
pub mod admission_decision;

/// Why a request was denied.
pub mod deny_reason;

/// When a block ends.
pub mod block_expiry;
