use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThrottleError {
    #[error("Maximum downloads reached.")]
    TooManyConcurrent { client_id: String, limit: u64 },
}
