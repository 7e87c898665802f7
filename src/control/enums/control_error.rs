use thiserror::Error;
use crate::control::enums::command_error::CommandError;
use crate::control::enums::server_state::ServerState;
use crate::ssl::enums::certificate_error::CertificateError;

#[derive(Debug, Error)]
pub enum ControlError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid listen address: {0}")]
    Address(String),
    #[error("Server is not running (state: {0})")]
    NotRunning(ServerState),
    #[error("Server cannot start from state {0}")]
    AlreadyRunning(ServerState),
    #[error(transparent)]
    Certificate(#[from] CertificateError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl ControlError {
    /// Bind failures end the process; every other error is reported and ignored.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ControlError::Bind { .. })
    }
}
