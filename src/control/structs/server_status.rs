use std::net::SocketAddr;
use serde::Serialize;
use crate::control::enums::server_state::ServerState;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerStatus {
    pub state: ServerState,
    /// Effective plain listener address, kept across restarts.
    pub bind_address: Option<SocketAddr>,
    /// Effective TLS listener address, kept across restarts.
    pub tls_address: Option<SocketAddr>,
    pub tls_active: bool,
}
