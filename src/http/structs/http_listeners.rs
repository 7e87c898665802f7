use std::net::SocketAddr;

/// Addresses actually bound, which differ from the requested ones for port 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HttpListeners {
    pub plain: Option<SocketAddr>,
    pub tls: Option<SocketAddr>,
}
