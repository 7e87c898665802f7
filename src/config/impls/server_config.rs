use std::net::SocketAddr;
use std::time::Duration;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::server_config::ServerConfig;

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn socket_address(&self) -> Result<SocketAddr, CustomError> {
        self.bind_address()
            .parse::<SocketAddr>()
            .map_err(|e| CustomError::new(&format!("invalid bind address {}: {}", self.bind_address(), e)))
    }

    pub fn block_duration(&self) -> Duration {
        Duration::from_millis(self.block_duration_millis)
    }

    /// `None` means operator bans last until lifted.
    pub fn manual_ban_duration(&self) -> Option<Duration> {
        match self.manual_ban_duration_millis {
            0 => None,
            millis => Some(Duration::from_millis(millis))
        }
    }
}
