use std::sync::Arc;
use tokio::sync::broadcast;
use crate::control::enums::server_state::ServerState;
use crate::control::structs::running_server::RunningServer;
use crate::control::structs::server_status::ServerStatus;
use crate::http::structs::http_service_data::HttpServiceData;

pub struct ServerControlPlane {
    pub data: Arc<HttpServiceData>,
    pub command_lock: tokio::sync::Mutex<()>,
    pub status: parking_lot::RwLock<ServerStatus>,
    pub running: parking_lot::Mutex<Option<RunningServer>>,
    pub tls_config: parking_lot::RwLock<Option<rustls::ServerConfig>>,
    pub transitions: broadcast::Sender<ServerState>,
}
