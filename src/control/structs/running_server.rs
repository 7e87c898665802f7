use actix_web::dev::ServerHandle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct RunningServer {
    pub handle: ServerHandle,
    pub server_task: JoinHandle<std::io::Result<()>>,
    pub reporter: JoinHandle<()>,
    pub shutdown: watch::Sender<bool>,
}
