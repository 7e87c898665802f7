use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use log::{debug, error, info, warn};
use tokio::sync::{broadcast, watch};
use crate::admission::enums::block_expiry::BlockExpiry;
use crate::control::control::{help_lines, log_server_exit, reachability_check, stats_reporter};
use crate::control::enums::admin_command::AdminCommand;
use crate::control::enums::command_outcome::CommandOutcome;
use crate::control::enums::control_error::ControlError;
use crate::control::enums::server_state::ServerState;
use crate::control::structs::running_server::RunningServer;
use crate::control::structs::server_control_plane::ServerControlPlane;
use crate::control::structs::server_status::ServerStatus;
use crate::http::http::http_service;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::ssl::ssl::build_server_config;
use crate::ssl::structs::certificate_bundle::CertificateBundle;

impl std::fmt::Debug for ServerControlPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerControlPlane")
            .field("status", &*self.status.read())
            .field("tls_installed", &self.tls_config.read().is_some())
            .finish()
    }
}

impl ServerControlPlane {
    pub fn new(data: Arc<HttpServiceData>) -> ServerControlPlane {
        let (transitions, _) = broadcast::channel(64);
        ServerControlPlane {
            data,
            command_lock: tokio::sync::Mutex::new(()),
            status: parking_lot::RwLock::new(ServerStatus::default()),
            running: parking_lot::Mutex::new(None),
            tls_config: parking_lot::RwLock::new(None),
            transitions,
        }
    }

    pub fn status(&self) -> ServerStatus {
        *self.status.read()
    }

    pub fn state(&self) -> ServerState {
        self.status.read().state
    }

    /// Every later state transition, in order.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerState> {
        self.transitions.subscribe()
    }

    /// Binds the listener and returns once it accepts connections. Readiness
    /// is confirmed in the background by a reachability check.
    pub async fn start(&self) -> Result<ServerStatus, ControlError> {
        let _guard = self.command_lock.lock().await;
        self.start_locked()
    }

    /// Graceful stop: in-flight transfers drain, then the socket is released.
    pub async fn stop(&self) -> Result<(), ControlError> {
        let _guard = self.command_lock.lock().await;
        self.stop_locked().await
    }

    /// Stop followed by start on the same addresses.
    pub async fn restart(&self) -> Result<ServerStatus, ControlError> {
        let _guard = self.command_lock.lock().await;
        self.restart_locked().await
    }

    /// Loads the keystore, then restarts the listener with TLS. A keystore
    /// that fails to load leaves the running listener untouched.
    pub async fn enable_tls(&self, keystore_path: &str, keystore_password: &str, key_password: &str) -> Result<ServerStatus, ControlError> {
        let _guard = self.command_lock.lock().await;
        self.enable_tls_locked(keystore_path, keystore_password, key_password).await
    }

    pub async fn execute_line(&self, line: &str) -> Result<CommandOutcome, ControlError> {
        match AdminCommand::parse(line)? {
            None => Ok(CommandOutcome::Output(Vec::new())),
            Some(command) => self.execute(command).await
        }
    }

    pub async fn execute(&self, command: AdminCommand) -> Result<CommandOutcome, ControlError> {
        let _guard = self.command_lock.lock().await;
        debug!("[CONSOLE] Executing {}", command.name());
        let now = Instant::now();
        let output = match command {
            AdminCommand::Shutdown => {
                info!("[SERVER] Shutdown requested");
                if self.state() == ServerState::Running {
                    self.stop_locked().await?;
                }
                return Ok(CommandOutcome::Shutdown);
            }
            AdminCommand::Restart => {
                let status = self.restart_locked().await?;
                vec![format!("Server restarted on {}", status.listening_on())]
            }
            AdminCommand::Ban(client) => match self.data.admission.ban(&client, now) {
                BlockExpiry::Until(until) => vec![format!("Banned {} for {} seconds", client, (until - now).as_secs())],
                BlockExpiry::Indefinite => vec![format!("Banned {} until unbanned", client)],
            },
            AdminCommand::Unban(client) => match self.data.admission.unban(&client, now) {
                true => vec![format!("Unbanned {}", client)],
                false => vec![format!("{} was not banned", client)],
            },
            AdminCommand::BanList => {
                let blocked = self.data.admission.list_blocked(now);
                match blocked.is_empty() {
                    true => vec![String::from("No blocked clients.")],
                    false => blocked.into_iter().map(|entry| match entry.remaining_millis {
                        Some(remaining) => format!("{} ({} seconds left)", entry.client_id, remaining.div_ceil(1000)),
                        None => format!("{} (until unbanned)", entry.client_id),
                    }).collect()
                }
            }
            AdminCommand::SetupSsl { keystore_path, keystore_password, key_password } => {
                let status = self.enable_tls_locked(&keystore_path, &keystore_password, &key_password).await?;
                vec![format!("TLS enabled, listening on {}", status.listening_on())]
            }
            AdminCommand::Stats => self.stats_lines(now),
            AdminCommand::RequestLog(count) => {
                let lines = self.data.request_log.recent(count);
                match lines.is_empty() {
                    true => vec![String::from("No requests recorded.")],
                    false => lines
                }
            }
            AdminCommand::Help => help_lines(),
        };
        Ok(CommandOutcome::Output(output))
    }

    fn stats_lines(&self, now: Instant) -> Vec<String> {
        let status = self.status();
        let mut lines = vec![
            format!("state: {} ({})", status.state, status.listening_on()),
            format!("blocked_clients: {}", self.data.admission.blocked_count(now)),
            format!("active_transfers: {}", self.data.throttle.total_active_sessions()),
        ];
        if let Ok(serde_json::Value::Object(counters)) = serde_json::to_value(self.data.stats.get_stats()) {
            lines.extend(counters.into_iter().map(|(name, value)| format!("{name}: {value}")));
        }
        lines
    }

    fn transition(&self, state: ServerState) {
        self.status.write().state = state;
        debug!("[SERVER] State changed to {}", state);
        let _ = self.transitions.send(state);
    }

    /// Plain and TLS addresses for the next start. Addresses bound earlier
    /// win over the configuration so restarts keep their ports.
    fn listen_addresses(&self) -> Result<(Option<SocketAddr>, Option<SocketAddr>), ControlError> {
        let status = self.status();
        let plain = match status.bind_address {
            Some(address) => address,
            None => self.data.config.server.socket_address()
                .map_err(|e| ControlError::Address(e.to_string()))?
        };
        if self.tls_config.read().is_none() {
            return Ok((Some(plain), None));
        }
        match self.data.config.server.ssl_bind_address.as_deref().filter(|address| !address.is_empty()) {
            Some(ssl_address) => {
                let tls = match status.tls_address {
                    Some(address) => address,
                    None => SocketAddr::from_str(ssl_address)
                        .map_err(|e| ControlError::Address(format!("{ssl_address}: {e}")))?
                };
                Ok((Some(plain), Some(tls)))
            }
            None => Ok((None, Some(status.tls_address.unwrap_or(plain))))
        }
    }

    fn start_locked(&self) -> Result<ServerStatus, ControlError> {
        let current = self.state();
        if !matches!(current, ServerState::Stopped | ServerState::Failed) {
            return Err(ControlError::AlreadyRunning(current));
        }

        let started = Instant::now();
        self.transition(ServerState::Starting);
        let (plain, tls_address) = match self.listen_addresses() {
            Ok(addresses) => addresses,
            Err(error) => {
                self.transition(ServerState::Failed);
                return Err(error);
            }
        };
        let tls_config = self.tls_config.read().clone();
        let tls = tls_address.zip(tls_config);

        let (server, listeners) = match http_service(self.data.clone(), plain, tls) {
            Ok(service) => service,
            Err(source) => {
                let address = plain.or(tls_address).map(|address| address.to_string()).unwrap_or_default();
                error!("[SERVER] Unable to bind {}: {}", address, source);
                sentry::capture_message(&format!("Unable to bind {address}: {source}"), sentry::Level::Fatal);
                self.transition(ServerState::Failed);
                return Err(ControlError::Bind { address, source });
            }
        };

        let handle = server.handle();
        let server_task = tokio::spawn(server);
        let (shutdown, shutdown_receiver) = watch::channel(false);
        let reporter = tokio::spawn(stats_reporter(self.data.clone(), shutdown_receiver));
        if let Some(address) = listeners.plain.or(listeners.tls) {
            tokio::spawn(reachability_check(address, started));
        }
        *self.running.lock() = Some(RunningServer { handle, server_task, reporter, shutdown });

        {
            let mut status = self.status.write();
            status.bind_address = listeners.plain;
            status.tls_address = listeners.tls;
            status.tls_active = listeners.tls.is_some();
        }
        self.transition(ServerState::Running);
        let status = self.status();
        info!("[SERVER] Running on {} (bound in {:?})", status.listening_on(), started.elapsed());
        Ok(status)
    }

    async fn stop_locked(&self) -> Result<(), ControlError> {
        let current = self.state();
        if current != ServerState::Running {
            return Err(ControlError::NotRunning(current));
        }

        self.transition(ServerState::Stopping);
        let running = self.running.lock().take();
        if let Some(running) = running {
            let _ = running.shutdown.send(true);
            running.handle.stop(true).await;
            log_server_exit(running.server_task.await);
            if let Err(error) = running.reporter.await {
                warn!("[STATS] Reporter task ended abnormally: {}", error);
            }
        }
        self.status.write().tls_active = false;
        self.transition(ServerState::Stopped);
        Ok(())
    }

    async fn restart_locked(&self) -> Result<ServerStatus, ControlError> {
        info!("[SERVER] Restarting");
        if self.state() == ServerState::Running {
            self.stop_locked().await?;
        }
        self.start_locked()
    }

    async fn enable_tls_locked(&self, keystore_path: &str, keystore_password: &str, key_password: &str) -> Result<ServerStatus, ControlError> {
        let current = self.state();
        if current != ServerState::Running {
            return Err(ControlError::NotRunning(current));
        }

        let bundle = CertificateBundle::load_keystore(keystore_path, keystore_password, key_password)?;
        let tls_config = build_server_config(&bundle)?;
        info!("[SSL] Keystore {} loaded, restarting with TLS", keystore_path);

        self.stop_locked().await?;
        *self.tls_config.write() = Some(tls_config);
        self.start_locked()
    }
}
