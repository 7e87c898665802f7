use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{error, info, warn};
use once_cell::sync::Lazy;
use tokio::io::AsyncBufReadExt;
use tokio::net::TcpStream;
use tokio::sync::watch;
use crate::control::enums::admin_command::AdminCommand;
use crate::control::enums::command_error::CommandError;
use crate::control::enums::command_outcome::CommandOutcome;
use crate::control::enums::control_error::ControlError;
use crate::control::structs::command_spec::CommandSpec;
use crate::control::structs::server_control_plane::ServerControlPlane;
use crate::http::structs::http_service_data::HttpServiceData;

pub const REACHABILITY_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_REQUEST_LOG_LINES: usize = 20;

pub static COMMAND_TABLE: Lazy<BTreeMap<&'static str, CommandSpec>> = Lazy::new(|| {
    [
        CommandSpec {
            name: "shutdown",
            usage: "shutdown",
            description: "Stop the server and exit",
            min_args: 0,
            max_args: 0,
            parse: |_| Ok(AdminCommand::Shutdown),
        },
        CommandSpec {
            name: "restart",
            usage: "restart",
            description: "Restart the listener on the same address",
            min_args: 0,
            max_args: 0,
            parse: |_| Ok(AdminCommand::Restart),
        },
        CommandSpec {
            name: "ban",
            usage: "ban <ip>",
            description: "Block a client",
            min_args: 1,
            max_args: 1,
            parse: |arguments| parse_client(arguments[0]).map(AdminCommand::Ban),
        },
        CommandSpec {
            name: "unban",
            usage: "unban <ip>",
            description: "Lift a block",
            min_args: 1,
            max_args: 1,
            parse: |arguments| parse_client(arguments[0]).map(AdminCommand::Unban),
        },
        CommandSpec {
            name: "banlist",
            usage: "banlist",
            description: "List blocked clients",
            min_args: 0,
            max_args: 0,
            parse: |_| Ok(AdminCommand::BanList),
        },
        CommandSpec {
            name: "setupssl",
            usage: "setupssl <keystorePath> <keystorePassword> <keyManagerPassword>",
            description: "Restart the listener with TLS from a PEM keystore",
            min_args: 3,
            max_args: 3,
            parse: |arguments| Ok(AdminCommand::SetupSsl {
                keystore_path: arguments[0].to_string(),
                keystore_password: arguments[1].to_string(),
                key_password: arguments[2].to_string(),
            }),
        },
        CommandSpec {
            name: "stats",
            usage: "stats",
            description: "Show runtime statistics",
            min_args: 0,
            max_args: 0,
            parse: |_| Ok(AdminCommand::Stats),
        },
        CommandSpec {
            name: "requestlog",
            usage: "requestlog [n]",
            description: "Show the last n requests (default 20)",
            min_args: 0,
            max_args: 1,
            parse: |arguments| match arguments.first() {
                None => Ok(AdminCommand::RequestLog(DEFAULT_REQUEST_LOG_LINES)),
                Some(count) => usize::from_str(count)
                    .map(AdminCommand::RequestLog)
                    .map_err(|e| CommandError::InvalidArgument { argument: count.to_string(), reason: e.to_string() }),
            },
        },
        CommandSpec {
            name: "help",
            usage: "help",
            description: "Show this list",
            min_args: 0,
            max_args: 0,
            parse: |_| Ok(AdminCommand::Help),
        },
    ]
        .into_iter()
        .map(|spec| (spec.name, spec))
        .collect()
});

/// Client identities are canonical IP strings, matching what the HTTP layer records.
fn parse_client(argument: &str) -> Result<String, CommandError> {
    IpAddr::from_str(argument)
        .map(|ip| ip.to_string())
        .map_err(|e| CommandError::InvalidArgument { argument: argument.to_string(), reason: e.to_string() })
}

pub fn help_lines() -> Vec<String> {
    COMMAND_TABLE.values()
        .map(|spec| format!("{:<66} {}", spec.usage, spec.description))
        .collect()
}

/// Reads administrative commands from stdin until `shutdown`, end of input
/// or a fatal error. Commands run one at a time.
///
/// Returns `true` when the operator asked for shutdown and `false` when the
/// input ended.
pub async fn run_console(control: Arc<ServerControlPlane>) -> Result<bool, ControlError>
{
    info!("[CONSOLE] Type 'help' for the list of commands");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("[CONSOLE] Input closed, console stopped");
                return Ok(false);
            }
            Err(error) => {
                warn!("[CONSOLE] Unable to read input: {}", error);
                return Ok(false);
            }
        };

        match control.execute_line(&line).await {
            Ok(CommandOutcome::Output(output)) => {
                for message in output {
                    info!("[CONSOLE] {}", message);
                }
            }
            Ok(CommandOutcome::Shutdown) => return Ok(true),
            Err(error) if error.is_fatal() => return Err(error),
            Err(error) => warn!("[CONSOLE] {}", error),
        }
    }
}

/// Diagnostic connect to the new listener; never affects availability.
pub async fn reachability_check(address: SocketAddr, started: Instant)
{
    match tokio::time::timeout(REACHABILITY_TIMEOUT, TcpStream::connect(address)).await {
        Ok(Ok(_)) => {
            info!("[SERVER] Listener {} reachable, ready after {:?}", address, started.elapsed());
            return;
        }
        Ok(Err(error)) => warn!("[SERVER] Unable to reach {}: {}", address, error),
        Err(_) => warn!("[SERVER] Unable to reach {} within {:?}", address, REACHABILITY_TIMEOUT),
    }

    let loopback = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), address.port());
    match tokio::time::timeout(REACHABILITY_TIMEOUT, TcpStream::connect(loopback)).await {
        Ok(Ok(_)) => info!("[SERVER] Listener reachable through {}", loopback),
        Ok(Err(error)) => warn!("[SERVER] Unable to reach {}: {}", loopback, error),
        Err(_) => warn!("[SERVER] Unable to reach {} within {:?}", loopback, REACHABILITY_TIMEOUT),
    }
}

/// Logs a `[STATS]` line every `log_console_interval` seconds until `shutdown` flips.
pub async fn stats_reporter(data: Arc<HttpServiceData>, mut shutdown: watch::Receiver<bool>)
{
    let interval_seconds = data.config.log_console_interval.max(1);
    let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));
    interval.tick().await;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let stats = data.stats.get_stats();
                info!(
                    "[STATS] Requests: admitted {} limited {} blocked {} | Downloads: started {} completed {} failed {} rejected {} | Bytes sent {}",
                    stats.requests_admitted, stats.requests_rate_limited, stats.requests_blocked,
                    stats.downloads_started, stats.downloads_completed, stats.downloads_failed, stats.downloads_rejected,
                    stats.bytes_sent
                );
                info!(
                    "[STATS] Blocked clients {} | Active transfers {} | Listings {} Details {} Views {} Misses {}",
                    data.admission.blocked_count(Instant::now()), data.throttle.total_active_sessions(),
                    stats.listings_served, stats.details_served, stats.files_viewed, stats.not_found
                );
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }
}

/// Server task outcome, logged when the listener ends.
pub fn log_server_exit(result: Result<std::io::Result<()>, tokio::task::JoinError>)
{
    match result {
        Ok(Ok(())) => info!("[SERVER] Listener stopped"),
        Ok(Err(error)) => error!("[SERVER] Listener ended with an error: {}", error),
        Err(error) => error!("[SERVER] Listener task failed: {}", error),
    }
}
