use std::mem;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio::sync::watch;
use tulpar_server::common::common::setup_logging;
use tulpar_server::config::structs::configuration::Configuration;
use tulpar_server::control::control::run_console;
use tulpar_server::control::enums::admin_command::AdminCommand;
use tulpar_server::control::structs::server_control_plane::ServerControlPlane;
use tulpar_server::http::structs::http_service_data::HttpServiceData;
use tulpar_server::ssl::ssl::generate_self_signed_keystore;
use tulpar_server::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[LOGGING] {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config.sentry_config.environment.clone().map(Into::into),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    if args.create_selfsigned {
        match generate_self_signed_keystore(&args.selfsigned_keystore, &args.selfsigned_domain) {
            Ok(()) => {
                info!("[CERTGEN] Keystore written to {}", args.selfsigned_keystore);
                info!("[CERTGEN] Enable it with: setupssl {} - -", args.selfsigned_keystore);
                exit(0);
            }
            Err(error) => {
                error!("[CERTGEN] {}", error);
                exit(1);
            }
        }
    }

    let runtime = Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(async {
        let (shutdown_sender, mut deadlocks_handler) = watch::channel(false);
        tokio::spawn(async move {
            info!("[BOOT] Starting thread for deadlocks...");
            let mut interval = tokio::time::interval(Duration::from_secs(30));
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let deadlocks = deadlock::check_deadlock();
                        if !deadlocks.is_empty() {
                            info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                            for (i, threads) in deadlocks.iter().enumerate() {
                                info!("[DEADLOCK] #{i}");
                                for t in threads {
                                    info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                    info!("[DEADLOCK] {:#?}", t.backtrace());
                                    sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                }
                            }
                        }
                    }
                    _ = deadlocks_handler.changed() => {
                        info!("[BOOT] Shutting down thread for deadlocks...");
                        return;
                    }
                }
            }
        });

        let data = Arc::new(HttpServiceData::new(config.clone()));
        info!("[BOOT] Serving packages from {} ({} version ordering)", data.index.root.display(), config.packages.version_ordering);
        let control = Arc::new(ServerControlPlane::new(data));
        if let Err(error) = control.start().await {
            error!("[SERVER] {}", error);
            exit(1);
        }

        let console_control = control.clone();
        let no_console = args.no_console;
        let mut console = tokio::spawn(async move {
            match no_console {
                true => Ok(false),
                false => run_console(console_control).await
            }
        });

        let stopped = tokio::select! {
            _ = tokio::signal::ctrl_c() => false,
            result = &mut console => match result {
                Ok(Ok(true)) => true,
                Ok(Ok(false)) => {
                    if tokio::signal::ctrl_c().await.is_err() {
                        error!("[SERVER] Unable to listen for Ctrl-C");
                    }
                    false
                }
                Ok(Err(error)) => {
                    error!("[SERVER] {}", error);
                    exit(1);
                }
                Err(error) => {
                    error!("[CONSOLE] Console task failed: {}", error);
                    false
                }
            }
        };
        if !stopped {
            info!("[SERVER] Ctrl-C received, shutting down");
            if let Err(error) = control.execute(AdminCommand::Shutdown).await {
                error!("[SERVER] {}", error);
            }
        }

        let _ = shutdown_sender.send(true);
        info!("Server shutting down completed");
    });

    // The stdin reader may still be parked in a blocking read.
    mem::forget(runtime);
    Ok(())
}
