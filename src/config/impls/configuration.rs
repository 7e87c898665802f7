use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::version_ordering::VersionOrdering;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::packages_config::PackagesConfig;
use crate::config::structs::paths_config::PathsConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::server_config::ServerConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];
const URL_PLACEHOLDERS: [&str; 4] = ["{name}", "{version}", "{release}", "{architecture}"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_file: Some(String::from("./server.log")),
            log_console_interval: 300,
            server: ServerConfig {
                address: String::from("0.0.0.0"),
                port: 8080,
                max_requests: 50,
                block_duration_millis: 60_000,
                manual_ban_duration_millis: 0,
                max_downloads_per_ip: 2,
                max_download_speed: 1_048_576,
                buffer_size: 1024,
                threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(4),
                keep_alive: 60,
                request_timeout: 15,
                disconnect_timeout: 15,
                shutdown_timeout: 30,
                real_ip: None,
                ssl_bind_address: None,
                request_log_capacity: 1000,
            },
            paths: PathsConfig {
                packages: String::from("package"),
                static_dir: String::from("static"),
                icons_dir: String::from("icons"),
                errors_dir: String::from("errors"),
                favicon: String::from("favicon.ico"),
                index: String::from("index.html"),
            },
            packages: PackagesConfig {
                download_url_template: String::from("repo.nuros.org/packages/{name}-{version}-{release}-{architecture}.apg"),
                version_ordering: VersionOrdering::score,
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::from(""),
                debug: false,
                environment: None,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 0.0,
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path).map_err(ConfigurationError::IOError)?;
        Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start the server again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {error}");
            return Err(error);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CustomError::new(&format!("Unknown log level: '{}'", self.log_level)));
        }
        let numeric_checks = [
            ("server.port", self.server.port as u64),
            ("server.maxRequests", self.server.max_requests),
            ("server.maxDownloadsPerIP", self.server.max_downloads_per_ip),
            ("server.BUFFER_SIZE", self.server.buffer_size as u64),
            ("server.threads", self.server.threads),
            ("server.requestLogCapacity", self.server.request_log_capacity as u64),
        ];
        for (name, value) in numeric_checks {
            if value == 0 {
                return Err(CustomError::new(&format!("{name} must be greater than 0")));
            }
        }
        self.server.socket_address()?;
        if let Some(ssl_bind_address) = &self.server.ssl_bind_address {
            ssl_bind_address
                .parse::<std::net::SocketAddr>()
                .map_err(|e| CustomError::new(&format!("invalid server.sslBindAddress {ssl_bind_address}: {e}")))?;
        }
        for placeholder in URL_PLACEHOLDERS {
            if !self.packages.download_url_template.contains(placeholder) {
                return Err(CustomError::new(&format!("packages.download_url_template is missing {placeholder}")));
            }
        }
        Ok(())
    }
}
