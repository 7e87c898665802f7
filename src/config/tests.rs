#[cfg(test)]
mod config_tests {
    use std::time::Duration;
    use crate::config::enums::version_ordering::VersionOrdering;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_defaults_validate() {
        let config = Configuration::init();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.max_requests, 50);
        assert_eq!(config.server.block_duration(), Duration::from_secs(60));
        assert_eq!(config.server.manual_ban_duration(), None);
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.paths.packages, "package");
    }

    #[test]
    fn test_round_trip_keeps_legacy_key_names() {
        let config = Configuration::init();
        let serialized = toml::to_string(&config).unwrap();
        assert!(serialized.contains("maxRequests"));
        assert!(serialized.contains("blockDurationMillis"));
        assert!(serialized.contains("maxDownloadsPerIP"));
        assert!(serialized.contains("maxDownloadSpeed"));
        assert!(serialized.contains("BUFFER_SIZE"));
        let parsed = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(parsed.server, config.server);
        assert_eq!(parsed.packages, config.packages);
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        let mut config = Configuration::init();
        config.server.max_downloads_per_ip = 0;
        assert!(config.validate().is_err());

        let mut config = Configuration::init();
        config.server.buffer_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("verbose");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_incomplete_url_template() {
        let mut config = Configuration::init();
        config.packages.download_url_template = String::from("repo/{name}-{version}.apg");
        let error = config.validate().unwrap_err();
        assert!(error.message.contains("{release}"));
    }

    #[test]
    fn test_manual_ban_duration() {
        let mut config = Configuration::init();
        config.server.manual_ban_duration_millis = 1500;
        assert_eq!(config.server.manual_ban_duration(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_version_ordering_serialization() {
        assert_eq!(serde_json::to_string(&VersionOrdering::score).unwrap(), "\"score\"");
        let parsed: VersionOrdering = serde_json::from_str("\"numeric\"").unwrap();
        assert_eq!(parsed, VersionOrdering::numeric);
        assert_eq!(VersionOrdering::default(), VersionOrdering::score);
    }
}
