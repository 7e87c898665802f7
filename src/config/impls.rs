pub mod configuration;

pub mod configuration_error;

pub mod server_config;

pub mod version_ordering;
