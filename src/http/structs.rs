/// Registries and configuration reachable from every handler.
pub mod http_service_data;

/// Bounded in-memory request log.
pub mod request_log;

/// Query string of `/api/v2.0/info`.
pub mod info_query;

/// Query string of `/api/v2.0/get`.
pub mod get_query;

/// Query string of `/api/v2.0/list`.
pub mod list_query;

/// Query string of `/errors/404.html`.
pub mod error_page_query;

/// Bound listener addresses.
pub mod http_listeners;
