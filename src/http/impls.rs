pub mod http_service_data;

pub mod request_log;
