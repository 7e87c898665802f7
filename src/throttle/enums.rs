/// Errors returned by the transfer throttle.
pub mod throttle_error;
