/// Errors raised while loading or generating TLS material.
pub mod certificate_error;
