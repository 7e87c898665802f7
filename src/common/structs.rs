/// Free-form error carrying a message.
pub mod custom_error;

/// Striped map keyed by client identity.
pub mod client_shards;
