pub mod custom_error;

pub mod client_shards;
