pub mod transfer_throttle;

pub mod transfer_token;
