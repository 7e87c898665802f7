pub mod admission_controller;

pub mod admission_decision;

pub mod client_rate_state;

pub mod deny_reason;

pub mod sweep_mark;
