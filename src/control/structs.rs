/// The lifecycle supervisor.
pub mod server_control_plane;

/// Observable lifecycle status.
pub mod server_status;

/// Handles of a started listener.
pub mod running_server;

/// One entry of the administrative command table.
pub mod command_spec;
