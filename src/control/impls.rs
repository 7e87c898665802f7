pub mod server_control_plane;

pub mod server_state;

pub mod admin_command;

pub mod server_status;
