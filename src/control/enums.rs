/// Listener lifecycle states.
pub mod server_state;

/// Control plane errors.
pub mod control_error;

/// Parsed administrative commands.
pub mod admin_command;

/// Command parsing errors.
pub mod command_error;

/// Result of an executed command.
pub mod command_outcome;
