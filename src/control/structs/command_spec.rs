use crate::control::enums::admin_command::AdminCommand;
use crate::control::enums::command_error::CommandError;

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub parse: fn(&[&str]) -> Result<AdminCommand, CommandError>,
}
