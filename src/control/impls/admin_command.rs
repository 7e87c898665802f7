use crate::control::control::COMMAND_TABLE;
use crate::control::enums::admin_command::AdminCommand;
use crate::control::enums::command_error::CommandError;

impl AdminCommand {
    /// Parses one console line. The command name is case-insensitive,
    /// arguments are whitespace separated.
    pub fn parse(line: &str) -> Result<Option<AdminCommand>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let name = name.to_lowercase();
        let arguments: Vec<&str> = words.collect();
        let spec = COMMAND_TABLE.get(name.as_str())
            .ok_or_else(|| CommandError::Unknown(name.clone()))?;
        if arguments.len() < spec.min_args || arguments.len() > spec.max_args {
            return Err(CommandError::Usage(spec.usage));
        }
        (spec.parse)(&arguments).map(Some)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AdminCommand::Shutdown => "shutdown",
            AdminCommand::Restart => "restart",
            AdminCommand::Ban(_) => "ban",
            AdminCommand::Unban(_) => "unban",
            AdminCommand::BanList => "banlist",
            AdminCommand::SetupSsl { .. } => "setupssl",
            AdminCommand::Stats => "stats",
            AdminCommand::RequestLog(_) => "requestlog",
            AdminCommand::Help => "help",
        }
    }
}
