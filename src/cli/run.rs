use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{class::class, i18n::i18n, init::init, method::method, scan::scan},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command, .. }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Class(cmd)) => class(cmd),
        Some(Command::Method(cmd)) => method(cmd),
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::I18n(cmd)) => i18n(cmd),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
