use anyhow::Result;

use super::super::{args::ClassCommand, exit_status::ExitStatus, report};
use crate::core::php::ensure_class_declared;

pub fn class(cmd: ClassCommand) -> Result<ExitStatus> {
    let outcome = ensure_class_declared(&cmd.file, &cmd.class_name)?;
    report::print_outcome(
        outcome,
        &report::class_outcome_message(outcome, &cmd.class_name, &cmd.file),
    );
    Ok(outcome.into())
}
