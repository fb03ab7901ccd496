use anyhow::Result;

use super::super::{args::MethodCommand, exit_status::ExitStatus, report};
use crate::core::php::{
    EditOutcome, MethodDescriptor, ensure_class_declared, insert_method, method_exists,
};

pub fn method(cmd: MethodCommand) -> Result<ExitStatus> {
    if cmd.create_class {
        let outcome = ensure_class_declared(&cmd.file, &cmd.class_name)?;
        if outcome != EditOutcome::Unchanged {
            report::print_outcome(
                outcome,
                &report::class_outcome_message(outcome, &cmd.class_name, &cmd.file),
            );
        }
    }

    if method_exists(&cmd.file, &cmd.class_name, &cmd.method_name) {
        report::print_failure(&format!(
            "Method {} already exists in class {}",
            cmd.method_name, cmd.class_name
        ));
        return Ok(ExitStatus::Failure);
    }

    let descriptor = MethodDescriptor::new(cmd.class_name, cmd.method_name, &cmd.file)
        .with_visibility(cmd.visibility)
        .with_static(cmd.is_static);
    let outcome = insert_method(&descriptor)?;
    report::print_outcome(
        outcome,
        &report::method_outcome_message(outcome, &descriptor),
    );

    Ok(outcome.into())
}
