use anyhow::Result;

use super::{
    super::{args::ScanCommand, exit_status::ExitStatus, report},
    PluginContext,
};
use crate::core::i18n::scan_for_strings_with;

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let ctx = PluginContext::load(&cmd.plugin)?;
    let result = scan_for_strings_with(&ctx.root, &ctx.scan_options)?;

    report::print_scan(&result, &ctx.root);
    if result.skipped_count > 0 {
        report::print_warning(&format!(
            "{} path(s) skipped due to access errors",
            result.skipped_count
        ));
    }

    Ok(ExitStatus::Success)
}
