use anyhow::Result;

use super::super::args::{CheckCommand, CheckRule};
use super::{CommandResult, finish};
use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{undef_class::check_undef_class, unused_class::check_unused_class},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args)?;

    let rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::UndefClass => {
                let issues = check_undef_class(ctx.file_usages());
                all_issues.extend(issues.into_iter().map(Issue::UndefClass));
            }
            CheckRule::UnusedClass => {
                let issues = check_unused_class(ctx.file_usages(), &ctx.config.mark_as_used);
                all_issues.extend(issues.into_iter().map(Issue::UnusedClass));
            }
        }
    }

    all_issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    Ok(finish(all_issues, ctx.files.len()))
}
