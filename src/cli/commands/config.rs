use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;

use super::usage;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change saved preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_config(context),
        [action] if action.eq_ignore_ascii_case("show") => show_config(context),
        [action, key, value @ ..] if action.eq_ignore_ascii_case("set") && !value.is_empty() => {
            let key = key.to_lowercase();
            context.config.set(&key, &value.join(" "))?;
            context.persist_config()?;
            if let Some((_, stored)) = context
                .config
                .entries()
                .into_iter()
                .find(|(name, _)| *name == key)
            {
                output::success(format!("Set {key} = {stored}."));
            }
            Ok(())
        }
        _ => Err(usage(&format!(
            "config [show|set <{}> <value>]",
            CONFIG_KEYS.join("|")
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    for (key, value) in context.config.entries() {
        output::info(format!("  {key:<18} {value}"));
    }
    output::info(format!(
        "  {:<18} {}",
        "file",
        context.config_manager.path().display()
    ));
    Ok(())
}
