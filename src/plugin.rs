use crate::config::PluginConfig;
use crate::errors::{Error, Result};
use crate::host::{EventDispatcher, HostCommand, TerminateEvent, TerminateListener};
use crate::instructions::read_instructions;
use crate::updater::{UpdateOutcome, update_version_in_file};
use log::debug;

/// Name of the host command the plugin reacts to.
pub const VERSION_COMMAND: &str = "version";

const PLUGIN_NAME: &str = "poetry_bumpversion";

/// The version-bump lifecycle hook.
///
/// Once registered with the host's event dispatcher, it watches for the
/// `version` command terminating with a version argument and then rewrites
/// every file the project configuration points at. All failures are
/// downgraded to console lines; the host command's own exit path is never
/// affected.
#[derive(Debug, Default)]
pub struct BumpVersionPlugin;

impl BumpVersionPlugin {
    pub fn new() -> Self {
        Self
    }

    /// Hooks the plugin into the host's dispatch loop. Registration is the
    /// only state the plugin keeps.
    pub fn activate(self, dispatcher: &mut dyn EventDispatcher) {
        dispatcher.add_terminate_listener(Box::new(self));
    }
}

impl TerminateListener for BumpVersionPlugin {
    fn on_terminate(&self, event: &TerminateEvent<'_>) {
        let command = event.command();
        if command.name() != VERSION_COMMAND {
            return;
        }
        // Without an argument the command only displayed the version.
        if command.version_argument().is_none_or(str::is_empty) {
            return;
        }
        match handle_version_update(command) {
            Ok(()) => {}
            Err(err) if err.is_warning() => command.warning(&prefixed(&err.to_string())),
            Err(err) => command.error(&prefixed(&format!("unexpected failure: {err}"))),
        }
    }
}

/// Runs one version-bump pass over the configured files.
///
/// Computes the version pair from host state, resolves the configured
/// instructions and applies each one, reporting every outcome through the
/// host console.
///
/// # Errors
///
/// [`Error::Plugin`] when there is nothing to do (no change in version, or
/// no file replacements configured); [`Error::Toml`] when the configuration
/// section is malformed; any I/O failure on a file that exists.
pub fn handle_version_update(command: &dyn HostCommand) -> Result<()> {
    let current_version = command.pretty_version().to_string();
    let version_arg = command
        .version_argument()
        .ok_or_else(|| Error::Host("version argument missing".to_string()))?;
    let new_version = command.increment_version(&current_version, version_arg)?;
    if new_version == current_version {
        return Err("no change in version detected".into());
    }
    debug!("bumping version {current_version} -> {new_version}");

    let config = PluginConfig::from_document(command.project_document())?;
    let mut instruction_count = 0;
    for instruction in read_instructions(&config) {
        instruction_count += 1;
        let outcome = update_version_in_file(
            &instruction,
            &current_version,
            &new_version,
            command.is_dry_run(),
        )?;
        match outcome {
            UpdateOutcome::Updated => command.info(&prefixed(&format!(
                "processed file {}",
                instruction.file.display()
            ))),
            UpdateOutcome::Skipped(reason) => command.warning(&prefixed(&format!(
                "skipped file {}: {reason}",
                instruction.file.display()
            ))),
        }
    }

    if instruction_count == 0 {
        return Err("nothing to do, please add file replacements".into());
    }
    Ok(())
}

/// Formats `text` for the host console.
fn prefixed(text: &str) -> String {
    format!("{PLUGIN_NAME}: {text}")
}
