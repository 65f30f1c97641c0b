use crate::errors::Result;

/// Console verbosity of a line written back to the host for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warning,
    Error,
}

/// The slice of the host's completed command that the plugin is allowed to
/// read from and report through.
///
/// The host owns argument parsing, the project document, and the
/// version-increment rule; the plugin only consumes them. Host binaries
/// provide the implementation when embedding the plugin.
pub trait HostCommand {
    /// Name of the command that just ran.
    fn name(&self) -> &str;

    /// Value of the command's `version` argument, if one was supplied.
    fn version_argument(&self) -> Option<&str>;

    /// `true` when the command ran with `--dry-run`.
    fn is_dry_run(&self) -> bool;

    /// The package's current pretty version string.
    fn pretty_version(&self) -> &str;

    /// The package's parsed declarative project document.
    fn project_document(&self) -> &toml::Value;

    /// Applies the host's version-increment rule to `current` and the
    /// supplied argument (a bump rule or an explicit version).
    fn increment_version(&self, current: &str, requested: &str) -> Result<String>;

    /// Writes one line to the host console.
    fn line(&self, level: ConsoleLevel, text: &str);

    /// Writes an info line to the host console.
    fn info(&self, text: &str) {
        self.line(ConsoleLevel::Info, text);
    }

    /// Writes a warning line to the host console.
    fn warning(&self, text: &str) {
        self.line(ConsoleLevel::Warning, text);
    }

    /// Writes an error line to the host console.
    fn error(&self, text: &str) {
        self.line(ConsoleLevel::Error, text);
    }
}

/// Fired by the host's dispatch loop once a command has run to completion.
pub struct TerminateEvent<'a> {
    command: &'a dyn HostCommand,
}

impl<'a> TerminateEvent<'a> {
    pub fn new(command: &'a dyn HostCommand) -> Self {
        Self { command }
    }

    /// The command that terminated.
    pub fn command(&self) -> &'a dyn HostCommand {
        self.command
    }
}

/// Receiver side of the host's command-terminated notification. Listeners
/// are invoked synchronously, after the command's own work is done.
pub trait TerminateListener {
    fn on_terminate(&self, event: &TerminateEvent<'_>);
}

/// Registration seam offered by the host's dispatch loop.
pub trait EventDispatcher {
    /// Registers `listener` for the command-terminated notification.
    fn add_terminate_listener(&mut self, listener: Box<dyn TerminateListener>);
}
