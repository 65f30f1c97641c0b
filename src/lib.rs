//! A version-bump plugin for a host command-line application that manages a
//! pyproject-style project file.
//!
//! When the host's `version` command terminates with a new version, the
//! plugin reads the `tool.poetry_bumpversion` section of the project
//! document and rewrites every configured file, replacing occurrences of the
//! current version string with the new one. The main components are:
//!
//! - `config`: the typed model of the declarative configuration, with its
//!   two shapes (per-file entries and replacement groups).
//! - `instructions`: flattens the configuration into an ordered sequence of
//!   per-file instructions.
//! - `updater`: applies one instruction to one file, with well-defined
//!   skip/no-op semantics and dry-run support.
//! - `plugin`: the lifecycle hook tying the pass to the host's
//!   command-terminated event.
//! - `host`: the traits a host implements to embed the plugin.
//!
//! The plugin owns no CLI surface and never fails the host command: every
//! outcome is reported as a console line.

pub mod config;
pub mod errors;
pub mod host;
pub mod instructions;
pub mod plugin;
pub mod updater;

// Re-export main types for easier access by host integrations.
pub use config::{CURRENT_VERSION_MARKER, NEW_VERSION_MARKER, PluginConfig};
pub use errors::{Error, Result};
pub use host::{ConsoleLevel, EventDispatcher, HostCommand, TerminateEvent, TerminateListener};
pub use instructions::{Instruction, read_instructions};
pub use plugin::{BumpVersionPlugin, VERSION_COMMAND, handle_version_update};
pub use updater::{UpdateOutcome, update_version_in_file};
