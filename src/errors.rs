use thiserror::Error;

/// The primary error type for all operations of the plugin.
///
/// This enum uses `thiserror` to neatly wrap the kinds of failures a
/// version-bump pass can hit, from I/O issues to configuration parsing
/// problems. The lifecycle hook classifies variants to decide whether a
/// failure is surfaced as a console warning or as a generic error line.
#[derive(Error, Debug)]
pub enum Error {
    /// An error related to file system I/O.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An error that occurred while deserializing the plugin section of the
    /// host's project document.
    #[error("invalid plugin configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A precondition failure raised intentionally to abort a pass.
    #[error("{0}")]
    Plugin(String),

    /// A failure reported by the host while servicing a plugin request.
    #[error("host error: {0}")]
    Host(String),

    /// An error related to persisting a temporary file.
    #[error("tempfile error: {0}")]
    TempFile(#[from] tempfile::PersistError),
}

/// A convenient type alias for `Result<T, poetry_bumpversion::errors::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// `true` for failures the lifecycle hook downgrades to a warning line
    /// (malformed configuration and intentional precondition aborts).
    /// Everything else is reported as a generic error line.
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::Plugin(_) | Error::Toml(_))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Plugin(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Plugin(s.to_string())
    }
}
