//! Error types for the devport-core library.

use thiserror::Error;

/// Result type alias for devport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that terminate a port resolution.
#[derive(Error, Debug)]
pub enum Error {
    /// The availability probe failed before reaching a verdict.
    ///
    /// `message` carries the reporter-formatted diagnostic so callers can
    /// surface it verbatim.
    #[error("{message}")]
    Probe {
        hostname: String,
        message: String,
        #[source]
        source: ProbeError,
    },

    /// The confirmation prompt could not be completed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// A textual port argument could not be coerced to a port number.
    #[error("invalid port argument: {0:?}")]
    InvalidPort(String),
}

/// Failures of the underlying port availability probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Every port at or above the requested one was unavailable.
    #[error("no open port found at or above {start}")]
    NoOpenPort { start: u16 },

    /// The probe hit an I/O error other than "occupied".
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the interactive confirmation prompt.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The prompt could not be rendered because the process is not attached
    /// to a real terminal.
    #[error("prompt requires an interactive terminal")]
    NotATerminal,

    /// Any other prompt failure.
    #[error("prompt failed: {0}")]
    Other(String),
}
