//! Occupying-process model.

use serde::{Deserialize, Serialize};

/// Best-effort description of the process occupying a port.
///
/// Lookups are all-or-nothing: either every field is known or the record
/// collapses to [`ProcessInfo::unknown`]. There is never a partial record;
/// message formatting relies on this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process id, as reported by the OS (e.g. "3158").
    pub pid: Option<String>,

    /// Command which started the process (e.g. "http-server").
    pub command: Option<String>,

    /// Directory the process was started from.
    pub directory: Option<String>,
}

impl ProcessInfo {
    /// A fully identified process.
    pub fn known(
        pid: impl Into<String>,
        command: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            pid: Some(pid.into()),
            command: Some(command.into()),
            directory: Some(directory.into()),
        }
    }

    /// The placeholder record used when the lookup failed.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Whether the lookup succeeded.
    pub fn is_known(&self) -> bool {
        self.pid.is_some()
    }
}
