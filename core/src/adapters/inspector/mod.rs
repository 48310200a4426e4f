//! Occupying-process lookup adapters.
//!
//! Platform-specific implementations of process identification, selected
//! at compile time.
//!
//! # Platform Support
//! - macOS: uses `lsof` and `ps`
//! - Linux: uses `ss` and procfs
//! - Windows: not implemented; lookups degrade to unknown

#[cfg(target_os = "macos")]
mod darwin;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

mod dev_command;

use thiserror::Error;
use tracing::debug;

use crate::domain::ProcessInfo;
use crate::ports::ProcessInspector;

/// Failures internal to a process lookup.
///
/// These never escape the inspector: the trait method degrades them to
/// [`ProcessInfo::unknown`].
#[derive(Error, Debug)]
pub enum InspectError {
    /// Failed to execute a system command.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// Failed to parse command output.
    #[error("Failed to parse output: {0}")]
    ParseError(String),

    /// No process is listening on the port.
    #[error("no process is listening on port {0}")]
    NotFound(u16),

    /// Platform not supported.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// A fully identified occupying process, before degradation rules apply.
pub(crate) struct ProcessRecord {
    pub pid: String,
    pub command: String,
    pub directory: String,
}

/// The main process inspector that uses platform-specific implementations.
pub struct SystemInspector {
    #[cfg(target_os = "macos")]
    inner: darwin::DarwinInspector,

    #[cfg(target_os = "linux")]
    inner: linux::LinuxInspector,

    #[cfg(target_os = "windows")]
    inner: windows::WindowsInspector,
}

impl SystemInspector {
    /// Create a new process inspector for the current platform.
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "macos")]
            inner: darwin::DarwinInspector::new(),

            #[cfg(target_os = "linux")]
            inner: linux::LinuxInspector::new(),

            #[cfg(target_os = "windows")]
            inner: windows::WindowsInspector::new(),
        }
    }
}

impl Default for SystemInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessInspector for SystemInspector {
    /// Describe the process listening on `port`.
    ///
    /// Any lookup failure collapses to an all-unknown record; there is
    /// never a partial result.
    async fn process_for_port(&self, port: u16) -> ProcessInfo {
        match self.inner.lookup(port).await {
            Ok(ProcessRecord {
                pid,
                command,
                directory,
            }) => {
                let command = dev_command::friendly_command_name(&command, &directory)
                    .await
                    .unwrap_or(command);
                ProcessInfo::known(pid, command, directory)
            }
            Err(error) => {
                debug!(port = port, error = %error, "process lookup failed, reporting unknown");
                ProcessInfo::unknown()
            }
        }
    }
}
