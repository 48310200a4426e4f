//! Windows process lookup.

use super::{InspectError, ProcessRecord};

/// Windows-specific process inspector.
pub struct WindowsInspector;

impl WindowsInspector {
    pub fn new() -> Self {
        Self
    }

    pub async fn lookup(&self, _port: u16) -> Result<ProcessRecord, InspectError> {
        // TODO: Implement Windows-specific lookup using netstat
        Err(InspectError::UnsupportedPlatform(
            "Windows process lookup not yet implemented".to_string(),
        ))
    }
}

impl Default for WindowsInspector {
    fn default() -> Self {
        Self::new()
    }
}
