//! Occupying-process lookup port (interface).

use crate::domain::ProcessInfo;

/// Port for identifying the process listening on a TCP port.
///
/// Lookups are best effort and must never fail a resolution: any internal
/// error degrades to [`ProcessInfo::unknown`].
pub trait ProcessInspector: Send + Sync {
    /// Describe the process currently listening on `port`.
    fn process_for_port(
        &self,
        port: u16,
    ) -> impl std::future::Future<Output = ProcessInfo> + Send;
}
