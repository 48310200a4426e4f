//! Port availability probe port (interface).

use crate::error::ProbeError;

/// Port for probing TCP port availability.
///
/// The contract follows the usual dev-server convention: return the first
/// free port at or above the requested one, so a result equal to the
/// request means "free" and anything else means "taken, here is a
/// fallback".
pub trait PortProber: Send + Sync {
    /// Find the first free port at or above `port` on `hostname`.
    fn probe(
        &self,
        hostname: &str,
        port: u16,
    ) -> impl std::future::Future<Output = Result<u16, ProbeError>> + Send;
}
