//! TCP bind probe adapter.

use std::io;

use tokio::net::TcpListener;
use tracing::debug;

use crate::error::ProbeError;
use crate::ports::PortProber;

/// Probes availability by actually binding, walking upward from the
/// requested port.
#[derive(Debug, Default)]
pub struct TcpProber;

impl TcpProber {
    /// Create a new prober.
    pub fn new() -> Self {
        Self
    }

    async fn try_bind(hostname: &str, port: u16) -> io::Result<()> {
        let listener = TcpListener::bind((hostname, port)).await?;
        drop(listener);
        Ok(())
    }
}

impl PortProber for TcpProber {
    /// Find the first bindable port at or above `port`.
    ///
    /// "Address in use" and "permission denied" both mean the port is
    /// unavailable to this process and move the scan to the next one; any
    /// other I/O error (unresolvable hostname, no such interface) fails
    /// the probe.
    async fn probe(&self, hostname: &str, port: u16) -> Result<u16, ProbeError> {
        let mut candidate = port;
        loop {
            match Self::try_bind(hostname, candidate).await {
                Ok(()) => return Ok(candidate),
                Err(e)
                    if matches!(
                        e.kind(),
                        io::ErrorKind::AddrInUse | io::ErrorKind::PermissionDenied
                    ) =>
                {
                    debug!(port = candidate, "port unavailable, trying the next one");
                    candidate = candidate
                        .checked_add(1)
                        .ok_or(ProbeError::NoOpenPort { start: port })?;
                }
                Err(e) => return Err(ProbeError::Io(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bind an OS-assigned port and keep the listener alive.
    async fn occupy_port() -> (TcpListener, u16) {
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let port = listener.local_addr().unwrap().port();
        (listener, port)
    }

    #[tokio::test]
    async fn test_free_port_is_returned_as_is() {
        // Bind and release to find a port that is very likely still free.
        let (listener, port) = occupy_port().await;
        drop(listener);

        let prober = TcpProber::new();
        assert_eq!(prober.probe("127.0.0.1", port).await.unwrap(), port);
    }

    #[tokio::test]
    async fn test_occupied_port_yields_higher_fallback() {
        let (_listener, port) = occupy_port().await;

        let prober = TcpProber::new();
        let candidate = prober.probe("127.0.0.1", port).await.unwrap();
        assert!(candidate > port);
    }

    #[tokio::test]
    async fn test_unresolvable_host_fails_the_probe() {
        let prober = TcpProber::new();
        let result = prober.probe("devport.invalid.", 3000).await;
        assert!(matches!(result, Err(ProbeError::Io(_))));
    }
}
