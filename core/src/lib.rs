//! devport core library
//!
//! Discovers whether a development server's preferred TCP port is free and,
//! when it is not, negotiates a fallback with the operator:
//! - Probe availability (first free port at or above the requested one)
//! - Classify the conflict (in use vs. reserved-range restriction)
//! - Disclose the occupying process
//! - Confirm a fallback interactively, or abort cleanly
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: pure data models and the display-path decision table
//! - `ports`: trait definitions (interfaces)
//! - `adapters`: probe, process lookup, terminal and platform implementations
//! - `application`: the `PortResolver` orchestration service
//! - `reporter`: overridable/extensible user-facing messages
//!
//! # Platform Support
//! - macOS: process lookup via `lsof` and `ps`
//! - Linux: process lookup via `ss` and procfs
//! - Windows: no reserved-range rule; process lookup degrades to unknown

pub mod adapters;
pub mod application;
pub mod domain;
pub mod error;
pub mod ports;
pub mod reporter;

// Re-export the primary API
pub use adapters::{HostPlatform, SystemInspector, SystemTerminal, TcpProber};
pub use application::PortResolver;
pub use domain::{
    coerce_port, DisplayPath, PortRequest, ProcessInfo, Resolution, WELL_KNOWN_PORT_RANGE,
};
pub use error::{Error, ProbeError, PromptError, Result};
pub use reporter::{MessageArgs, MessageKind, Reporter, ReporterConfig};

/// Resolve `port` on `hostname` with the default system capabilities.
///
/// Returns `Some(port)` when a port was agreed on and `None` when the
/// resolution was aborted: a declined fallback, a reserved-range conflict,
/// or a conflict in a non-interactive environment. Probe and prompt
/// failures surface as errors.
///
/// Interactivity is detected from stdout; embedding tools that manage
/// their own terminal should drive [`PortResolver`] directly instead.
pub async fn resolve_port(
    port: u16,
    hostname: &str,
    fallback_allowed: bool,
    config: Option<ReporterConfig>,
) -> Result<Option<u16>> {
    let resolver = PortResolver::new(
        TcpProber::new(),
        SystemInspector::new(),
        SystemTerminal::new(),
        HostPlatform::new(),
        Reporter::new(config.unwrap_or_default()),
    );

    let request = PortRequest::new(port, hostname)
        .with_interactive(SystemTerminal::interactive())
        .with_fallback_allowed(fallback_allowed);

    Ok(resolver.resolve(&request).await?.port())
}
