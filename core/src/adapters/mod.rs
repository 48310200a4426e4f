//! Adapters layer - external system implementations.
//!
//! This module contains implementations of the port traits defined in
//! `ports`. Each adapter handles one external concern: binding probes,
//! process lookup, terminal interaction, platform facts.

pub mod inspector;
pub mod platform;
pub mod prober;
pub mod terminal;

// Re-export main types for convenience
pub use inspector::SystemInspector;
pub use platform::HostPlatform;
pub use prober::TcpProber;
pub use terminal::SystemTerminal;
