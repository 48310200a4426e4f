//! Domain layer - pure data models, no I/O.
//!
//! This module contains the types the resolution protocol is expressed in.
//! Everything here can be tested in isolation.

mod process;
mod request;
mod resolution;

// Re-export all domain types
pub use process::ProcessInfo;
pub use request::{coerce_port, PortRequest, WELL_KNOWN_PORT_RANGE};
pub use resolution::{DisplayPath, Resolution};
