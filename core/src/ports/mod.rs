//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces the application layer uses to reach
//! the outside world. Implementations live in `adapters`.

mod inspector;
mod platform;
mod prober;
mod terminal;

pub use inspector::ProcessInspector;
pub use platform::Platform;
pub use prober::PortProber;
pub use terminal::Terminal;
