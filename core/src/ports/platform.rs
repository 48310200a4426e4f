//! Host platform port (interface).

/// Port for the platform facts that gate binding restrictions.
pub trait Platform: Send + Sync {
    /// Whether the host follows Windows semantics. Windows has no reserved
    /// low port range, so the privilege rule never applies there.
    fn is_windows(&self) -> bool;

    /// Whether the current process runs with elevated privileges.
    fn is_elevated(&self) -> bool;
}
