//! Port resolution request model.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Reserved well-known ports. Binding one requires elevated privileges on
/// Unix-like systems.
pub const WELL_KNOWN_PORT_RANGE: Range<u16> = 0..1024;

/// A single port resolution request.
///
/// Created once per `resolve` call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRequest {
    /// The preferred port number (e.g. 3000).
    pub port: u16,

    /// Host to probe (e.g. "localhost", "0.0.0.0").
    pub hostname: String,

    /// Whether a real terminal is attached and prompting is possible.
    pub interactive: bool,

    /// Whether falling back to another free port may be offered.
    pub fallback_allowed: bool,
}

impl PortRequest {
    /// Create a request with fallback enabled and prompting disabled.
    pub fn new(port: u16, hostname: impl Into<String>) -> Self {
        Self {
            port,
            hostname: hostname.into(),
            interactive: false,
            fallback_allowed: true,
        }
    }

    /// Enable/disable interactive prompting.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Enable/disable the fallback offer.
    pub fn with_fallback_allowed(mut self, fallback_allowed: bool) -> Self {
        self.fallback_allowed = fallback_allowed;
        self
    }
}

/// Coerce a textual port argument into a port number.
///
/// Build tools hand ports around as strings; this accepts a leading digit
/// run with surrounding whitespace, so `"3000"`, `" 3000 "` and `"3000x"`
/// all coerce to 3000. Fails when no leading digits are present or the
/// value does not fit a port number.
pub fn coerce_port(raw: &str) -> Result<u16, Error> {
    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    trimmed[..end]
        .parse()
        .map_err(|_| Error::InvalidPort(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = PortRequest::new(3000, "localhost")
            .with_interactive(true)
            .with_fallback_allowed(false);

        assert_eq!(request.port, 3000);
        assert_eq!(request.hostname, "localhost");
        assert!(request.interactive);
        assert!(!request.fallback_allowed);
    }

    #[test]
    fn test_coerce_plain_number() {
        assert_eq!(coerce_port("3000").unwrap(), 3000);
        assert_eq!(coerce_port(" 8080 ").unwrap(), 8080);
    }

    #[test]
    fn test_coerce_trailing_garbage() {
        assert_eq!(coerce_port("3000abc").unwrap(), 3000);
    }

    #[test]
    fn test_coerce_rejects_non_numeric() {
        assert!(matches!(coerce_port("abc"), Err(Error::InvalidPort(_))));
        assert!(matches!(coerce_port(""), Err(Error::InvalidPort(_))));
        assert!(matches!(coerce_port("99999"), Err(Error::InvalidPort(_))));
    }

    #[test]
    fn test_well_known_range_bounds() {
        assert!(WELL_KNOWN_PORT_RANGE.contains(&0));
        assert!(WELL_KNOWN_PORT_RANGE.contains(&1023));
        assert!(!WELL_KNOWN_PORT_RANGE.contains(&1024));
    }
}
