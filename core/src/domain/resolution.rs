//! Terminal protocol outcomes and the display-path decision table.

use serde::{Deserialize, Serialize};

/// Terminal outcome of a port resolution.
///
/// Produced exactly once per `resolve` call; probe and prompt failures are
/// reported through the error channel instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// A usable port was agreed on.
    Resolved(u16),
    /// The operator (or environment) declined every option.
    Aborted,
}

impl Resolution {
    /// The agreed port, if any.
    pub fn port(&self) -> Option<u16> {
        match self {
            Resolution::Resolved(port) => Some(*port),
            Resolution::Aborted => None,
        }
    }
}

/// How a port conflict is surfaced on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPath {
    /// Render a yes/no confirmation and await the answer.
    Confirm,
    /// Render a static block and park until the operator interrupts.
    ParkUntilInterrupt,
    /// Print the message and abort immediately.
    PrintAndAbort,
}

impl DisplayPath {
    /// Decision table for conflict presentation:
    ///
    /// | interactive | fallback_allowed | needs_privilege | path |
    /// |---|---|---|---|
    /// | any | any | true | ParkUntilInterrupt |
    /// | true | true | false | Confirm |
    /// | true | false | false | ParkUntilInterrupt |
    /// | false | any | false | PrintAndAbort |
    pub fn select(interactive: bool, fallback_allowed: bool, needs_privilege: bool) -> Self {
        if needs_privilege {
            return DisplayPath::ParkUntilInterrupt;
        }
        match (interactive, fallback_allowed) {
            (true, true) => DisplayPath::Confirm,
            (true, false) => DisplayPath::ParkUntilInterrupt,
            (false, _) => DisplayPath::PrintAndAbort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_port() {
        assert_eq!(Resolution::Resolved(3001).port(), Some(3001));
        assert_eq!(Resolution::Aborted.port(), None);
    }

    #[test]
    fn test_privilege_overrides_everything() {
        for interactive in [true, false] {
            for fallback in [true, false] {
                assert_eq!(
                    DisplayPath::select(interactive, fallback, true),
                    DisplayPath::ParkUntilInterrupt,
                );
            }
        }
    }

    #[test]
    fn test_interactive_with_fallback_prompts() {
        assert_eq!(DisplayPath::select(true, true, false), DisplayPath::Confirm);
    }

    #[test]
    fn test_interactive_without_fallback_parks() {
        assert_eq!(
            DisplayPath::select(true, false, false),
            DisplayPath::ParkUntilInterrupt,
        );
    }

    #[test]
    fn test_non_interactive_aborts_immediately() {
        assert_eq!(
            DisplayPath::select(false, true, false),
            DisplayPath::PrintAndAbort,
        );
        assert_eq!(
            DisplayPath::select(false, false, false),
            DisplayPath::PrintAndAbort,
        );
    }
}
