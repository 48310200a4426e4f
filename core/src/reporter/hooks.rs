//! Reporter customization hooks.

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::domain::ProcessInfo;

/// Identifies a reporter operation for hook lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    MissingRootPermission,
    ProcessInfoReport,
    PortInUseDisclaimer,
    NoPortFallback,
    PortFallbackConfirmation,
    PortInUsePrompt,
    UninteractiveTerminalError,
    GenericPromptError,
    OpenPortUnavailable,
    ProcessTermination,
}

/// Borrowed arguments of the reporter operation currently running.
///
/// Hooks receive the same arguments the built-in implementation received.
#[derive(Debug)]
pub enum MessageArgs<'a> {
    MissingRootPermission { range: &'a Range<u16> },
    ProcessInfoReport { process: &'a ProcessInfo },
    PortInUseDisclaimer { port: u16 },
    NoPortFallback { available_ports: &'a [u16] },
    PortFallbackConfirmation,
    PortInUsePrompt {
        port: u16,
        available_port: u16,
        process: &'a ProcessInfo,
        fallback_allowed: bool,
    },
    UninteractiveTerminalError,
    GenericPromptError,
    OpenPortUnavailable { hostname: &'a str, error: &'a str },
    ProcessTermination,
}

/// A replacement or extension message producer.
pub type MessageHook = Arc<dyn Fn(&MessageArgs<'_>) -> String + Send + Sync>;

/// Instance-owned reporter customization.
///
/// Overrides replace an operation's output entirely; before/after
/// extensions wrap whatever the operation (or its override) produced,
/// joined with a blank line. The configuration is supplied once at
/// [`Reporter`](super::Reporter) construction and belongs to that instance
/// alone; two reporters never share hook tables.
#[derive(Default, Clone)]
pub struct ReporterConfig {
    overrides: HashMap<MessageKind, MessageHook>,
    before: HashMap<MessageKind, MessageHook>,
    after: HashMap<MessageKind, MessageHook>,
}

impl ReporterConfig {
    /// An empty configuration (built-in messages only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the output of `kind` entirely.
    pub fn override_message<F>(mut self, kind: MessageKind, hook: F) -> Self
    where
        F: Fn(&MessageArgs<'_>) -> String + Send + Sync + 'static,
    {
        self.overrides.insert(kind, Arc::new(hook));
        self
    }

    /// Prepend text to the output of `kind`, separated by a blank line.
    pub fn before<F>(mut self, kind: MessageKind, hook: F) -> Self
    where
        F: Fn(&MessageArgs<'_>) -> String + Send + Sync + 'static,
    {
        self.before.insert(kind, Arc::new(hook));
        self
    }

    /// Append text to the output of `kind`, separated by a blank line.
    pub fn after<F>(mut self, kind: MessageKind, hook: F) -> Self
    where
        F: Fn(&MessageArgs<'_>) -> String + Send + Sync + 'static,
    {
        self.after.insert(kind, Arc::new(hook));
        self
    }

    /// Run the hook pipeline for one operation.
    ///
    /// Order matters: the override replaces the computed base first, then
    /// the before/after extensions wrap whatever is left.
    pub(crate) fn apply(
        &self,
        kind: MessageKind,
        args: &MessageArgs<'_>,
        base: String,
    ) -> String {
        let mut result = base;
        if let Some(hook) = self.overrides.get(&kind) {
            result = hook(args);
        }
        if let Some(hook) = self.before.get(&kind) {
            result = format!("{}\n\n{}", hook(args), result);
        }
        if let Some(hook) = self.after.get(&kind) {
            result = format!("{}\n\n{}", result, hook(args));
        }
        result
    }
}

impl fmt::Debug for ReporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterConfig")
            .field("overrides", &self.overrides.keys().collect::<Vec<_>>())
            .field("before", &self.before.keys().collect::<Vec<_>>())
            .field("after", &self.after.keys().collect::<Vec<_>>())
            .finish()
    }
}
