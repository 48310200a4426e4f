//! Port resolution orchestration.

use tracing::debug;

use crate::domain::{DisplayPath, PortRequest, Resolution, WELL_KNOWN_PORT_RANGE};
use crate::error::{Error, PromptError, Result};
use crate::ports::{Platform, PortProber, ProcessInspector, Terminal};
use crate::reporter::Reporter;

/// Orchestrates the port resolution protocol.
///
/// One `resolve` call decides the final port for one request: probe,
/// classify the conflict, optionally disclose the occupying process,
/// optionally ask for confirmation, and terminate in a [`Resolution`].
/// Calls are independent; the resolver keeps no state between them.
pub struct PortResolver<P, I, T, L> {
    prober: P,
    inspector: I,
    terminal: T,
    platform: L,
    reporter: Reporter,
}

impl<P, I, T, L> PortResolver<P, I, T, L>
where
    P: PortProber,
    I: ProcessInspector,
    T: Terminal,
    L: Platform,
{
    /// Create a resolver from its collaborators.
    pub fn new(prober: P, inspector: I, terminal: T, platform: L, reporter: Reporter) -> Self {
        Self {
            prober,
            inspector,
            terminal,
            platform,
            reporter,
        }
    }

    /// Decide the final port for `request`.
    pub async fn resolve(&self, request: &PortRequest) -> Result<Resolution> {
        let candidate = match self.prober.probe(&request.hostname, request.port).await {
            Ok(port) => port,
            Err(source) => {
                return Err(Error::Probe {
                    message: self
                        .reporter
                        .open_port_unavailable(&request.hostname, &source.to_string()),
                    hostname: request.hostname.clone(),
                    source,
                });
            }
        };

        // The requested port is free: nothing to negotiate. This also covers
        // privileged ports, where binding itself is the enforcement point.
        if candidate == request.port {
            return Ok(Resolution::Resolved(request.port));
        }

        debug!(
            requested = request.port,
            candidate = candidate,
            "port conflict detected"
        );

        let needs_privilege = self.needs_privilege(request.port, candidate);

        match DisplayPath::select(request.interactive, request.fallback_allowed, needs_privilege) {
            DisplayPath::ParkUntilInterrupt if needs_privilege => {
                self.terminal
                    .print(&self.reporter.missing_root_permission(&WELL_KNOWN_PORT_RANGE));
                self.terminal.wait_for_interrupt().await;
                Ok(Resolution::Aborted)
            }
            DisplayPath::Confirm => self.confirm_fallback(request, candidate).await,
            DisplayPath::ParkUntilInterrupt => {
                let message = self.conflict_message(request, candidate).await;
                self.terminal.clear();
                self.terminal.print(&message);
                self.terminal.wait_for_interrupt().await;
                Ok(Resolution::Aborted)
            }
            DisplayPath::PrintAndAbort => {
                let message = self.conflict_message(request, candidate).await;
                self.terminal.print(&message);
                Ok(Resolution::Aborted)
            }
        }
    }

    /// Ask whether the fallback port should be used instead.
    ///
    /// A failed prompt is displayed and then propagated; leaving the
    /// resolution without an outcome is not an option.
    async fn confirm_fallback(&self, request: &PortRequest, candidate: u16) -> Result<Resolution> {
        let question = self.conflict_message(request, candidate).await;
        self.terminal.clear();

        match self.terminal.confirm(&question, true).await {
            Ok(true) => Ok(Resolution::Resolved(candidate)),
            Ok(false) => Ok(Resolution::Aborted),
            Err(error) => {
                let message = match &error {
                    PromptError::NotATerminal => self.reporter.uninteractive_terminal_error(),
                    PromptError::Other(_) => self.reporter.generic_prompt_error(),
                };
                self.terminal.print(&message);
                Err(Error::Prompt(error))
            }
        }
    }

    /// Build the composite conflict disclosure for the request.
    async fn conflict_message(&self, request: &PortRequest, candidate: u16) -> String {
        let process = self.inspector.process_for_port(request.port).await;
        self.reporter
            .port_in_use_prompt(request.port, candidate, &process, request.fallback_allowed)
    }

    fn needs_privilege(&self, requested: u16, candidate: u16) -> bool {
        !self.platform.is_windows()
            && (WELL_KNOWN_PORT_RANGE.contains(&requested)
                || WELL_KNOWN_PORT_RANGE.contains(&candidate))
            && !self.platform.is_elevated()
    }
}
