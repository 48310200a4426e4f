//! User-facing message construction.
//!
//! Every string the resolver shows comes from here, so embedding tools can
//! restyle the output by overriding a message entirely or extending it with
//! prefix/suffix text. Hook lookup happens per operation; see
//! [`ReporterConfig`] for the composition rules.

mod hooks;

pub use hooks::{MessageArgs, MessageHook, MessageKind, ReporterConfig};

use std::ops::Range;

use owo_colors::OwoColorize;

use crate::domain::ProcessInfo;

/// Placeholder for process fields the inspector could not determine.
const UNKNOWN_FIELD: &str = "unknown";

/// Builds every user-facing message of the resolution protocol.
///
/// Each operation is pure: it formats its arguments and runs the hook
/// pipeline, nothing else.
#[derive(Debug, Default)]
pub struct Reporter {
    config: ReporterConfig,
}

impl Reporter {
    /// Create a reporter with the given customization.
    pub fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    /// The elevated-privilege requirement message.
    pub fn missing_root_permission(&self, range: &Range<u16>) -> String {
        let base = format!(
            "{}",
            format!(
                "Admin permissions are required to run a server on a port below {}.",
                range.end
            )
            .bright_red()
        );
        self.config.apply(
            MessageKind::MissingRootPermission,
            &MessageArgs::MissingRootPermission { range },
            base,
        )
    }

    /// The occupying-process report. Fields the inspector could not
    /// determine render as a placeholder.
    pub fn process_info_report(&self, process: &ProcessInfo) -> String {
        let command = process.command.as_deref().unwrap_or(UNKNOWN_FIELD);
        let pid = process.pid.as_deref().unwrap_or(UNKNOWN_FIELD);
        let directory = process.directory.as_deref().unwrap_or(UNKNOWN_FIELD);

        let base = format!(
            "\n    process       : {}\n    pid           : {}\n    invoked from  : {}",
            command.cyan(),
            pid.dimmed(),
            directory.blue(),
        );
        self.config.apply(
            MessageKind::ProcessInfoReport,
            &MessageArgs::ProcessInfoReport { process },
            base,
        )
    }

    /// The port-in-use disclaimer line.
    pub fn port_in_use_disclaimer(&self, port: u16) -> String {
        let base = format!(
            "{} {} Someone is already using the port {}.",
            "PORT IN USE".bright_white().on_bright_red(),
            "-".white(),
            port.bright_yellow().bold(),
        );
        self.config.apply(
            MessageKind::PortInUseDisclaimer,
            &MessageArgs::PortInUseDisclaimer { port },
            base,
        )
    }

    /// The static listing shown when no fallback confirmation is possible.
    ///
    /// `available_ports` must be nonempty; the listing keeps the order it
    /// was given.
    pub fn no_port_fallback(&self, available_ports: &[u16]) -> String {
        let listing = available_ports
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        let noun = if available_ports.len() > 1 {
            "ports are"
        } else {
            "port is"
        };

        let base = format!(
            "\n{}\n\nThe following {} available:\n\n        {}\n\n{}",
            "If possible, free up the port or choose an available one.".bright_yellow(),
            noun,
            listing.green(),
            self.process_termination(),
        );
        self.config.apply(
            MessageKind::NoPortFallback,
            &MessageArgs::NoPortFallback { available_ports },
            base,
        )
    }

    /// The yes/no fallback question.
    pub fn port_fallback_confirmation(&self) -> String {
        let base = "Would you like to run the app on another port instead?".to_string();
        self.config.apply(
            MessageKind::PortFallbackConfirmation,
            &MessageArgs::PortFallbackConfirmation,
            base,
        )
    }

    /// The composite conflict disclosure: disclaimer, process report, and
    /// either the confirmation question or the static listing.
    ///
    /// The occupying process is passed in rather than looked up here; the
    /// resolver owns all I/O.
    pub fn port_in_use_prompt(
        &self,
        port: u16,
        available_port: u16,
        process: &ProcessInfo,
        fallback_allowed: bool,
    ) -> String {
        let confirmation = if fallback_allowed {
            self.port_fallback_confirmation()
        } else {
            self.no_port_fallback(&[available_port])
        };

        let base = format!(
            "{}\n    {}\n    \n{}",
            self.port_in_use_disclaimer(port),
            self.process_info_report(process),
            confirmation,
        );
        self.config.apply(
            MessageKind::PortInUsePrompt,
            &MessageArgs::PortInUsePrompt {
                port,
                available_port,
                process,
                fallback_allowed,
            },
            base,
        )
    }

    /// Error text for a prompt that cannot render outside a real terminal.
    pub fn uninteractive_terminal_error(&self) -> String {
        let base = format!(
            "{}",
            "Prompt couldn't be rendered in the current environment.".red()
        );
        self.config.apply(
            MessageKind::UninteractiveTerminalError,
            &MessageArgs::UninteractiveTerminalError,
            base,
        )
    }

    /// Error text for any other prompt failure.
    pub fn generic_prompt_error(&self) -> String {
        let base = format!(
            "{}",
            "Something went wrong while trying to render the prompt.".red()
        );
        self.config.apply(
            MessageKind::GenericPromptError,
            &MessageArgs::GenericPromptError,
            base,
        )
    }

    /// Diagnostic for a failed availability probe.
    pub fn open_port_unavailable(&self, hostname: &str, error: &str) -> String {
        let base = format!(
            "{}\n\n(Network error message: {})",
            format!("Could not find an open port at {}.", hostname.bold()).red(),
            error,
        );
        self.config.apply(
            MessageKind::OpenPortUnavailable,
            &MessageArgs::OpenPortUnavailable { hostname, error },
            base,
        )
    }

    /// Hint telling the operator how to leave a parked display.
    pub fn process_termination(&self) -> String {
        let base = format!("{}", "Press ctrl/cmd + c to exit.".white());
        self.config.apply(
            MessageKind::ProcessTermination,
            &MessageArgs::ProcessTermination,
            base,
        )
    }
}
