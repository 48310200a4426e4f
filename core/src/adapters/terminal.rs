//! System terminal adapter.

use std::io::ErrorKind;

use console::Term;
use tracing::debug;

use crate::error::PromptError;
use crate::ports::Terminal;

/// Terminal backed by the real stdout/stdin.
#[derive(Debug, Default)]
pub struct SystemTerminal;

impl SystemTerminal {
    /// Create a new system terminal.
    pub fn new() -> Self {
        Self
    }

    /// Whether stdout is attached to a real terminal.
    pub fn interactive() -> bool {
        atty::is(atty::Stream::Stdout)
    }
}

impl Terminal for SystemTerminal {
    fn clear(&self) {
        if Term::stdout().clear_screen().is_err() {
            debug!("could not clear the terminal screen");
        }
    }

    fn print(&self, message: &str) {
        println!("{}", message);
    }

    /// Ask a yes/no question through a blocking prompt, off the async
    /// runtime.
    async fn confirm(&self, question: &str, default_yes: bool) -> Result<bool, PromptError> {
        let question = question.to_string();

        let answer = tokio::task::spawn_blocking(move || {
            dialoguer::Confirm::new()
                .with_prompt(question)
                .default(default_yes)
                .interact()
        })
        .await
        .map_err(|e| PromptError::Other(e.to_string()))?;

        answer.map_err(|error| match error {
            dialoguer::Error::IO(io) if io.kind() == ErrorKind::NotConnected => {
                PromptError::NotATerminal
            }
            other => PromptError::Other(other.to_string()),
        })
    }

    /// Resolve once the operator sends an interrupt (ctrl-c); every other
    /// key is left alone.
    async fn wait_for_interrupt(&self) {
        if tokio::signal::ctrl_c().await.is_err() {
            debug!("ctrl-c handler unavailable, returning immediately");
        }
    }
}
