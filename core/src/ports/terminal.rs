//! Terminal interaction port (interface).

use crate::error::PromptError;

/// Port for terminal interaction during a resolution.
///
/// The resolver never talks to stdout/stdin directly; everything it shows
/// or asks goes through this interface.
pub trait Terminal: Send + Sync {
    /// Clear the screen before presenting a conflict.
    fn clear(&self);

    /// Print an informational block.
    fn print(&self, message: &str);

    /// Ask a yes/no question and await the answer.
    fn confirm(
        &self,
        question: &str,
        default_yes: bool,
    ) -> impl std::future::Future<Output = Result<bool, PromptError>> + Send;

    /// Park until the operator interrupts (ctrl-c). No other keys are
    /// handled and there is no timeout.
    fn wait_for_interrupt(&self) -> impl std::future::Future<Output = ()> + Send;
}
