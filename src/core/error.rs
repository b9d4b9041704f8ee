//! Errors raised by guards and callbacks.

use thiserror::Error;

/// Error type returned by guard and callback implementations.
///
/// The state machine never inspects it; it is carried to the caller
/// unchanged.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// A guard refused to let an action or transition proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Guard{} rejected action in state '{state}'{}", label(.guard), suffix(.reason))]
pub struct GuardRejected {
    /// Name of the guard that refused, when it has one.
    pub guard: Option<String>,
    /// Name of the context state at the time of the check.
    pub state: String,
    /// Why the guard refused, when it could say.
    pub reason: Option<String>,
}

impl GuardRejected {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            guard: None,
            state: state.into(),
            reason: None,
        }
    }

    pub fn with_guard(mut self, guard: impl Into<String>) -> Self {
        self.guard = Some(guard.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

fn label(guard: &Option<String>) -> String {
    guard
        .as_deref()
        .map(|name| format!(" '{name}'"))
        .unwrap_or_default()
}

fn suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|reason| format!(": {reason}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_includes_state() {
        let err = GuardRejected::new("started");
        assert_eq!(err.to_string(), "Guard rejected action in state 'started'");
    }

    #[test]
    fn message_includes_guard_and_reason() {
        let err = GuardRejected::new("started")
            .with_guard("progress_complete")
            .with_reason("progress is 50");

        assert_eq!(
            err.to_string(),
            "Guard 'progress_complete' rejected action in state 'started': progress is 50"
        );
    }
}
