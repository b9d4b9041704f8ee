//! Errors surfaced by the transition protocol.

use crate::core::{ActionError, GuardRejected};
use std::fmt;
use thiserror::Error;

/// Which callback list a failing callback belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackStage {
    /// Ran before the state change; the state was left untouched.
    Before,
    /// Ran after the state change; the new state stays in place.
    After,
}

impl fmt::Display for CallbackStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => f.write_str("before"),
            Self::After => f.write_str("after"),
        }
    }
}

/// Errors that can occur during transitions
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Transition '{name}' is not registered")]
    TransitionNotFound { name: String },

    #[error(
        "Transition '{transition}' not allowed from state '{current}' (allowed: {})",
        .allowed.join(", ")
    )]
    WrongState {
        transition: String,
        current: String,
        allowed: Vec<String>,
    },

    #[error(transparent)]
    GuardRejected(#[from] GuardRejected),

    /// A callback failed. Its error is kept as-is in `source`.
    #[error("{stage}-callback of transition '{transition}' failed: {source}")]
    CallbackFailed {
        transition: String,
        stage: CallbackStage,
        source: ActionError,
    },
}

impl TransitionError {
    /// True when the context's state was already changed before the error.
    ///
    /// Only after-callback failures leave the state committed. Side effects
    /// of callbacks that ran before a failure are never undone.
    pub fn state_committed(&self) -> bool {
        matches!(
            self,
            Self::CallbackFailed {
                stage: CallbackStage::After,
                ..
            }
        )
    }
}
