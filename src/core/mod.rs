//! Core state machine vocabulary.
//!
//! This module contains the pieces a transition is assembled from:
//! - State identifiers via the `State` trait
//! - The `StateAware` context capability
//! - Guard predicates and callbacks
//! - The standalone `StateGuard`
//!
//! Nothing here executes a transition; see [`crate::machine`].

mod callback;
mod error;
mod guard;
mod state;
mod state_guard;

pub use callback::{Callback, TransitionCallback};
pub use error::{ActionError, GuardRejected};
pub use guard::{Guard, TransitionGuard};
pub use state::{State, StateAware};
pub use state_guard::StateGuard;
