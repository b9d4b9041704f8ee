//! Transition execution.
//!
//! This module runs the transition protocol around the pure pieces in
//! [`crate::core`]: a registry of named [`Transition`]s and the
//! [`StateMachine`] that resolves a name, checks the source state, runs
//! guards and callbacks in order, and commits the new state.

mod error;
mod executor;
mod shared;
mod transition;

pub use error::{CallbackStage, TransitionError};
pub use executor::StateMachine;
pub use shared::SharedContext;
pub use transition::{SharedCallback, SharedGuard, Transition};
