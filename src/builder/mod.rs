//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders, definition checks and macros for
//! creating state machines with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;
pub mod validation;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
pub use validation::DefinitionError;

use crate::core::{Guard, StateAware};
use crate::machine::Transition;
use std::sync::Arc;

/// Create an unguarded transition without callbacks.
///
/// # Example
///
/// ```
/// use statewise::builder::simple_transition;
/// use statewise::core::StateAware;
/// use statewise::machine::Transition;
///
/// struct Door {
///     state: &'static str,
/// }
///
/// impl StateAware for Door {
///     type State = &'static str;
///     fn state(&self) -> &Self::State { &self.state }
///     fn set_state(&mut self, state: Self::State) { self.state = state; }
/// }
///
/// let open: Transition<Door> = simple_transition("closed", "open");
/// assert!(open.can_execute_from(&"closed"));
/// ```
pub fn simple_transition<C>(from: C::State, to: C::State) -> Transition<C>
where
    C: StateAware + Send + Sync,
{
    Transition {
        from_states: vec![from],
        to_state: to,
        guards: Vec::new(),
        before_callbacks: Vec::new(),
        after_callbacks: Vec::new(),
    }
}

/// Create a transition with a single guard predicate.
pub fn guarded_transition<C, F>(from: C::State, to: C::State, guard: F) -> Transition<C>
where
    C: StateAware + Send + Sync + 'static,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    let mut transition = simple_transition(from, to);
    transition.guards.push(Arc::new(Guard::new(guard)));
    transition
}
