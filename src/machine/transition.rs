//! Transition descriptors.

use crate::builder::TransitionBuilder;
use crate::core::{State, StateAware, TransitionCallback, TransitionGuard};
use std::fmt;
use std::sync::Arc;

/// Guard as stored in a [`Transition`].
pub type SharedGuard<C> = Arc<dyn TransitionGuard<C>>;
/// Callback as stored in a [`Transition`].
pub type SharedCallback<C> = Arc<dyn TransitionCallback<C>>;

/// Immutable rule for moving a context from one of several source states
/// to a single target state.
///
/// Built with [`TransitionBuilder`]; the name it is registered under lives
/// in the [`StateMachine`](crate::machine::StateMachine) registry, not here.
pub struct Transition<C>
where
    C: StateAware + Send + Sync,
{
    pub(crate) from_states: Vec<C::State>,
    pub(crate) to_state: C::State,
    pub(crate) guards: Vec<SharedGuard<C>>,
    pub(crate) before_callbacks: Vec<SharedCallback<C>>,
    pub(crate) after_callbacks: Vec<SharedCallback<C>>,
}

impl<C> Transition<C>
where
    C: StateAware + Send + Sync,
{
    pub fn builder() -> TransitionBuilder<C> {
        TransitionBuilder::new()
    }

    pub fn from_states(&self) -> &[C::State] {
        &self.from_states
    }

    pub fn to_state(&self) -> &C::State {
        &self.to_state
    }

    pub fn guards(&self) -> &[SharedGuard<C>] {
        &self.guards
    }

    pub fn before_callbacks(&self) -> &[SharedCallback<C>] {
        &self.before_callbacks
    }

    pub fn after_callbacks(&self) -> &[SharedCallback<C>] {
        &self.after_callbacks
    }

    /// Check if this transition is legal from `current` (pure, guards not run).
    pub fn can_execute_from(&self, current: &C::State) -> bool {
        self.from_states.contains(current)
    }

    pub(crate) fn allowed_names(&self) -> Vec<String> {
        self.from_states
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }
}

impl<C> Clone for Transition<C>
where
    C: StateAware + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            from_states: self.from_states.clone(),
            to_state: self.to_state.clone(),
            guards: self.guards.clone(),
            before_callbacks: self.before_callbacks.clone(),
            after_callbacks: self.after_callbacks.clone(),
        }
    }
}

impl<C> fmt::Debug for Transition<C>
where
    C: StateAware + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from_states", &self.from_states)
            .field("to_state", &self.to_state)
            .field(
                "guards",
                &self.guards.iter().map(|g| g.describe()).collect::<Vec<_>>(),
            )
            .field("before_callbacks", &self.before_callbacks.len())
            .field("after_callbacks", &self.after_callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Light {
        Red,
        Yellow,
        Green,
    }

    impl State for Light {
        fn name(&self) -> &str {
            match self {
                Self::Red => "Red",
                Self::Yellow => "Yellow",
                Self::Green => "Green",
            }
        }
    }

    struct Signal {
        light: Light,
    }

    impl StateAware for Signal {
        type State = Light;

        fn state(&self) -> &Light {
            &self.light
        }

        fn set_state(&mut self, state: Light) {
            self.light = state;
        }
    }

    #[test]
    fn can_execute_matches_any_from_state() {
        let stop: Transition<Signal> = Transition::builder()
            .from(Light::Green)
            .from(Light::Yellow)
            .to(Light::Red)
            .build()
            .unwrap();

        assert!(stop.can_execute_from(&Light::Green));
        assert!(stop.can_execute_from(&Light::Yellow));
        assert!(!stop.can_execute_from(&Light::Red));
        assert_eq!(stop.allowed_names(), vec!["Green", "Yellow"]);
    }

    #[test]
    fn clone_shares_guards() {
        let go: Transition<Signal> = Transition::builder()
            .from(Light::Red)
            .to(Light::Green)
            .guard(Guard::named("clear", |_: &Signal| true))
            .build()
            .unwrap();

        let copy = go.clone();
        assert_eq!(copy.guards().len(), 1);
        assert!(Arc::ptr_eq(&go.guards()[0], &copy.guards()[0]));
        assert_eq!(copy.to_state(), &Light::Green);
    }

    #[test]
    fn debug_lists_guard_names() {
        let go: Transition<Signal> = Transition::builder()
            .from(Light::Red)
            .to(Light::Green)
            .guard(Guard::named("clear", |_: &Signal| true))
            .build()
            .unwrap();

        let rendered = format!("{go:?}");
        assert!(rendered.contains("clear"));
        assert!(rendered.contains("Green"));
    }
}
