//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{ActionError, Callback, Guard, StateAware, TransitionCallback, TransitionGuard};
use crate::machine::{SharedCallback, SharedGuard, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
///
/// Guards and callbacks keep the order in which they are added.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateAware;
/// use statewise::machine::Transition;
///
/// struct Process {
///     state: &'static str,
///     progress: u8,
/// }
///
/// impl StateAware for Process {
///     type State = &'static str;
///
///     fn state(&self) -> &Self::State {
///         &self.state
///     }
///
///     fn set_state(&mut self, state: Self::State) {
///         self.state = state;
///     }
/// }
///
/// let end: Transition<Process> = Transition::builder()
///     .from("started")
///     .to("ended")
///     .when(|p: &Process| p.progress == 100)
///     .build()
///     .unwrap();
///
/// assert!(end.can_execute_from(&"started"));
/// ```
pub struct TransitionBuilder<C>
where
    C: StateAware + Send + Sync,
{
    from_states: Vec<C::State>,
    to: Option<C::State>,
    guards: Vec<SharedGuard<C>>,
    before_callbacks: Vec<SharedCallback<C>>,
    after_callbacks: Vec<SharedCallback<C>>,
}

impl<C> TransitionBuilder<C>
where
    C: StateAware + Send + Sync,
{
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from_states: Vec::new(),
            to: None,
            guards: Vec::new(),
            before_callbacks: Vec::new(),
            after_callbacks: Vec::new(),
        }
    }

    /// Add a legal source state (at least one required).
    pub fn from(mut self, state: C::State) -> Self {
        if !self.from_states.contains(&state) {
            self.from_states.push(state);
        }
        self
    }

    /// Add several legal source states.
    pub fn from_any(self, states: impl IntoIterator<Item = C::State>) -> Self {
        states
            .into_iter()
            .fold(self, |builder, state| builder.from(state))
    }

    /// Set the target state (required).
    pub fn to(mut self, state: C::State) -> Self {
        self.to = Some(state);
        self
    }

    /// Append a guard.
    pub fn guard<G>(mut self, guard: G) -> Self
    where
        G: TransitionGuard<C> + 'static,
    {
        self.guards.push(Arc::new(guard));
        self
    }

    /// Append a guard using a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        C: 'static,
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Append a callback run before the state changes.
    pub fn before<B>(mut self, callback: B) -> Self
    where
        B: TransitionCallback<C> + 'static,
    {
        self.before_callbacks.push(Arc::new(callback));
        self
    }

    /// Append a closure run before the state changes.
    pub fn before_fn<F>(self, action: F) -> Self
    where
        C: 'static,
        F: Fn(&mut C) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.before(Callback::new(action))
    }

    /// Append a callback run after the state changes.
    pub fn after<A>(mut self, callback: A) -> Self
    where
        A: TransitionCallback<C> + 'static,
    {
        self.after_callbacks.push(Arc::new(callback));
        self
    }

    /// Append a closure run after the state changes.
    pub fn after_fn<F>(self, action: F) -> Self
    where
        C: 'static,
        F: Fn(&mut C) -> Result<(), ActionError> + Send + Sync + 'static,
    {
        self.after(Callback::new(action))
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<C>, BuildError> {
        if self.from_states.is_empty() {
            return Err(BuildError::MissingFromState);
        }
        let to_state = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from_states: self.from_states,
            to_state,
            guards: self.guards,
            before_callbacks: self.before_callbacks,
            after_callbacks: self.after_callbacks,
        })
    }
}

impl<C> Default for TransitionBuilder<C>
where
    C: StateAware + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Complete)
        }
    }

    struct Job {
        state: TestState,
    }

    impl StateAware for Job {
        type State = TestState;

        fn state(&self) -> &TestState {
            &self.state
        }

        fn set_state(&mut self, state: TestState) {
            self.state = state;
        }
    }

    #[test]
    fn builder_requires_a_from_state() {
        let result = TransitionBuilder::<Job>::new()
            .to(TestState::Processing)
            .build();

        assert!(matches!(result, Err(BuildError::MissingFromState)));
    }

    #[test]
    fn builder_requires_a_to_state() {
        let result = TransitionBuilder::<Job>::new()
            .from(TestState::Initial)
            .build();

        assert!(matches!(result, Err(BuildError::MissingToState)));
    }

    #[test]
    fn repeated_from_states_are_kept_once() {
        let transition = TransitionBuilder::<Job>::new()
            .from(TestState::Initial)
            .from_any([TestState::Processing, TestState::Initial])
            .to(TestState::Complete)
            .build()
            .unwrap();

        assert_eq!(
            transition.from_states(),
            &[TestState::Initial, TestState::Processing]
        );
    }

    #[test]
    fn guards_and_callbacks_keep_declared_order() {
        let transition = TransitionBuilder::<Job>::new()
            .from(TestState::Initial)
            .to(TestState::Processing)
            .guard(Guard::named("first", |_: &Job| true))
            .when(|job: &Job| !job.state.is_final())
            .before(Callback::named("prepare", |_: &mut Job| Ok(())))
            .before_fn(|_| Ok(()))
            .after_fn(|_| Ok(()))
            .build()
            .unwrap();

        let names: Vec<&str> = transition.guards().iter().map(|g| g.describe()).collect();
        assert_eq!(names, vec!["first", "guard"]);
        assert_eq!(transition.before_callbacks()[0].describe(), "prepare");
        assert_eq!(transition.before_callbacks().len(), 2);
        assert_eq!(transition.after_callbacks().len(), 1);
    }
}
