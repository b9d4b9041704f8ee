//! Standalone state checks for gating actions.
//!
//! A [`StateGuard`] answers a single question: is the context currently in
//! one of a fixed set of states? It has nothing to do with transitions and
//! is typically used at the top of a domain operation that is only legal
//! in some states.

use super::error::{ActionError, GuardRejected};
use super::guard::TransitionGuard;
use super::state::{State, StateAware};
use async_trait::async_trait;
use tracing::debug;

/// Allow-list of states that gates an arbitrary action.
///
/// # Example
///
/// ```rust
/// use statewise::core::{StateAware, StateGuard};
///
/// struct Process {
///     state: &'static str,
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
/// let can_edit = StateGuard::new(["draft", "started"]);
///
/// assert!(can_edit.check(&Process { state: "started" }).is_ok());
/// assert!(can_edit.check(&Process { state: "ended" }).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateGuard<S: State> {
    allowed: Vec<S>,
}

impl<S: State> StateGuard<S> {
    pub fn new(allowed: impl IntoIterator<Item = S>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn allowed_states(&self) -> &[S] {
        &self.allowed
    }

    /// Pure membership test.
    pub fn allows(&self, state: &S) -> bool {
        self.allowed.contains(state)
    }

    /// Fail with [`GuardRejected`] unless the context is in an allowed state.
    pub fn check<C>(&self, context: &C) -> Result<(), GuardRejected>
    where
        C: StateAware<State = S>,
    {
        let current = context.state();
        if self.allows(current) {
            Ok(())
        } else {
            debug!(state = current.name(), "Action not allowed in current state");
            Err(GuardRejected::new(current.name()).with_reason(format!(
                "Action not allowed in state {}",
                current.name()
            )))
        }
    }
}

// Lets an allow-list double as a transition guard.
#[async_trait]
impl<C> TransitionGuard<C> for StateGuard<C::State>
where
    C: StateAware + Sync,
{
    async fn evaluate(&self, context: &C) -> Result<bool, ActionError> {
        Ok(self.allows(context.state()))
    }

    fn describe(&self) -> &str {
        "state_guard"
    }
}
