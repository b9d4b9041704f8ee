//! State machine that executes guarded transitions.

use crate::builder::StateMachineBuilder;
use crate::core::{GuardRejected, State, StateAware};
use crate::machine::error::{CallbackStage, TransitionError};
use crate::machine::shared::SharedContext;
use crate::machine::transition::Transition;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Registry of named transitions plus the protocol that runs them.
///
/// The machine holds no per-context data: every call works on the context
/// passed in, so one machine can drive any number of contexts.
pub struct StateMachine<C>
where
    C: StateAware + Send + Sync,
{
    transitions: BTreeMap<String, Transition<C>>,
}

impl<C> StateMachine<C>
where
    C: StateAware + Send + Sync,
{
    pub fn builder() -> StateMachineBuilder<C> {
        StateMachineBuilder::new()
    }

    pub(crate) fn from_registry(transitions: BTreeMap<String, Transition<C>>) -> Self {
        Self { transitions }
    }

    /// Look up a transition by name (pure)
    pub fn get(&self, name: &str) -> Option<&Transition<C>> {
        self.transitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transitions.contains_key(name)
    }

    /// Registered transition names, sorted.
    pub fn transition_names(&self) -> Vec<&str> {
        self.transitions.keys().map(String::as_str).collect()
    }

    /// Names of transitions whose from-states include the context's
    /// current state. Guards are not evaluated.
    pub fn available_transitions(&self, context: &C) -> Vec<&str> {
        let current = context.state();
        self.transitions
            .iter()
            .filter(|(_, t)| t.can_execute_from(current))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Dry run of steps 1-3: lookup, source state and guards.
    ///
    /// No callback runs and the state is not touched.
    pub async fn can_transition(&self, context: &C, name: &str) -> bool {
        match self.transitions.get(name) {
            Some(transition) if transition.can_execute_from(context.state()) => {
                self.run_guards(name, transition, context).await.is_ok()
            }
            _ => false,
        }
    }

    /// Run the transition `name` against `context`.
    ///
    /// Steps run strictly in order, each awaited before the next:
    /// 1. resolve `name` in the registry
    /// 2. check the current state is one of the transition's from-states
    /// 3. evaluate guards; the first `false` or error stops everything
    /// 4. run before-callbacks
    /// 5. set the context's state to the target state
    /// 6. run after-callbacks
    ///
    /// Any failure in steps 1-4 leaves the state unchanged. Callback side
    /// effects that already happened are not undone. A failure in step 6 is
    /// returned, but the new state stays; see
    /// [`TransitionError::state_committed`].
    pub async fn transition(&self, context: &mut C, name: &str) -> Result<(), TransitionError> {
        let Some(transition) = self.transitions.get(name) else {
            debug!(transition = name, "Transition not registered");
            return Err(TransitionError::TransitionNotFound {
                name: name.to_string(),
            });
        };

        if !transition.can_execute_from(context.state()) {
            debug!(
                transition = name,
                from = context.state().name(),
                "Transition not allowed from current state"
            );
            return Err(TransitionError::WrongState {
                transition: name.to_string(),
                current: context.state().name().to_string(),
                allowed: transition.allowed_names(),
            });
        }

        self.run_guards(name, transition, context).await?;

        for callback in &transition.before_callbacks {
            trace!(
                transition = name,
                callback = callback.describe(),
                "Running before-callback"
            );
            callback
                .call(context)
                .await
                .map_err(|source| TransitionError::CallbackFailed {
                    transition: name.to_string(),
                    stage: CallbackStage::Before,
                    source,
                })?;
        }

        let from = context.state().name().to_string();
        context.set_state(transition.to_state.clone());
        debug!(
            transition = name,
            from = %from,
            to = transition.to_state.name(),
            "Transition committed"
        );

        for callback in &transition.after_callbacks {
            trace!(
                transition = name,
                callback = callback.describe(),
                "Running after-callback"
            );
            if let Err(source) = callback.call(context).await {
                warn!(
                    transition = name,
                    callback = callback.describe(),
                    error = %source,
                    "After-callback failed; state change is kept"
                );
                return Err(TransitionError::CallbackFailed {
                    transition: name.to_string(),
                    stage: CallbackStage::After,
                    source,
                });
            }
        }

        Ok(())
    }

    /// Run a transition while holding the shared context's lock for the
    /// whole protocol.
    pub async fn transition_shared(
        &self,
        context: &SharedContext<C>,
        name: &str,
    ) -> Result<(), TransitionError> {
        let mut guard = context.lock().await;
        self.transition(&mut *guard, name).await
    }

    async fn run_guards(
        &self,
        name: &str,
        transition: &Transition<C>,
        context: &C,
    ) -> Result<(), GuardRejected> {
        for guard in &transition.guards {
            let verdict = guard.evaluate(context).await;
            trace!(
                transition = name,
                guard = guard.describe(),
                allowed = matches!(verdict, Ok(true)),
                "Guard evaluated"
            );

            let rejection = match verdict {
                Ok(true) => continue,
                Ok(false) => GuardRejected::new(context.state().name()),
                Err(err) => GuardRejected::new(context.state().name()).with_reason(err.to_string()),
            };

            debug!(
                transition = name,
                guard = guard.describe(),
                "Guard rejected transition"
            );
            return Err(rejection.with_guard(guard.describe()));
        }
        Ok(())
    }
}
