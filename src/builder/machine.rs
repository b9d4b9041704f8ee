//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::builder::validation::validate_definitions;
use crate::core::StateAware;
use crate::machine::{StateMachine, Transition};
use std::collections::BTreeMap;
use stillwater::validation::Validation;

/// Builder for constructing state machines with a fluent API.
///
/// Problems that span transitions (duplicate names, states outside the
/// declared set) are collected and reported together by [`build`].
///
/// [`build`]: StateMachineBuilder::build
pub struct StateMachineBuilder<C>
where
    C: StateAware + Send + Sync,
{
    states: Option<Vec<C::State>>,
    transitions: Vec<(String, Transition<C>)>,
}

impl<C> StateMachineBuilder<C>
where
    C: StateAware + Send + Sync,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: None,
            transitions: Vec::new(),
        }
    }

    /// Declare the full set of states the domain uses (optional).
    ///
    /// When set, `build` rejects transitions that mention any other state.
    pub fn states(mut self, states: impl IntoIterator<Item = C::State>) -> Self {
        self.states = Some(states.into_iter().collect());
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        name: impl Into<String>,
        builder: TransitionBuilder<C>,
    ) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push((name.into(), transition));
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, name: impl Into<String>, transition: Transition<C>) -> Self {
        self.transitions.push((name.into(), transition));
        self
    }

    /// Add multiple named transitions at once.
    pub fn transitions<N>(mut self, transitions: impl IntoIterator<Item = (N, Transition<C>)>) -> Self
    where
        N: Into<String>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(name, transition)| (name.into(), transition)),
        );
        self
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine<C>, BuildError> {
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if let Validation::Failure(errors) =
            validate_definitions(&self.transitions, self.states.as_deref())
        {
            return Err(BuildError::InvalidDefinition(
                errors.iter().cloned().collect(),
            ));
        }

        let registry: BTreeMap<String, Transition<C>> = self.transitions.into_iter().collect();
        Ok(StateMachine::from_registry(registry))
    }
}

impl<C> Default for StateMachineBuilder<C>
where
    C: StateAware + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
