//! Build errors for state machine and transition builders.

use crate::builder::validation::DefinitionError;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state) at least once")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Invalid state machine definition: {}", describe_all(.0))]
    InvalidDefinition(Vec<DefinitionError>),
}

fn describe_all(errors: &[DefinitionError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
