//! Definition checks run when a state machine is built.
//!
//! Every problem is reported at once: checks are combined with
//! `Validation`, which accumulates failures instead of stopping at the
//! first one.

use crate::core::{State, StateAware};
use crate::machine::Transition;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A mistake in how transitions were declared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("Transition '{name}' is defined more than once")]
    DuplicateTransition { name: String },

    #[error("Transition '{transition}' uses undeclared state '{state}'")]
    UndeclaredState { transition: String, state: String },
}

type Check = Validation<(), NonEmptyVec<DefinitionError>>;

/// Validate a list of named transitions.
///
/// Names must be unique. When `declared` is given, every from- and
/// to-state must be one of the declared states.
pub(crate) fn validate_definitions<C>(
    transitions: &[(String, Transition<C>)],
    declared: Option<&[C::State]>,
) -> Check
where
    C: StateAware + Send + Sync,
{
    let mut checks: Vec<Check> = Vec::new();
    let mut seen = HashSet::new();

    for (name, transition) in transitions {
        if !seen.insert(name.as_str()) {
            checks.push(Validation::fail(DefinitionError::DuplicateTransition {
                name: name.clone(),
            }));
        }

        if let Some(declared) = declared {
            let referenced = transition
                .from_states()
                .iter()
                .chain(std::iter::once(transition.to_state()));
            for state in referenced {
                checks.push(check_declared(name, state, declared));
            }
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }
    Validation::all_vec(checks).map(|_| ())
}

fn check_declared<S: State>(transition: &str, state: &S, declared: &[S]) -> Check {
    if declared.contains(state) {
        Validation::success(())
    } else {
        Validation::fail(DefinitionError::UndeclaredState {
            transition: transition.to_string(),
            state: state.name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ticket {
        state: &'static str,
    }

    impl StateAware for Ticket {
        type State = &'static str;

        fn state(&self) -> &&'static str {
            &self.state
        }

        fn set_state(&mut self, state: &'static str) {
            self.state = state;
        }
    }

    fn named(name: &str, from: &'static str, to: &'static str) -> (String, Transition<Ticket>) {
        let transition = Transition::builder().from(from).to(to).build().unwrap();
        (name.to_string(), transition)
    }

    #[test]
    fn valid_definitions_pass() {
        let transitions = vec![named("open", "new", "open"), named("close", "open", "closed")];
        let declared = ["new", "open", "closed"];

        let result = validate_definitions(&transitions, Some(&declared[..]));
        assert!(result.is_success());
    }

    #[test]
    fn undeclared_states_are_ignored_without_declaration() {
        let transitions = vec![named("open", "new", "anything")];

        assert!(validate_definitions(&transitions, None).is_success());
    }

    #[test]
    fn validation_accumulates_all_errors() {
        let transitions = vec![
            named("open", "new", "open"),
            named("open", "new", "opened"),
            named("close", "opne", "closed"),
        ];
        let declared = ["new", "open", "closed"];

        let result = validate_definitions(&transitions, Some(&declared[..]));

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);

                let has_duplicate = errors.iter().any(|e| match e {
                    DefinitionError::DuplicateTransition { name } => name == "open",
                    _ => false,
                });
                let has_opened = errors.iter().any(|e| match e {
                    DefinitionError::UndeclaredState { state, .. } => state == "opened",
                    _ => false,
                });
                let has_typo = errors.iter().any(|e| match e {
                    DefinitionError::UndeclaredState { transition, state } => {
                        transition == "close" && state == "opne"
                    }
                    _ => false,
                });

                assert!(has_duplicate);
                assert!(has_opened);
                assert!(has_typo);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}
