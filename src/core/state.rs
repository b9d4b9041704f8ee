//! State identifiers and the context capability that owns one.
//!
//! A state is an opaque, comparable identifier. A context is any domain
//! entity that exposes exactly one current state value through
//! [`StateAware`]. The state machine reads and writes that value; guards
//! and callbacks only read it.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// States carry no structure beyond equality. They can be fieldless
/// enums (see [`state_enum!`](crate::state_enum)) or plain strings.
///
/// # Required Traits
///
/// - `Clone`: the target state of a transition is cloned into the context
/// - `PartialEq`: from-state membership is an equality test
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: descriptors are shared across tasks
///
/// # Example
///
/// ```rust
/// use statewise::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
///     Failed,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///             Self::Failed => "Failed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Complete | Self::Failed)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Failed)
///     }
/// }
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

/// Capability of a context that owns a current state.
///
/// `set_state` is the single mutation point used by
/// [`StateMachine`](crate::machine::StateMachine) when a transition commits.
/// Guards and callbacks must not call it.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateAware;
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
/// let process = Process { state: "started", progress: 100 };
/// assert_eq!(*process.state(), "started");
/// ```
pub trait StateAware {
    /// The state type this context moves through.
    type State: State;

    /// Current state.
    fn state(&self) -> &Self::State;

    /// Replace the current state.
    fn set_state(&mut self, state: Self::State);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
        Failed,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
                Self::Failed => "Failed",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Complete | Self::Failed)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Failed)
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
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
        assert_eq!(TestState::Failed.name(), "Failed");
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestState::Initial.is_final());
        assert!(!TestState::Processing.is_final());
        assert!(TestState::Complete.is_final());
        assert!(TestState::Failed.is_final());
    }

    #[test]
    fn is_error_identifies_error_states() {
        assert!(!TestState::Complete.is_error());
        assert!(TestState::Failed.is_error());
    }

    #[test]
    fn string_states_name_themselves() {
        let owned = String::from("started");
        assert_eq!(owned.name(), "started");
        assert_eq!("ended".name(), "ended");
        assert!(!"ended".is_final());
    }

    #[test]
    fn context_exposes_and_replaces_state() {
        let mut job = Job {
            state: TestState::Initial,
        };
        assert_eq!(job.state(), &TestState::Initial);

        job.set_state(TestState::Processing);
        assert_eq!(job.state(), &TestState::Processing);
    }
}
