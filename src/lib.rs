//! Statewise: a guarded finite state machine engine
//!
//! Application code defines contexts that own a discrete state, and named
//! transitions that move a context between states. The engine runs each
//! transition through a fixed protocol:
//!
//! lookup → source-state check → guards → before-callbacks → state change → after-callbacks
//!
//! Every step is awaited before the next begins, and the state is changed
//! at exactly one point, only after every guard and before-callback has
//! succeeded.
//!
//! # Core Concepts
//!
//! - **State**: opaque comparable identifier via the `State` trait
//! - **Context**: any type implementing `StateAware`
//! - **Transition**: from-states, a to-state, ordered guards and callbacks
//! - **StateMachine**: registry of named transitions that executes them
//! - **StateGuard**: standalone allow-list check for gating other actions
//!
//! # Example
//!
//! ```rust
//! use statewise::core::StateAware;
//! use statewise::machine::{StateMachine, Transition, TransitionError};
//! use statewise::state_enum;
//!
//! state_enum! {
//!     enum ProcessState {
//!         Started,
//!         Ended,
//!     }
//!     final: [Ended]
//! }
//!
//! struct Process {
//!     state: ProcessState,
//!     progress: u8,
//! }
//!
//! impl StateAware for Process {
//!     type State = ProcessState;
//!
//!     fn state(&self) -> &ProcessState {
//!         &self.state
//!     }
//!
//!     fn set_state(&mut self, state: ProcessState) {
//!         self.state = state;
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let machine: StateMachine<Process> = StateMachine::builder()
//!         .transition(
//!             "end",
//!             Transition::builder()
//!                 .from(ProcessState::Started)
//!                 .to(ProcessState::Ended)
//!                 .when(|p: &Process| p.progress == 100),
//!         )
//!         .unwrap()
//!         .build()
//!         .unwrap();
//!
//!     let mut unfinished = Process { state: ProcessState::Started, progress: 50 };
//!     let err = machine.transition(&mut unfinished, "end").await.unwrap_err();
//!     assert!(matches!(err, TransitionError::GuardRejected(_)));
//!     assert_eq!(unfinished.state, ProcessState::Started);
//!
//!     let mut finished = Process { state: ProcessState::Started, progress: 100 };
//!     machine.transition(&mut finished, "end").await.unwrap();
//!     assert_eq!(finished.state, ProcessState::Ended);
//! }
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{
    ActionError, Callback, Guard, GuardRejected, State, StateAware, StateGuard,
    TransitionCallback, TransitionGuard,
};
pub use machine::{CallbackStage, SharedContext, StateMachine, Transition, TransitionError};
