//! Process Lifecycle
//!
//! This example drives a long-running process through a guarded lifecycle.
//!
//! Key concepts:
//! - Named transitions with several source states
//! - Guards that block a transition until the process is complete
//! - Before/after callbacks around the single state change
//! - A standalone StateGuard gating an action that is not a transition
//!
//! Run with: RUST_LOG=statewise=debug cargo run --example process_lifecycle

use statewise::builder::simple_transition;
use statewise::core::{ActionError, State, StateAware, StateGuard};
use statewise::machine::{StateMachine, Transition};
use statewise::state_enum;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum ProcessState {
        Started,
        Paused,
        Ended,
        Cancelled,
    }
    final: [Ended, Cancelled]
    error: [Cancelled]
}

struct Process {
    id: u64,
    state: ProcessState,
    progress: u32,
}

impl StateAware for Process {
    type State = ProcessState;

    fn state(&self) -> &ProcessState {
        &self.state
    }

    fn set_state(&mut self, state: ProcessState) {
        self.state = state;
    }
}

fn report_progress(
    guard: &StateGuard<ProcessState>,
    process: &mut Process,
    step: u32,
) -> Result<(), ActionError> {
    guard.check(&*process)?;
    process.progress = (process.progress + step).min(100);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    println!("=== Process Lifecycle Example ===\n");

    let machine: StateMachine<Process> = StateMachine::builder()
        .states(ProcessState::ALL.iter().copied())
        .transition(
            "end",
            Transition::builder()
                .from(ProcessState::Started)
                .to(ProcessState::Ended)
                .when(|p: &Process| p.progress == 100)
                .before_fn(|p: &mut Process| {
                    println!("  Trying to end process {}", p.id);
                    Ok(())
                })
                .after_fn(|p: &mut Process| {
                    println!("  Process {} ended", p.id);
                    Ok(())
                }),
        )?
        .transition(
            "cancel",
            Transition::builder()
                .from_any([ProcessState::Started, ProcessState::Paused])
                .to(ProcessState::Cancelled),
        )?
        .add_transition(
            "pause",
            simple_transition(ProcessState::Started, ProcessState::Paused),
        )
        .add_transition(
            "resume",
            simple_transition(ProcessState::Paused, ProcessState::Started),
        )
        .build()?;

    let can_report = StateGuard::new([ProcessState::Started]);
    let mut process = Process {
        id: 7,
        state: ProcessState::Started,
        progress: 0,
    };

    println!("Available: {:?}", machine.available_transitions(&process));

    report_progress(&can_report, &mut process, 60)?;
    match machine.transition(&mut process, "end").await {
        Ok(()) => println!("Unexpected: ended at {}%", process.progress),
        Err(e) => println!("Cannot end yet: {e}"),
    }

    machine.transition(&mut process, "pause").await?;
    if let Err(e) = report_progress(&can_report, &mut process, 40) {
        println!("Progress report refused: {e}");
    }

    machine.transition(&mut process, "resume").await?;
    report_progress(&can_report, &mut process, 40)?;
    machine.transition(&mut process, "end").await?;

    println!(
        "\nFinal state: {} (final: {}, progress: {}%)",
        process.state.name(),
        process.state.is_final(),
        process.progress
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
