//! Typed entry points of the scheduling engine.

use thiserror::Error;

use crate::config::SimulationConfig;
use crate::log_changes;
use crate::models::{Process, ProcessId, SimulationResult, Ticks};
use crate::policy::{Policy, PolicyKind};
use crate::workload::validate_processes;

use super::state::SimulationState;
use super::{fcfs, first_fit, priority, round_robin, sjf};

/// Errors that can occur while preparing or running a simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown scheduling policy: {0}")]
    UnknownPolicy(String),
    #[error("Degenerate simulation: processes {pending:?} can never be dispatched")]
    DegenerateSimulation { pending: Vec<ProcessId> },
    #[error(
        "Process {id} would complete at {completion}, before its arrival at {arrival} plus its burst"
    )]
    InconsistentTimeline {
        id: ProcessId,
        arrival: Ticks,
        completion: Ticks,
    },
}

/// Run `policy` over a snapshot of `processes`.
///
/// Input is not validated here (see [`simulate`]); the caller's records are
/// never modified. Returns processes in completion order with metrics set.
pub fn run_policy(
    processes: &[Process],
    policy: &Policy,
    verbosity: u8,
) -> Result<SimulationResult, SimulationError> {
    let mut state = SimulationState::new(processes, verbosity);
    log_changes!(
        verbosity,
        "Simulating {} over {} processes",
        policy.name(),
        state.len()
    );

    match *policy {
        Policy::Fcfs => fcfs::run(&mut state)?,
        Policy::ShortestJobFirst => sjf::run(&mut state)?,
        Policy::RoundRobin {
            quantum,
            arrival_gating,
        } => round_robin::run(&mut state, quantum, arrival_gating)?,
        Policy::Priority => priority::run(&mut state)?,
        Policy::FirstFitMemory { total_memory } => first_fit::run(&mut state, total_memory)?,
    }

    Ok(state.into_result(policy.name()))
}

/// Validate `processes`, build the policy from `config` and run it.
pub fn simulate(
    processes: &[Process],
    kind: PolicyKind,
    config: &SimulationConfig,
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes)?;
    let policy = Policy::from_config(kind, config)?;
    run_policy(processes, &policy, config.verbosity)
}
