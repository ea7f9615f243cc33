//! CPU scheduling simulator: policy engine and Python bindings.
//!
//! Five policies (FCFS, SJF, round-robin, priority and first-fit memory) run
//! over an in-memory workload on a single virtual clock and report per-process
//! wait and turnaround times plus their averages.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod config;
pub mod engine;
pub mod logging;
pub mod metrics;
mod models;
mod policy;
pub mod ranking;
mod workload;

pub use config::SimulationConfig;
pub use engine::{run_policy, simulate, SimulationError};
pub use models::{DispatchSlice, MemoryUnits, Process, ProcessId, SimulationResult, Ticks};
pub use policy::{Policy, PolicyKind};
pub use workload::{validate_processes, Workload};

/// Run one policy over a list of processes.
///
/// # Arguments
/// * `processes` - Workload; left unchanged
/// * `policy` - Policy to run
/// * `quantum` - Round-robin time slice (> 0)
/// * `total_memory` - First-fit memory budget (> 0)
/// * `arrival_gating` - Round-robin admits processes only once they have arrived
/// * `verbosity` - 0=silent, 1=changes, 2=checks, 3=debug (stderr)
///
/// # Returns
/// * SimulationResult with processes in completion order
///
/// # Raises
/// * ValueError on invalid input, invalid configuration, or a workload that
///   can never complete
/// * ValueError from round-robin without `arrival_gating` when a process
///   would finish before `arrival + burst` (e.g. `A(0,1), B(2,1)`); pass
///   `arrival_gating=True` for workloads with late arrivals
#[pyfunction]
#[pyo3(
    name = "run_policy",
    signature = (processes, policy, quantum=SimulationConfig::DEFAULT_QUANTUM, total_memory=SimulationConfig::DEFAULT_TOTAL_MEMORY, arrival_gating=false, verbosity=0)
)]
fn py_run_policy(
    processes: Vec<Process>,
    policy: PolicyKind,
    quantum: Ticks,
    total_memory: MemoryUnits,
    arrival_gating: bool,
    verbosity: u8,
) -> PyResult<SimulationResult> {
    let config = SimulationConfig {
        quantum,
        total_memory,
        round_robin_arrival_gating: arrival_gating,
        verbosity,
    };

    match simulate(&processes, policy, &config) {
        Ok(result) => Ok(result),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Run one policy with an explicit configuration object.
#[pyfunction]
#[pyo3(name = "simulate", signature = (processes, policy, config=None))]
fn py_simulate(
    processes: Vec<Process>,
    policy: PolicyKind,
    config: Option<SimulationConfig>,
) -> PyResult<SimulationResult> {
    let config = config.unwrap_or_default();
    simulate(&processes, policy, &config)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// The procsim_rust Python module.
#[pymodule]
fn procsim_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Process>()?;
    m.add_class::<DispatchSlice>()?;
    m.add_class::<SimulationResult>()?;
    m.add_class::<Workload>()?;

    // Config types
    m.add_class::<PolicyKind>()?;
    m.add_class::<SimulationConfig>()?;

    // Engine
    m.add_function(wrap_pyfunction!(py_run_policy, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate, m)?)?;

    Ok(())
}
