//! Stored workload and input validation.
//!
//! A `Workload` is what the presentation layer builds up one "add" at a time
//! and re-simulates under different policies. Simulations work on snapshots,
//! so the stored records keep zeroed metrics between runs.

use pyo3::prelude::*;
use rustc_hash::FxHashSet;

use crate::config::SimulationConfig;
use crate::engine::{simulate, SimulationError};
use crate::models::{Process, ProcessId, SimulationResult, Ticks};
use crate::policy::PolicyKind;

/// Check the field ranges the engine relies on and that ids are unique.
///
/// Also rejects workloads whose last arrival plus total burst (the latest tick
/// any policy can reach) does not fit in [`Ticks`].
pub fn validate_processes(processes: &[Process]) -> Result<(), SimulationError> {
    let mut seen: FxHashSet<ProcessId> =
        FxHashSet::with_capacity_and_hasher(processes.len(), Default::default());
    let mut horizon: Option<Ticks> = Some(0);

    for process in processes {
        if process.burst == 0 {
            return Err(SimulationError::InvalidInput(format!(
                "process {}: burst must be > 0",
                process.id
            )));
        }
        if process.memory == 0 {
            return Err(SimulationError::InvalidInput(format!(
                "process {}: memory must be > 0",
                process.id
            )));
        }
        if !seen.insert(process.id) {
            return Err(SimulationError::InvalidInput(format!(
                "duplicate process id {}",
                process.id
            )));
        }
        horizon = horizon.and_then(|h| h.checked_add(process.burst));
    }

    let last_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
    if horizon.and_then(|h| h.checked_add(last_arrival)).is_none() {
        return Err(SimulationError::InvalidInput(
            "arrival and burst times overflow the simulation clock".to_string(),
        ));
    }

    Ok(())
}

/// Ordered list of processes kept across simulations.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a workload from existing records, validating them.
    pub fn with_processes(processes: Vec<Process>) -> Result<Self, SimulationError> {
        validate_processes(&processes)?;
        let processes = processes
            .into_iter()
            .map(|mut p| {
                p.reset();
                p
            })
            .collect();
        Ok(Self { processes })
    }

    /// Validate and append a process from raw form values.
    pub fn add(
        &mut self,
        id: i64,
        arrival: i64,
        burst: i64,
        memory: i64,
        priority: i64,
    ) -> Result<&Process, SimulationError> {
        if self.processes.iter().any(|p| p.id == id) {
            return Err(SimulationError::InvalidInput(format!(
                "duplicate process id {}",
                id
            )));
        }
        let process = Process::from_raw(id, arrival, burst, memory, priority)?;
        self.processes.push(process);
        Ok(&self.processes[self.processes.len() - 1])
    }

    pub fn remove(&mut self, id: ProcessId) -> Option<Process> {
        let index = self.processes.iter().position(|p| p.id == id)?;
        Some(self.processes.remove(index))
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn clear(&mut self) {
        self.processes.clear();
    }

    /// Simulate `kind` over a snapshot of the stored processes.
    pub fn run(
        &self,
        kind: PolicyKind,
        config: &SimulationConfig,
    ) -> Result<SimulationResult, SimulationError> {
        simulate(&self.processes, kind, config)
    }
}

#[pymethods]
impl Workload {
    #[new]
    fn py_new() -> Self {
        Self::new()
    }

    /// Add a process; raises ValueError on invalid or duplicate input.
    #[pyo3(name = "add_process", signature = (id, arrival, burst, memory, priority=0))]
    fn py_add_process(
        &mut self,
        id: i64,
        arrival: i64,
        burst: i64,
        memory: i64,
        priority: i64,
    ) -> PyResult<Process> {
        match self.add(id, arrival, burst, memory, priority) {
            Ok(process) => Ok(process.clone()),
            Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
        }
    }

    #[pyo3(name = "remove_process")]
    fn py_remove_process(&mut self, id: ProcessId) -> Option<Process> {
        self.remove(id)
    }

    #[pyo3(name = "clear")]
    fn py_clear(&mut self) {
        self.clear();
    }

    #[getter(processes)]
    fn py_processes(&self) -> Vec<Process> {
        self.processes.clone()
    }

    #[pyo3(name = "simulate", signature = (policy, config=None))]
    fn py_simulate(
        &self,
        policy: PolicyKind,
        config: Option<SimulationConfig>,
    ) -> PyResult<SimulationResult> {
        let config = config.unwrap_or_default();
        match self.run(policy, &config) {
            Ok(result) => Ok(result),
            Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
        }
    }

    fn __len__(&self) -> usize {
        self.len()
    }

    fn __repr__(&self) -> String {
        format!("Workload(processes={})", self.processes.len())
    }
}
