//! Core data types for the simulation.

use pyo3::prelude::*;

use crate::engine::SimulationError;
use crate::metrics;

/// Virtual clock units.
pub type Ticks = u64;

/// Memory units requested by a process.
pub type MemoryUnits = u64;

/// Identifier of a process, unique within a workload.
pub type ProcessId = i64;

/// A process to be scheduled.
///
/// `wait_time` and `turnaround_time` are only meaningful on records returned
/// inside a [`SimulationResult`].
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    #[pyo3(get, set)]
    pub id: ProcessId,
    #[pyo3(get, set)]
    pub arrival: Ticks,
    #[pyo3(get, set)]
    pub burst: Ticks,
    #[pyo3(get, set)]
    pub memory: MemoryUnits,
    /// Lower value runs first under the priority policy.
    #[pyo3(get, set)]
    pub priority: i64,
    #[pyo3(get)]
    pub wait_time: Ticks,
    #[pyo3(get)]
    pub turnaround_time: Ticks,
}

impl Process {
    pub const DEFAULT_PRIORITY: i64 = 0;

    /// Create a process with zeroed metrics.
    pub fn new(
        id: ProcessId,
        arrival: Ticks,
        burst: Ticks,
        memory: MemoryUnits,
        priority: i64,
    ) -> Self {
        Self {
            id,
            arrival,
            burst,
            memory,
            priority,
            wait_time: 0,
            turnaround_time: 0,
        }
    }

    /// Build a process from raw signed form values, rejecting out-of-range fields.
    pub fn from_raw(
        id: i64,
        arrival: i64,
        burst: i64,
        memory: i64,
        priority: i64,
    ) -> Result<Self, SimulationError> {
        if arrival < 0 {
            return Err(SimulationError::InvalidInput(format!(
                "process {}: arrival must be >= 0, got {}",
                id, arrival
            )));
        }
        if burst <= 0 {
            return Err(SimulationError::InvalidInput(format!(
                "process {}: burst must be > 0, got {}",
                id, burst
            )));
        }
        if memory <= 0 {
            return Err(SimulationError::InvalidInput(format!(
                "process {}: memory must be > 0, got {}",
                id, memory
            )));
        }
        Ok(Self::new(
            id,
            arrival as Ticks,
            burst as Ticks,
            memory as MemoryUnits,
            priority,
        ))
    }

    /// Zero the computed metrics.
    pub fn reset(&mut self) {
        self.wait_time = 0;
        self.turnaround_time = 0;
    }

    /// Absolute completion time implied by the computed turnaround.
    pub fn completion_time(&self) -> Ticks {
        self.arrival.saturating_add(self.turnaround_time)
    }
}

#[pymethods]
impl Process {
    #[new]
    #[pyo3(signature = (id, arrival, burst, memory, priority=0))]
    fn py_new(id: i64, arrival: i64, burst: i64, memory: i64, priority: i64) -> PyResult<Self> {
        Self::from_raw(id, arrival, burst, memory, priority)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Process(id={}, arrival={}, burst={}, memory={}, priority={}, wait={}, turnaround={})",
            self.id,
            self.arrival,
            self.burst,
            self.memory,
            self.priority,
            self.wait_time,
            self.turnaround_time
        )
    }
}

/// One contiguous interval of CPU time charged to a process.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchSlice {
    #[pyo3(get)]
    pub process_id: ProcessId,
    #[pyo3(get)]
    pub start: Ticks,
    #[pyo3(get)]
    pub end: Ticks,
}

impl DispatchSlice {
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

#[pymethods]
impl DispatchSlice {
    fn __repr__(&self) -> String {
        format!(
            "DispatchSlice(process_id={}, start={}, end={})",
            self.process_id, self.start, self.end
        )
    }
}

/// Result of one policy run.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct SimulationResult {
    /// Display name of the policy that produced this result
    #[pyo3(get)]
    pub policy: String,
    /// Processes in completion order, metrics populated
    #[pyo3(get)]
    pub processes: Vec<Process>,
    /// Dispatch slices in execution order
    #[pyo3(get)]
    pub timeline: Vec<DispatchSlice>,
    #[pyo3(get)]
    pub average_wait: f64,
    #[pyo3(get)]
    pub average_turnaround: f64,
    /// Clock value when the last process completed
    #[pyo3(get)]
    pub makespan: Ticks,
}

impl SimulationResult {
    /// Assemble a result and compute its averages.
    pub fn from_completed(
        policy: &str,
        processes: Vec<Process>,
        timeline: Vec<DispatchSlice>,
        makespan: Ticks,
    ) -> Self {
        let average_wait = metrics::mean(processes.iter().map(|p| p.wait_time));
        let average_turnaround = metrics::mean(processes.iter().map(|p| p.turnaround_time));
        Self {
            policy: policy.to_string(),
            processes,
            timeline,
            average_wait,
            average_turnaround,
            makespan,
        }
    }

    /// Look up a completed process by id.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.processes.iter().map(|p| p.id).collect()
    }
}

#[pymethods]
impl SimulationResult {
    #[pyo3(name = "completion_order")]
    fn py_completion_order(&self) -> Vec<ProcessId> {
        self.completion_order()
    }

    /// Rows of (id, wait, turnaround) in completion order, ready for a table widget.
    fn rows(&self) -> Vec<(ProcessId, Ticks, Ticks)> {
        self.processes
            .iter()
            .map(|p| (p.id, p.wait_time, p.turnaround_time))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.processes.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationResult(policy={:?}, processes={}, average_wait={:.2}, average_turnaround={:.2})",
            self.policy,
            self.processes.len(),
            self.average_wait,
            self.average_turnaround
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_accepts_valid_fields() {
        let p = Process::from_raw(7, 0, 4, 128, -1).unwrap();
        assert_eq!(p, Process::new(7, 0, 4, 128, -1));
        assert_eq!(p.wait_time, 0);
        assert_eq!(p.turnaround_time, 0);
    }

    #[test]
    fn test_from_raw_rejects_out_of_range_fields() {
        assert!(matches!(
            Process::from_raw(1, -1, 4, 10, 0),
            Err(SimulationError::InvalidInput(_))
        ));
        assert!(matches!(
            Process::from_raw(1, 0, 0, 10, 0),
            Err(SimulationError::InvalidInput(_))
        ));
        assert!(matches!(
            Process::from_raw(1, 0, 4, -5, 0),
            Err(SimulationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_reset_clears_metrics() {
        let mut p = Process::new(1, 2, 3, 4, 0);
        p.wait_time = 5;
        p.turnaround_time = 8;
        assert_eq!(p.completion_time(), 10);
        p.reset();
        assert_eq!(p.wait_time, 0);
        assert_eq!(p.turnaround_time, 0);
    }

    #[test]
    fn test_result_averages() {
        let mut a = Process::new(1, 0, 5, 1, 0);
        a.turnaround_time = 5;
        let mut b = Process::new(2, 1, 3, 1, 0);
        b.wait_time = 4;
        b.turnaround_time = 7;

        let result = SimulationResult::from_completed("FCFS", vec![a, b], Vec::new(), 8);
        assert!((result.average_wait - 2.0).abs() < 1e-9);
        assert!((result.average_turnaround - 6.0).abs() < 1e-9);
        assert_eq!(result.completion_order(), vec![1, 2]);
        assert_eq!(result.process(2).map(|p| p.wait_time), Some(4));
        assert!(result.process(3).is_none());
    }

    #[test]
    fn test_empty_result_has_zero_averages() {
        let result = SimulationResult::from_completed("SJF", Vec::new(), Vec::new(), 0);
        assert_eq!(result.average_wait, 0.0);
        assert_eq!(result.average_turnaround, 0.0);
    }
}
