//! Configuration types for a simulation run.

use pyo3::prelude::*;

use crate::models::{MemoryUnits, Ticks};

/// Parameters shared by all policies; each policy reads the ones it needs.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Round-robin time slice (must be > 0)
    #[pyo3(get, set)]
    pub quantum: Ticks,
    /// First-fit memory budget (must be > 0)
    #[pyo3(get, set)]
    pub total_memory: MemoryUnits,
    /// Admit processes to the round-robin queue only once they have arrived
    #[pyo3(get, set)]
    pub round_robin_arrival_gating: bool,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl SimulationConfig {
    pub const DEFAULT_QUANTUM: Ticks = 2;
    pub const DEFAULT_TOTAL_MEMORY: MemoryUnits = 1024;
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: Self::DEFAULT_QUANTUM,
            total_memory: Self::DEFAULT_TOTAL_MEMORY,
            round_robin_arrival_gating: false,
            verbosity: 0,
        }
    }
}

#[pymethods]
impl SimulationConfig {
    #[new]
    #[pyo3(signature = (
        quantum=None,
        total_memory=None,
        round_robin_arrival_gating=None,
        verbosity=None
    ))]
    fn new(
        quantum: Option<Ticks>,
        total_memory: Option<MemoryUnits>,
        round_robin_arrival_gating: Option<bool>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            quantum: quantum.unwrap_or(defaults.quantum),
            total_memory: total_memory.unwrap_or(defaults.total_memory),
            round_robin_arrival_gating: round_robin_arrival_gating
                .unwrap_or(defaults.round_robin_arrival_gating),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SimulationConfig(quantum={}, total_memory={}, round_robin_arrival_gating={})",
            self.quantum, self.total_memory, self.round_robin_arrival_gating
        )
    }
}
