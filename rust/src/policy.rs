//! Scheduling policy selection.
//!
//! `PolicyKind` is the closed set of policies the presentation layer can pick
//! from. `Policy` is the same set with each variant's parameters attached and
//! already validated, and is what the engine dispatches on.

use pyo3::prelude::*;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::config::SimulationConfig;
use crate::engine::SimulationError;

/// Policy selector exposed to Python.
#[pyclass(eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    #[pyo3(name = "FCFS")]
    Fcfs,
    #[pyo3(name = "SJF")]
    Sjf,
    RoundRobin,
    Priority,
    #[pyo3(name = "FMS")]
    Fms,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::RoundRobin,
        PolicyKind::Priority,
        PolicyKind::Fms,
    ];

    /// Display name, as shown in a policy picker.
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sjf => "SJF",
            PolicyKind::RoundRobin => "Round Robin",
            PolicyKind::Priority => "Priority",
            PolicyKind::Fms => "FMS",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = SimulationError;

    /// Parse a display name. Case and inner whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "fcfs" => Ok(PolicyKind::Fcfs),
            "sjf" => Ok(PolicyKind::Sjf),
            "roundrobin" | "rr" => Ok(PolicyKind::RoundRobin),
            "priority" | "prioridad" => Ok(PolicyKind::Priority),
            "fms" | "firstfit" | "firstfitmemory" => Ok(PolicyKind::Fms),
            _ => Err(SimulationError::UnknownPolicy(s.to_string())),
        }
    }
}

#[pymethods]
impl PolicyKind {
    /// Parse a display name such as "Round Robin".
    #[staticmethod]
    fn from_name(name: &str) -> PyResult<Self> {
        name.parse()
            .map_err(|e: SimulationError| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    #[getter(display_name)]
    fn py_display_name(&self) -> &'static str {
        self.name()
    }

    fn __str__(&self) -> &'static str {
        self.name()
    }
}

/// A policy with its parameters, ready to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    ShortestJobFirst,
    RoundRobin {
        quantum: NonZeroU64,
        /// Admit a process only once the clock has reached its arrival
        arrival_gating: bool,
    },
    Priority,
    FirstFitMemory {
        total_memory: NonZeroU64,
    },
}

impl Policy {
    /// Attach the parameters `kind` needs from `config`.
    ///
    /// Fails with `InvalidConfig` when round-robin gets a zero quantum or
    /// first-fit gets a zero memory budget. Parameters other policies do not
    /// use are ignored.
    pub fn from_config(kind: PolicyKind, config: &SimulationConfig) -> Result<Self, SimulationError> {
        match kind {
            PolicyKind::Fcfs => Ok(Policy::Fcfs),
            PolicyKind::Sjf => Ok(Policy::ShortestJobFirst),
            PolicyKind::Priority => Ok(Policy::Priority),
            PolicyKind::RoundRobin => {
                let quantum = NonZeroU64::new(config.quantum).ok_or_else(|| {
                    SimulationError::InvalidConfig("quantum must be > 0".to_string())
                })?;
                Ok(Policy::RoundRobin {
                    quantum,
                    arrival_gating: config.round_robin_arrival_gating,
                })
            }
            PolicyKind::Fms => {
                let total_memory = NonZeroU64::new(config.total_memory).ok_or_else(|| {
                    SimulationError::InvalidConfig("total memory must be > 0".to_string())
                })?;
                Ok(Policy::FirstFitMemory { total_memory })
            }
        }
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fcfs => PolicyKind::Fcfs,
            Policy::ShortestJobFirst => PolicyKind::Sjf,
            Policy::RoundRobin { .. } => PolicyKind::RoundRobin,
            Policy::Priority => PolicyKind::Priority,
            Policy::FirstFitMemory { .. } => PolicyKind::Fms,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}
