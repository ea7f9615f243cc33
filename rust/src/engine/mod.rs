//! Scheduling engine.
//!
//! Each policy lives in its own module and works on a [`SimulationState`]
//! snapshot driven by one virtual clock. SJF, priority and first-fit memory
//! share the non-preemptive loop in `dispatch`; FCFS and round-robin drive
//! the state directly.

mod core;
mod dispatch;
mod fcfs;
mod first_fit;
mod priority;
mod round_robin;
mod sjf;
mod state;

pub use self::core::{run_policy, simulate, SimulationError};
pub use dispatch::DispatchRule;
pub use first_fit::MemoryPool;
pub use state::{ProcessState, SimulationState};
