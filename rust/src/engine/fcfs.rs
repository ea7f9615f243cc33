//! First-come-first-served.

use crate::ranking::{rank_processes, Ranking};

use super::core::SimulationError;
use super::state::SimulationState;

/// Run every process to completion in arrival order (input order on ties).
pub fn run(state: &mut SimulationState) -> Result<(), SimulationError> {
    for index in rank_processes(state.processes(), Ranking::Arrival) {
        state.run_to_completion(index)?;
    }
    Ok(())
}
