//! Non-preemptive shortest-job-first.

use crate::ranking::{rank_processes, Ranking};

use super::core::SimulationError;
use super::dispatch::{dispatch_until_done, DispatchRule};
use super::state::SimulationState;

/// Smallest burst among arrived processes; ties go to the earlier-ranked one.
pub struct ShortestBurst;

impl DispatchRule for ShortestBurst {
    fn select(&mut self, state: &SimulationState, pending: &[usize]) -> Option<usize> {
        pending
            .iter()
            .enumerate()
            .filter(|&(_, &index)| state.has_arrived(index))
            .min_by_key(|&(_, &index)| state.process(index).burst)
            .map(|(position, _)| position)
    }
}

pub fn run(state: &mut SimulationState) -> Result<(), SimulationError> {
    let pending = rank_processes(state.processes(), Ranking::ArrivalBurst);
    dispatch_until_done(state, pending, &mut ShortestBurst)
}
