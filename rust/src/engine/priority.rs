//! Non-preemptive priority scheduling.
//!
//! Candidates are ranked by (arrival, priority); lower values win ties among
//! simultaneous arrivals. Whenever the CPU frees up, the highest-ranked
//! process that has already arrived runs to completion.

use crate::ranking::{rank_processes, Ranking};

use super::core::SimulationError;
use super::dispatch::{dispatch_until_done, DispatchRule};
use super::state::SimulationState;

/// First arrived process in rank order.
pub struct HighestRanked;

impl DispatchRule for HighestRanked {
    fn select(&mut self, state: &SimulationState, pending: &[usize]) -> Option<usize> {
        pending.iter().position(|&index| state.has_arrived(index))
    }
}

pub fn run(state: &mut SimulationState) -> Result<(), SimulationError> {
    let pending = rank_processes(state.processes(), Ranking::ArrivalPriority);
    dispatch_until_done(state, pending, &mut HighestRanked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Process, SimulationResult};

    fn simulate(processes: &[Process]) -> SimulationResult {
        let mut state = SimulationState::new(processes, 0);
        run(&mut state).unwrap();
        state.into_result("Priority")
    }

    #[test]
    fn test_earlier_arrival_runs_before_lower_value() {
        let result = simulate(&[
            Process::new(1, 0, 4, 1, 3),
            Process::new(2, 1, 2, 1, 5),
            Process::new(3, 2, 3, 1, 1),
        ]);
        // At t=4 both 2 and 3 are waiting; 2 arrived first
        assert_eq!(result.completion_order(), vec![1, 2, 3]);
        assert_eq!(result.process(2).unwrap().wait_time, 3);
        assert_eq!(result.process(3).unwrap().wait_time, 4);
        assert_eq!(result.makespan, 9);
    }

    #[test]
    fn test_priority_breaks_arrival_ties_after_idle_gap() {
        let result = simulate(&[
            Process::new(1, 0, 1, 1, 0),
            Process::new(2, 5, 2, 1, 4),
            Process::new(3, 5, 2, 1, 1),
        ]);
        assert_eq!(result.completion_order(), vec![1, 3, 2]);
        assert_eq!(result.process(3).unwrap().wait_time, 0);
        assert_eq!(result.process(2).unwrap().wait_time, 2);
    }

    #[test]
    fn test_does_not_preempt_running_process() {
        let result = simulate(&[Process::new(1, 0, 10, 1, 9), Process::new(2, 1, 1, 1, -5)]);
        assert_eq!(result.completion_order(), vec![1, 2]);
        assert_eq!(result.process(2).unwrap().wait_time, 9);
    }

    #[test]
    fn test_default_priority_behaves_like_arrival_order() {
        let result = simulate(&[
            Process::new(1, 3, 2, 1, 0),
            Process::new(2, 0, 2, 1, 0),
            Process::new(3, 1, 2, 1, 0),
        ]);
        assert_eq!(result.completion_order(), vec![2, 3, 1]);
    }

    #[test]
    fn test_simultaneous_arrivals_ordered_by_priority() {
        let result = simulate(&[
            Process::new(1, 0, 1, 1, 2),
            Process::new(2, 0, 1, 1, 0),
            Process::new(3, 0, 1, 1, 2),
        ]);
        assert_eq!(result.completion_order(), vec![2, 1, 3]);
    }
}
