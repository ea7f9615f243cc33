//! Non-preemptive dispatch loop shared by SJF, priority and first-fit memory.

use crate::log_debug;

use super::core::SimulationError;
use super::state::SimulationState;

/// Picks the next process to run whenever the CPU is free.
pub trait DispatchRule {
    /// Position in `pending` of the process to run now, or `None` if no
    /// pending process is eligible at the current clock.
    fn select(&mut self, state: &SimulationState, pending: &[usize]) -> Option<usize>;

    /// Run the selected process to completion.
    fn dispatch(&mut self, state: &mut SimulationState, index: usize) -> Result<(), SimulationError> {
        state.run_to_completion(index)
    }
}

/// Run `pending` (already in rank order) to completion under `rule`.
///
/// When nothing is eligible the clock jumps straight to the next arrival
/// instead of ticking. If nothing is eligible and no arrival is left, no
/// future event can change that and the run fails as degenerate.
pub fn dispatch_until_done<R: DispatchRule>(
    state: &mut SimulationState,
    mut pending: Vec<usize>,
    rule: &mut R,
) -> Result<(), SimulationError> {
    while !pending.is_empty() {
        if let Some(position) = rule.select(state, &pending) {
            let index = pending.remove(position);
            rule.dispatch(state, index)?;
            continue;
        }

        match state.next_arrival(&pending) {
            Some(next) => state.advance_to(next),
            None => {
                log_debug!(
                    state.verbosity,
                    "  t={} no eligible process and no future arrival",
                    state.clock()
                );
                return Err(SimulationError::DegenerateSimulation {
                    pending: pending.iter().map(|&i| state.process(i).id).collect(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    /// Runs the first arrived process in pending order.
    struct FirstArrived;

    impl DispatchRule for FirstArrived {
        fn select(&mut self, state: &SimulationState, pending: &[usize]) -> Option<usize> {
            pending.iter().position(|&i| state.has_arrived(i))
        }
    }

    /// Never finds anything eligible.
    struct Nothing;

    impl DispatchRule for Nothing {
        fn select(&mut self, _state: &SimulationState, _pending: &[usize]) -> Option<usize> {
            None
        }
    }

    #[test]
    fn test_jumps_over_idle_gaps() {
        let processes = vec![Process::new(1, 10, 2, 1, 0), Process::new(2, 30, 1, 1, 0)];
        let mut state = SimulationState::new(&processes, 0);

        dispatch_until_done(&mut state, vec![0, 1], &mut FirstArrived).unwrap();

        let result = state.into_result("test");
        assert_eq!(result.makespan, 31);
        assert_eq!(result.timeline[0].start, 10);
        assert_eq!(result.timeline[1].start, 30);
        assert!(result.processes.iter().all(|p| p.wait_time == 0));
    }

    #[test]
    fn test_no_eligible_and_no_arrival_is_degenerate() {
        let processes = vec![Process::new(4, 0, 2, 1, 0), Process::new(5, 3, 1, 1, 0)];
        let mut state = SimulationState::new(&processes, 0);

        let err = dispatch_until_done(&mut state, vec![0, 1], &mut Nothing).unwrap_err();
        assert_eq!(
            err,
            SimulationError::DegenerateSimulation {
                pending: vec![4, 5]
            }
        );
        // The clock still moved to the last arrival before giving up
        assert_eq!(state.clock(), 3);
    }
}
