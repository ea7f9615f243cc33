//! Preemptive round-robin with a fixed quantum.
//!
//! Without arrival gating the ready queue is seeded with every process in
//! input order and arrival times only matter for the metrics. With gating a
//! process joins the tail of the queue once the clock reaches its arrival;
//! processes that arrive during a slice join ahead of the preempted process.

use std::collections::VecDeque;
use std::num::NonZeroU64;

use crate::log_debug;
use crate::models::Ticks;
use crate::ranking::{rank_processes, Ranking};

use super::core::SimulationError;
use super::state::SimulationState;

/// Move every process in `arrivals` whose arrival has passed onto the ready queue.
fn admit_arrivals(
    state: &mut SimulationState,
    arrivals: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
) {
    while let Some(&index) = arrivals.front() {
        if !state.has_arrived(index) {
            break;
        }
        arrivals.pop_front();
        state.mark_ready(index);
        ready.push_back(index);
    }
}

pub fn run(
    state: &mut SimulationState,
    quantum: NonZeroU64,
    arrival_gating: bool,
) -> Result<(), SimulationError> {
    let quantum = quantum.get();
    let mut remaining: Vec<Ticks> = state.processes().iter().map(|p| p.burst).collect();
    let mut ready: VecDeque<usize> = VecDeque::with_capacity(state.len());

    // Not yet admitted, in arrival order
    let mut arrivals: VecDeque<usize> = if arrival_gating {
        rank_processes(state.processes(), Ranking::Arrival).into()
    } else {
        for index in 0..state.len() {
            state.mark_ready(index);
            ready.push_back(index);
        }
        VecDeque::new()
    };

    loop {
        admit_arrivals(state, &mut arrivals, &mut ready);

        let Some(index) = ready.pop_front() else {
            match arrivals.front() {
                Some(&next) => {
                    let arrival = state.process(next).arrival;
                    state.advance_to(arrival);
                    continue;
                }
                None => break,
            }
        };

        log_debug!(
            state.verbosity,
            "  t={} ready queue: {:?}",
            state.clock(),
            ready.iter().map(|&i| state.process(i).id).collect::<Vec<_>>()
        );

        let slice = remaining[index].min(quantum);
        state.run_slice(index, slice)?;
        remaining[index] -= slice;

        if remaining[index] > 0 {
            admit_arrivals(state, &mut arrivals, &mut ready);
            state.mark_ready(index);
            ready.push_back(index);
        } else {
            state.complete(index)?;
        }
    }

    Ok(())
}
