//! First-fit memory scheduling.
//!
//! Non-preemptive. A process is eligible once it has arrived and its memory
//! request fits the budget that is free at that instant. Among eligible
//! processes the first in arrival order runs. Memory is held only for the
//! dispatch itself: one process runs at a time, so the full budget is free
//! again at every decision.

use std::num::NonZeroU64;

use crate::log_checks;
use crate::models::MemoryUnits;
use crate::ranking::{rank_processes, Ranking};

use super::core::SimulationError;
use super::dispatch::{dispatch_until_done, DispatchRule};
use super::state::SimulationState;

/// Fixed memory budget with admission bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPool {
    total: MemoryUnits,
    available: MemoryUnits,
}

impl MemoryPool {
    pub fn new(total: NonZeroU64) -> Self {
        Self {
            total: total.get(),
            available: total.get(),
        }
    }

    pub fn total(&self) -> MemoryUnits {
        self.total
    }

    pub fn available(&self) -> MemoryUnits {
        self.available
    }

    pub fn in_use(&self) -> MemoryUnits {
        self.total - self.available
    }

    pub fn fits(&self, request: MemoryUnits) -> bool {
        request <= self.available
    }

    /// Reserve `request` units. Returns false, reserving nothing, if it does not fit.
    pub fn acquire(&mut self, request: MemoryUnits) -> bool {
        match self.available.checked_sub(request) {
            Some(rest) => {
                self.available = rest;
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, amount: MemoryUnits) {
        self.available = (self.available + amount).min(self.total);
    }
}

/// First arrived process whose memory fits.
pub struct FirstFit {
    pool: MemoryPool,
}

impl FirstFit {
    pub fn new(total_memory: NonZeroU64) -> Self {
        Self {
            pool: MemoryPool::new(total_memory),
        }
    }

    pub fn pool(&self) -> &MemoryPool {
        &self.pool
    }
}

impl DispatchRule for FirstFit {
    fn select(&mut self, state: &SimulationState, pending: &[usize]) -> Option<usize> {
        pending.iter().position(|&index| {
            if !state.has_arrived(index) {
                return false;
            }
            let process = state.process(index);
            let fits = self.pool.fits(process.memory);
            if !fits {
                log_checks!(
                    state.verbosity,
                    "  t={} P{} needs {} memory, {} available",
                    state.clock(),
                    process.id,
                    process.memory,
                    self.pool.available()
                );
            }
            fits
        })
    }

    fn dispatch(&mut self, state: &mut SimulationState, index: usize) -> Result<(), SimulationError> {
        let memory = state.process(index).memory;
        if !self.pool.acquire(memory) {
            return Err(SimulationError::DegenerateSimulation {
                pending: vec![state.process(index).id],
            });
        }
        let outcome = state.run_to_completion(index);
        self.pool.release(memory);
        outcome
    }
}

pub fn run(state: &mut SimulationState, total_memory: NonZeroU64) -> Result<(), SimulationError> {
    // A request larger than the whole budget can never be admitted
    let oversized: Vec<_> = state
        .processes()
        .iter()
        .filter(|p| p.memory > total_memory.get())
        .map(|p| p.id)
        .collect();
    if !oversized.is_empty() {
        return Err(SimulationError::DegenerateSimulation { pending: oversized });
    }

    let pending = rank_processes(state.processes(), Ranking::Arrival);
    dispatch_until_done(state, pending, &mut FirstFit::new(total_memory))
}
