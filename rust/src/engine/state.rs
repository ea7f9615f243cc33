//! Per-run simulation state shared by every policy.

use crate::log_changes;
use crate::models::{DispatchSlice, Process, SimulationResult, Ticks};

use super::core::SimulationError;

/// Lifecycle of a process within one run.
///
/// Non-preemptive policies go Waiting -> Running -> Done. Round-robin cycles
/// Ready <-> Running until the remaining burst reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Waiting,
    Ready,
    Running,
    Done,
}

/// Snapshot of a workload being simulated.
///
/// Owns copies of the input records, so the caller's list is never touched.
#[derive(Debug)]
pub struct SimulationState {
    clock: Ticks,
    processes: Vec<Process>,
    states: Vec<ProcessState>,
    /// Indices into `processes`, in completion order
    completed: Vec<usize>,
    timeline: Vec<DispatchSlice>,
    pub(crate) verbosity: u8,
}

impl SimulationState {
    /// Snapshot `processes` with their metrics reset.
    pub fn new(processes: &[Process], verbosity: u8) -> Self {
        let processes: Vec<Process> = processes
            .iter()
            .cloned()
            .map(|mut p| {
                p.reset();
                p
            })
            .collect();
        let states = vec![ProcessState::Waiting; processes.len()];

        Self {
            clock: 0,
            completed: Vec::with_capacity(processes.len()),
            timeline: Vec::with_capacity(processes.len()),
            processes,
            states,
            verbosity,
        }
    }

    pub fn clock(&self) -> Ticks {
        self.clock
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, index: usize) -> &Process {
        &self.processes[index]
    }

    pub fn state(&self, index: usize) -> ProcessState {
        self.states[index]
    }

    pub fn has_arrived(&self, index: usize) -> bool {
        self.processes[index].arrival <= self.clock
    }

    /// Earliest arrival among `candidates` that is still in the future.
    pub fn next_arrival(&self, candidates: &[usize]) -> Option<Ticks> {
        candidates
            .iter()
            .map(|&i| self.processes[i].arrival)
            .filter(|&arrival| arrival > self.clock)
            .min()
    }

    /// Jump the clock forward over an idle gap.
    pub fn advance_to(&mut self, time: Ticks) {
        debug_assert!(time >= self.clock, "clock cannot move backwards");
        if time > self.clock {
            log_changes!(self.verbosity, "t={} idle until {}", self.clock, time);
            self.clock = time;
        }
    }

    pub fn mark_ready(&mut self, index: usize) {
        debug_assert_ne!(self.states[index], ProcessState::Done);
        self.states[index] = ProcessState::Ready;
    }

    /// Charge `duration` ticks of CPU to the process, starting now.
    ///
    /// Fails with `InvalidInput` if the clock would overflow.
    pub fn run_slice(&mut self, index: usize, duration: Ticks) -> Result<(), SimulationError> {
        debug_assert_ne!(
            self.states[index],
            ProcessState::Done,
            "finished process dispatched again"
        );

        let start = self.clock;
        let process_id = self.processes[index].id;
        self.clock = start.checked_add(duration).ok_or_else(|| {
            SimulationError::InvalidInput(format!(
                "process {}: clock overflows running {} ticks from {}",
                process_id, duration, start
            ))
        })?;
        self.states[index] = ProcessState::Running;
        log_changes!(
            self.verbosity,
            "t={} run P{} for {} (until {})",
            start,
            process_id,
            duration,
            self.clock
        );
        self.timeline.push(DispatchSlice {
            process_id,
            start,
            end: self.clock,
        });
        Ok(())
    }

    /// Dispatch without preemption: wait for arrival if needed, run the whole
    /// burst, and record the metrics.
    pub fn run_to_completion(&mut self, index: usize) -> Result<(), SimulationError> {
        let arrival = self.processes[index].arrival;
        self.advance_to(self.clock.max(arrival));
        self.run_slice(index, self.processes[index].burst)?;
        self.complete(index)
    }

    /// Mark the process done at the current clock and compute its metrics.
    pub fn complete(&mut self, index: usize) -> Result<(), SimulationError> {
        let completion = self.clock;
        let process = &mut self.processes[index];

        let inconsistent = || SimulationError::InconsistentTimeline {
            id: process.id,
            arrival: process.arrival,
            completion,
        };
        let turnaround = completion
            .checked_sub(process.arrival)
            .ok_or_else(inconsistent)?;
        let wait = turnaround
            .checked_sub(process.burst)
            .ok_or_else(inconsistent)?;

        process.turnaround_time = turnaround;
        process.wait_time = wait;
        self.states[index] = ProcessState::Done;
        self.completed.push(index);

        log_changes!(
            self.verbosity,
            "t={} P{} done (wait={}, turnaround={})",
            completion,
            process.id,
            wait,
            turnaround
        );
        Ok(())
    }

    /// Consume the state into a result with processes in completion order.
    pub fn into_result(self, policy: &str) -> SimulationResult {
        debug_assert_eq!(
            self.completed.len(),
            self.processes.len(),
            "every process must complete"
        );

        let mut slots: Vec<Option<Process>> = self.processes.into_iter().map(Some).collect();
        let processes: Vec<Process> = self
            .completed
            .iter()
            .filter_map(|&i| slots[i].take())
            .collect();

        SimulationResult::from_completed(policy, processes, self.timeline, self.clock)
    }
}
