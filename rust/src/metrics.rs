//! Aggregate timing metrics over completed processes.

use crate::models::{Process, Ticks};

/// Arithmetic mean of tick counts, `0.0` when empty.
pub fn mean(values: impl Iterator<Item = Ticks>) -> f64 {
    let (sum, count) = values.fold((0u128, 0u64), |(sum, count), v| {
        (sum + v as u128, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// Sum of bursts, i.e. the CPU time the workload needs without idle gaps.
pub fn total_burst(processes: &[Process]) -> Ticks {
    processes.iter().map(|p| p.burst).sum()
}
