//! Pre-sort orders used by the policies.
//!
//! Every key ends with the process's input position, so sorting by key is a
//! stable sort on the leading fields:
//! - `Arrival`: FCFS and first-fit memory
//! - `ArrivalBurst`: shortest-job-first
//! - `ArrivalPriority`: priority

use crate::models::{Process, Ticks};

/// Which fields to rank processes by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ranking {
    Arrival,
    ArrivalBurst,
    ArrivalPriority,
}

/// Sort key for one process. Lower = earlier.
///
/// Keys of different variants are never compared against each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RankKey {
    Arrival {
        arrival: Ticks,
        index: usize,
    },
    ArrivalBurst {
        arrival: Ticks,
        burst: Ticks,
        index: usize,
    },
    ArrivalPriority {
        arrival: Ticks,
        priority: i64,
        index: usize,
    },
}

impl RankKey {
    /// Input position of the ranked process.
    pub fn index(&self) -> usize {
        match self {
            Self::Arrival { index, .. }
            | Self::ArrivalBurst { index, .. }
            | Self::ArrivalPriority { index, .. } => *index,
        }
    }
}

/// Compute the key for the process at `index`.
pub fn compute_rank_key(index: usize, process: &Process, ranking: Ranking) -> RankKey {
    match ranking {
        Ranking::Arrival => RankKey::Arrival {
            arrival: process.arrival,
            index,
        },
        Ranking::ArrivalBurst => RankKey::ArrivalBurst {
            arrival: process.arrival,
            burst: process.burst,
            index,
        },
        Ranking::ArrivalPriority => RankKey::ArrivalPriority {
            arrival: process.arrival,
            priority: process.priority,
            index,
        },
    }
}

/// Input positions of `processes`, ordered by `ranking`.
pub fn rank_processes(processes: &[Process], ranking: Ranking) -> Vec<usize> {
    let mut keys: Vec<RankKey> = processes
        .iter()
        .enumerate()
        .map(|(index, process)| compute_rank_key(index, process, ranking))
        .collect();

    keys.sort_unstable();

    keys.into_iter().map(|k| k.index()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: i64, arrival: Ticks, burst: Ticks, priority: i64) -> Process {
        Process::new(id, arrival, burst, 1, priority)
    }

    #[test]
    fn test_arrival_ranking_keeps_input_order_on_ties() {
        let processes = vec![p(1, 3, 1, 0), p(2, 0, 9, 0), p(3, 3, 1, 0), p(4, 0, 1, 0)];
        assert_eq!(rank_processes(&processes, Ranking::Arrival), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_arrival_burst_ranking() {
        let processes = vec![p(1, 0, 8, 0), p(2, 0, 3, 0), p(3, 1, 1, 0), p(4, 0, 3, 0)];
        // arrival first, then burst, then input position
        assert_eq!(
            rank_processes(&processes, Ranking::ArrivalBurst),
            vec![1, 3, 0, 2]
        );
    }

    #[test]
    fn test_arrival_priority_ranking_with_negative_priorities() {
        let processes = vec![p(1, 0, 1, 5), p(2, 0, 1, -2), p(3, 0, 1, 0)];
        assert_eq!(
            rank_processes(&processes, Ranking::ArrivalPriority),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn test_empty() {
        assert!(rank_processes(&[], Ranking::Arrival).is_empty());
    }
}
