use rand::Rng;

use crate::config::SimConfig;
use crate::core::{Pid, Process};

/// Draws a batch with ids `0..count`, bursts and priorities uniform over the
/// configured inclusive ranges.
pub fn generate_processes<R: Rng>(count: usize, config: &SimConfig, rng: &mut R) -> Vec<Process> {
    let mut processes = Vec::with_capacity(count);

    for id in 0..count {
        let burst_time = rng.random_range(config.burst_range());
        let priority = rng.random_range(config.priority_range());
        processes.push(Process::new(id as Pid, burst_time, priority));
    }

    processes
}
