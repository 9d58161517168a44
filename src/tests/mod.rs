use std::num::NonZeroU64;

use crate::core::{Pid, Priority, Process, Ticks};

mod round_robin;
mod sim;

fn batch(rows: &[(Ticks, Priority)]) -> Vec<Process> {
    rows.iter()
        .enumerate()
        .map(|(id, &(burst, priority))| Process::new(id as Pid, burst, priority))
        .collect()
}

fn bursts(bursts: &[Ticks]) -> Vec<Process> {
    batch(&bursts.iter().map(|&b| (b, 1)).collect::<Vec<_>>())
}

fn quantum(q: Ticks) -> NonZeroU64 {
    NonZeroU64::new(q).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
