use average::{Estimate, Mean};

use super::event::SchedEvent;
use crate::scheduler::Policy;

pub type Pid = u64;
pub type Ticks = u64;
// Lower value runs first
pub type Priority = u32;

/// A process in a batch. Immutable once built.
///
/// `burst_time` must be positive: round robin never dispatches a zero-burst
/// process, so it would never complete. [`Process::new`] checks this in debug builds, and
/// the fields are private so every process goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Process {
    id: Pid,
    burst_time: Ticks,
    priority: Priority,
}

impl Process {
    pub fn new(id: Pid, burst_time: Ticks, priority: Priority) -> Self {
        debug_assert!(burst_time > 0, "Process {id} must have a positive burst");
        Self {
            id,
            burst_time,
            priority,
        }
    }

    pub fn id(&self) -> Pid {
        self.id
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

/// Sum of the burst times of a batch.
pub fn total_burst(processes: &[Process]) -> Ticks {
    processes.iter().map(|p| p.burst_time()).sum()
}

/// One process' outcome within a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledProcess {
    pub process: Process,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub completion_time: Ticks,
}

impl ScheduledProcess {
    pub fn new(process: Process, waiting_time: Ticks) -> Self {
        let turnaround_time = waiting_time + process.burst_time();
        Self {
            process,
            waiting_time,
            turnaround_time,
            // No arrival times, so a process completes exactly at its turnaround
            completion_time: turnaround_time,
        }
    }
}

/// Outcome of running one policy over a batch.
///
/// `entries` is in the order the policy reports processes: the execution order
/// for the non-preemptive policies and the input order for round robin.
/// An empty batch yields no entries and averages of `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    pub policy: Policy,
    pub entries: Vec<ScheduledProcess>,
    pub events: Vec<SchedEvent>,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

impl ScheduleResult {
    pub fn new(policy: Policy, entries: Vec<ScheduledProcess>, events: Vec<SchedEvent>) -> Self {
        // An empty batch reports 0.0 rather than an undefined mean
        let (avg_waiting_time, avg_turnaround_time) = if entries.is_empty() {
            (0.0, 0.0)
        } else {
            (
                avg(entries.iter().map(|e| e.waiting_time as f64)),
                avg(entries.iter().map(|e| e.turnaround_time as f64)),
            )
        };
        Self {
            policy,
            entries,
            events,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pids(&self) -> Vec<Pid> {
        self.entries.iter().map(|e| e.process.id()).collect()
    }

    pub fn waiting_times(&self) -> Vec<Ticks> {
        self.entries.iter().map(|e| e.waiting_time).collect()
    }

    pub fn turnaround_times(&self) -> Vec<Ticks> {
        self.entries.iter().map(|e| e.turnaround_time).collect()
    }

    /// Time at which the last process completes.
    pub fn makespan(&self) -> Ticks {
        self.entries
            .iter()
            .map(|e| e.completion_time)
            .max()
            .unwrap_or(0)
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}
