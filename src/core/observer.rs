use rustc_hash::FxHashMap;

use super::event::SchedEvent;
use super::state::{Pid, ScheduleResult, Ticks};

/// Debug-time invariant checks over every schedule the session produces.
#[derive(Debug, Default)]
pub struct Observer {
    observed: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { observed: 0 }
    }

    pub fn observed(&self) -> u64 {
        self.observed
    }

    pub fn observe(&mut self, result: &ScheduleResult) {
        self.observed += 1;

        // pid -> completion instant as reported by the timeline
        let mut completed_at: FxHashMap<Pid, Ticks> = FxHashMap::default();
        for event in &result.events {
            if let SchedEvent::Completed { pid, at } = *event {
                let previous = completed_at.insert(pid, at);
                debug_assert!(previous.is_none(), "Process {pid} completed twice");
            }
        }
        debug_assert_eq!(
            completed_at.len(),
            result.entries.len(),
            "Every scheduled process must complete exactly once"
        );

        for entry in &result.entries {
            let pid = entry.process.id();
            debug_assert_eq!(
                entry.turnaround_time,
                entry.waiting_time + entry.process.burst_time(),
                "Process {pid} turnaround must be waiting + burst"
            );
            debug_assert_eq!(
                completed_at.get(&pid).copied(),
                Some(entry.completion_time),
                "Process {pid} completion disagrees with its timeline"
            );
        }

        if !result.policy.is_preemptive() {
            let mut expected_wait = 0;
            for entry in &result.entries {
                debug_assert_eq!(
                    entry.waiting_time, expected_wait,
                    "Process {} must wait for the bursts of its predecessors",
                    entry.process.id()
                );
                expected_wait += entry.process.burst_time();
            }
        }

        // The CPU never idles, so the last completion is the total work
        let total: u64 = result.entries.iter().map(|e| e.process.burst_time()).sum();
        debug_assert_eq!(
            result.makespan(),
            total,
            "{} schedule left the CPU idle",
            result.policy
        );
    }
}
