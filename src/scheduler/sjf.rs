use super::{Policy, Scheduler, run_to_completion};
use crate::core::{Process, ScheduleResult};

/// Non-preemptive shortest job first.
pub struct SjfScheduler;

impl Scheduler for SjfScheduler {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleResult {
        let mut ordered = processes.to_vec();
        // Stable: equal bursts keep their input order
        ordered.sort_by_key(|p| p.burst_time());
        run_to_completion(self.policy(), ordered)
    }
}
