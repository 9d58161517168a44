use super::{Policy, Scheduler, run_to_completion};
use crate::core::{Process, ScheduleResult};

/// Non-preemptive static priority. Lower values run first and ties keep
/// their input order.
pub struct PriqScheduler;

impl Scheduler for PriqScheduler {
    fn policy(&self) -> Policy {
        Policy::Priority
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleResult {
        let mut ordered = processes.to_vec();
        ordered.sort_by_key(|p| p.priority());
        run_to_completion(self.policy(), ordered)
    }
}
