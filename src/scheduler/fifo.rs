use super::{Policy, Scheduler, run_to_completion};
use crate::core::{Process, ScheduleResult};

/// First come, first served: the batch runs in the order it was given.
pub struct FifoScheduler;

impl Scheduler for FifoScheduler {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleResult {
        run_to_completion(self.policy(), processes.to_vec())
    }
}
