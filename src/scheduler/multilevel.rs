use std::num::NonZeroU64;

use rand::Rng;

use super::{Policy, Scheduler};
use crate::config::NUM_QUEUES;
use crate::core::{Process, ScheduleResult, Ticks, state::total_burst};

/// One level of a multilevel run.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueReport {
    pub level: usize,
    pub result: ScheduleResult,
    // Total burst of every earlier level
    pub time_offset: Ticks,
    pub adjusted_avg_waiting_time: f64,
}

impl QueueReport {
    pub fn size(&self) -> usize {
        self.result.len()
    }

    pub fn policy(&self) -> Policy {
        self.result.policy
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultilevelResult {
    pub queues: Vec<QueueReport>,
    /// Unweighted mean of the per-level adjusted averages, empty levels
    /// included as zero. This is not a per-process average over the batch.
    pub overall_avg_waiting_time: f64,
}

impl MultilevelResult {
    pub fn sizes(&self) -> Vec<usize> {
        self.queues.iter().map(QueueReport::size).collect()
    }
}

/// Multilevel queue: processes are scattered uniformly at random over
/// `NUM_QUEUES` levels, each level runs its own policy, and later levels are
/// charged for the total burst of the levels ahead of them.
pub struct MultilevelScheduler {
    levels: [Policy; NUM_QUEUES],
}

impl MultilevelScheduler {
    /// Level 0 runs round robin, level 1 FCFS and level 2 SJF.
    pub fn new(quantum: NonZeroU64) -> Self {
        Self {
            levels: [Policy::RoundRobin { quantum }, Policy::Fcfs, Policy::Sjf],
        }
    }

    pub fn levels(&self) -> &[Policy; NUM_QUEUES] {
        &self.levels
    }

    /// Assigns each process to a level with an independent uniform draw.
    /// Input order is kept within each level.
    pub fn partition<R: Rng>(
        &self,
        processes: &[Process],
        rng: &mut R,
    ) -> [Vec<Process>; NUM_QUEUES] {
        let mut queues: [Vec<Process>; NUM_QUEUES] = Default::default();
        for &process in processes {
            queues[rng.random_range(0..NUM_QUEUES)].push(process);
        }
        queues
    }

    pub fn schedule<R: Rng>(&self, processes: &[Process], rng: &mut R) -> MultilevelResult {
        let queues = self.partition(processes, rng);
        self.schedule_partitioned(&queues)
    }

    /// Runs an already partitioned batch.
    pub fn schedule_partitioned(&self, queues: &[Vec<Process>; NUM_QUEUES]) -> MultilevelResult {
        let mut reports = Vec::with_capacity(NUM_QUEUES);
        let mut time_offset: Ticks = 0;

        for (level, (policy, queue)) in self.levels.iter().zip(queues).enumerate() {
            let result = policy.schedule(queue);
            // An empty level contributes zero and absorbs no offset
            let adjusted_avg_waiting_time = if result.is_empty() {
                0.0
            } else {
                result.avg_waiting_time + time_offset as f64
            };

            log::debug!(
                "level {level} ({policy}): {} processes, offset {time_offset}, avg wait {adjusted_avg_waiting_time:.2}",
                queue.len()
            );

            reports.push(QueueReport {
                level,
                result,
                time_offset,
                adjusted_avg_waiting_time,
            });
            time_offset += total_burst(queue);
        }

        let overall_avg_waiting_time = reports
            .iter()
            .map(|r| r.adjusted_avg_waiting_time)
            .sum::<f64>()
            / NUM_QUEUES as f64;

        MultilevelResult {
            queues: reports,
            overall_avg_waiting_time,
        }
    }
}
