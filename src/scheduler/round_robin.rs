use std::num::NonZeroU64;

use super::{Policy, Scheduler};
use crate::core::{Process, SchedEvent, ScheduleResult, ScheduledProcess, Ticks};

/// Round robin with a fixed quantum.
///
/// The ready queue is modelled as repeated full scans over the batch in input
/// order: a process preempted mid-scan is next visited on the following pass,
/// after every other unfinished process has had its turn. That scan order is
/// the contract. With every process present at t=0 it produces the same
/// schedule as a FIFO ready queue that requeues a preempted process at the
/// back.
///
/// Entries are reported in input order.
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn policy(&self) -> Policy {
        Policy::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleResult {
        let quantum = self.quantum.get();
        let mut remaining: Vec<Ticks> = processes.iter().map(|p| p.burst_time()).collect();
        let mut waiting: Vec<Ticks> = vec![0; processes.len()];
        let mut events = Vec::new();
        let mut now: Ticks = 0;
        let mut passes = 0u64;

        loop {
            let mut done = true;

            for (i, process) in processes.iter().enumerate() {
                if remaining[i] == 0 {
                    continue;
                }
                done = false;

                let ran = remaining[i].min(quantum);
                events.push(SchedEvent::Dispatched {
                    pid: process.id(),
                    at: now,
                    ran,
                });
                now += ran;
                remaining[i] -= ran;

                if remaining[i] > 0 {
                    events.push(SchedEvent::Preempted {
                        pid: process.id(),
                        at: now,
                        remaining: remaining[i],
                    });
                } else {
                    waiting[i] = now - process.burst_time();
                    events.push(SchedEvent::Completed {
                        pid: process.id(),
                        at: now,
                    });
                }
            }

            if done {
                break;
            }
            passes += 1;
        }

        log::debug!(
            "round robin q={quantum}: {} processes done at t={now} after {passes} passes",
            processes.len()
        );

        let entries = processes
            .iter()
            .zip(waiting)
            .map(|(&process, waiting_time)| ScheduledProcess::new(process, waiting_time))
            .collect();
        ScheduleResult::new(self.policy(), entries, events)
    }
}
