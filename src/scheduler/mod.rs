pub mod fifo;
pub mod multilevel;
pub mod priq;
pub mod round_robin;
pub mod sjf;

use std::fmt;
use std::num::NonZeroU64;

use crate::core::{ConfigError, Process, SchedEvent, ScheduleResult, ScheduledProcess, Ticks};
pub use fifo::FifoScheduler;
pub use multilevel::{MultilevelResult, MultilevelScheduler, QueueReport};
pub use priq::PriqScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

/// An ordering strategy over a batch of processes.
///
/// Implementations never mutate the batch; policies that reorder work on a copy.
pub trait Scheduler {
    fn policy(&self) -> Policy;

    fn schedule(&self, processes: &[Process]) -> ScheduleResult;
}

/// The closed set of single-queue policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin { quantum: NonZeroU64 },
}

impl Policy {
    pub fn round_robin(quantum: Ticks) -> Result<Self, ConfigError> {
        let quantum = NonZeroU64::new(quantum).ok_or(ConfigError::ZeroQuantum)?;
        Ok(Self::RoundRobin { quantum })
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }
}

impl Scheduler for Policy {
    fn policy(&self) -> Policy {
        *self
    }

    fn schedule(&self, processes: &[Process]) -> ScheduleResult {
        match *self {
            Self::Fcfs => FifoScheduler.schedule(processes),
            Self::Sjf => SjfScheduler.schedule(processes),
            Self::Priority => PriqScheduler.schedule(processes),
            Self::RoundRobin { quantum } => RoundRobinScheduler::new(quantum).schedule(processes),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "First Come First Served (FCFS)"),
            Self::Sjf => write!(f, "Shortest Job First (SJF)"),
            Self::Priority => write!(f, "Priority"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (Quantum = {quantum})"),
        }
    }
}

// Non-preemptive execution: each process waits for the bursts of everything
// ahead of it in `ordered`.
fn run_to_completion(policy: Policy, ordered: Vec<Process>) -> ScheduleResult {
    let mut entries = Vec::with_capacity(ordered.len());
    let mut events = Vec::with_capacity(ordered.len() * 2);
    let mut now: Ticks = 0;

    for process in ordered {
        events.push(SchedEvent::Dispatched {
            pid: process.id(),
            at: now,
            ran: process.burst_time(),
        });
        entries.push(ScheduledProcess::new(process, now));
        now += process.burst_time();
        events.push(SchedEvent::Completed {
            pid: process.id(),
            at: now,
        });
    }

    log::debug!("{policy}: {} processes done at t={now}", entries.len());
    ScheduleResult::new(policy, entries, events)
}
