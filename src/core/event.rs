use crate::core::{Pid, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    // Process got the CPU at `at` and held it for `ran` ticks
    Dispatched {
        pid: Pid,
        at: Ticks,
        ran: Ticks,
    },
    // Quantum expired with work left over
    Preempted {
        pid: Pid,
        at: Ticks,
        remaining: Ticks,
    },
    Completed {
        pid: Pid,
        at: Ticks,
    },
}
