pub mod error;
pub mod event;
pub mod observer;
pub mod state;

pub use error::ConfigError;
pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{Pid, Priority, Process, ScheduleResult, ScheduledProcess, Ticks, total_burst};
