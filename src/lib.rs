pub mod config;
pub mod core;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use config::SimConfig;
pub use crate::core::{ConfigError, Process, ScheduleResult};
pub use scheduler::{MultilevelScheduler, Policy, Scheduler};
pub use sim::Sim;

#[cfg(test)]
mod tests;
