//! Simulation parameters.
//!
//! Defaults come from the constants below. [`SimConfig::from_env`] lets a
//! run override the batch size, quantum and seed without recompiling.

use std::env;
use std::num::NonZeroU64;
use std::ops::RangeInclusive;

use crate::core::{ConfigError, Priority, Ticks};

pub const DEFAULT_QUANTUM: Ticks = 4;
pub const DEFAULT_PROCESS_COUNT: usize = 10;
pub const MIN_BURST_TIME: Ticks = 1;
pub const MAX_BURST_TIME: Ticks = 20;
pub const MIN_PRIORITY: Priority = 1;
pub const MAX_PRIORITY: Priority = 3;
pub const NUM_QUEUES: usize = 3;

pub const ENV_PROCESSES: &str = "SCHED_PROCESSES";
pub const ENV_QUANTUM: &str = "SCHED_QUANTUM";
pub const ENV_SEED: &str = "SCHED_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    process_count: usize,
    quantum: NonZeroU64,
    burst_range: RangeInclusive<Ticks>,
    priority_range: RangeInclusive<Priority>,
    // None draws a fresh seed from the OS
    seed: Option<u64>,
}

impl SimConfig {
    pub fn new(
        process_count: usize,
        quantum: Ticks,
        burst_range: RangeInclusive<Ticks>,
        priority_range: RangeInclusive<Priority>,
    ) -> Result<Self, ConfigError> {
        if process_count == 0 {
            return Err(ConfigError::ZeroProcessCount);
        }
        let quantum = NonZeroU64::new(quantum).ok_or(ConfigError::ZeroQuantum)?;
        let (min, max) = (*burst_range.start(), *burst_range.end());
        if min > max {
            return Err(ConfigError::InvertedBurstRange { min, max });
        }
        if min == 0 {
            return Err(ConfigError::ZeroBurst);
        }
        let (min, max) = (*priority_range.start(), *priority_range.end());
        if min > max {
            return Err(ConfigError::InvertedPriorityRange { min, max });
        }

        Ok(Self {
            process_count,
            quantum,
            burst_range,
            priority_range,
            seed: None,
        })
    }

    /// Defaults overridden by `SCHED_PROCESSES`, `SCHED_QUANTUM` and
    /// `SCHED_SEED` when they are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let process_count = match parse_override(&lookup, ENV_PROCESSES)? {
            Some(count) => usize::try_from(count).map_err(|_| ConfigError::InvalidOverride {
                var: ENV_PROCESSES,
                value: count.to_string(),
            })?,
            None => DEFAULT_PROCESS_COUNT,
        };
        let quantum = parse_override(&lookup, ENV_QUANTUM)?.unwrap_or(DEFAULT_QUANTUM);
        let seed = parse_override(&lookup, ENV_SEED)?;

        let config = Self::new(
            process_count,
            quantum,
            MIN_BURST_TIME..=MAX_BURST_TIME,
            MIN_PRIORITY..=MAX_PRIORITY,
        )?;
        Ok(config.with_seed(seed))
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn process_count(&self) -> usize {
        self.process_count
    }

    pub fn quantum(&self) -> NonZeroU64 {
        self.quantum
    }

    pub fn burst_range(&self) -> RangeInclusive<Ticks> {
        self.burst_range.clone()
    }

    pub fn priority_range(&self) -> RangeInclusive<Priority> {
        self.priority_range.clone()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            process_count: DEFAULT_PROCESS_COUNT,
            quantum: NonZeroU64::new(DEFAULT_QUANTUM).unwrap_or(NonZeroU64::MIN),
            burst_range: MIN_BURST_TIME..=MAX_BURST_TIME,
            priority_range: MIN_PRIORITY..=MAX_PRIORITY,
            seed: None,
        }
    }
}

fn parse_override(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u64>, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<u64>();
    parsed
        .map(Some)
        .map_err(|_| ConfigError::InvalidOverride { var, value })
}
