use std::fmt;

use super::state::{Priority, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroProcessCount,
    ZeroQuantum,
    ZeroBurst,
    InvertedBurstRange { min: Ticks, max: Ticks },
    InvertedPriorityRange { min: Priority, max: Priority },
    InvalidOverride { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroProcessCount => write!(f, "process count must be at least 1"),
            Self::ZeroQuantum => write!(f, "round robin quantum must be at least 1 tick"),
            Self::ZeroBurst => write!(f, "minimum burst time must be at least 1 tick"),
            Self::InvertedBurstRange { min, max } => {
                write!(f, "burst time range is inverted: min {min} > max {max}")
            }
            Self::InvertedPriorityRange { min, max } => {
                write!(f, "priority range is inverted: min {min} > max {max}")
            }
            Self::InvalidOverride { var, value } => {
                write!(f, "{var}={value:?} is not a valid unsigned integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
