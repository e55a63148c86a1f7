//! Shift and drop-zone enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sub-partitions of a job's assigned employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// Day shift.
    Day,
    /// Night shift.
    Night,
}

impl Shift {
    /// The opposite shift.
    pub fn other(&self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}

/// A column of the assignment board: the unassigned pool or one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Employees not assigned to the job.
    Pool,
    /// Day shift.
    #[serde(alias = "dayShift")]
    Day,
    /// Night shift.
    #[serde(alias = "nightShift")]
    Night,
}

impl Zone {
    /// The shift this zone stands for, `None` for the pool.
    pub fn shift(&self) -> Option<Shift> {
        match self {
            Self::Pool => None,
            Self::Day => Some(Shift::Day),
            Self::Night => Some(Shift::Night),
        }
    }
}

impl From<Shift> for Zone {
    fn from(shift: Shift) -> Self {
        match shift {
            Shift::Day => Self::Day,
            Shift::Night => Self::Night,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool => write!(f, "pool"),
            Self::Day => write!(f, "day"),
            Self::Night => write!(f, "night"),
        }
    }
}
