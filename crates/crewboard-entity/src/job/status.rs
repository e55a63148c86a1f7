//! Job status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    /// Planned, not started.
    #[default]
    Pending,
    /// Crew is on site. Older records call this `active`.
    #[serde(alias = "active")]
    InProgress,
    /// Work finished.
    Completed,
    /// Behind schedule.
    Delayed,
    /// Called off.
    Cancelled,
}

impl JobStatus {
    /// Check if the job is finished for scheduling purposes.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Return the status as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Delayed => "delayed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = crewboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" | "active" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "delayed" => Ok(Self::Delayed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(crewboard_core::AppError::validation(format!(
                "Invalid job status: '{s}'. Expected one of: pending, in-progress, completed, delayed, cancelled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_active_alias() {
        let status: JobStatus = serde_json::from_str("\"active\"").expect("alias");
        assert_eq!(status, JobStatus::InProgress);
        assert_eq!("active".parse::<JobStatus>().unwrap(), JobStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&JobStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Cancelled.is_terminal());
        assert!(!JobStatus::Delayed.is_terminal());
        assert!(!JobStatus::Pending.is_terminal());
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("paused".parse::<JobStatus>().is_err());
    }
}
