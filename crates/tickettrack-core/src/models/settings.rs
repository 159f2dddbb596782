//! Polling settings

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Issue field the tracked user is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrackingField {
    /// Issues the user filed
    #[default]
    Reporter,
    /// Issues assigned to the user
    Assignee,
}

impl TrackingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingField::Reporter => "reporter",
            TrackingField::Assignee => "assignee",
        }
    }
}

impl fmt::Display for TrackingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "reporter" => Ok(TrackingField::Reporter),
            "assignee" => Ok(TrackingField::Assignee),
            other => Err(Error::Validation(format!(
                "Invalid tracking field '{}'. Must be one of: reporter, assignee",
                other
            ))),
        }
    }
}

/// What to search for and how often
#[derive(Debug, Clone, PartialEq)]
pub struct PollSettings {
    pub user: String,
    pub project: String,
    pub field: TrackingField,
    /// Time between searches. Also the maximum age of an issue worth reporting.
    pub interval: Duration,
    pub max_results: u32,
}

impl PollSettings {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(4);
    pub const DEFAULT_MAX_RESULTS: u32 = 20;

    pub fn new(user: String, project: String) -> Self {
        Self {
            user,
            project,
            field: TrackingField::default(),
            interval: Self::DEFAULT_INTERVAL,
            max_results: Self::DEFAULT_MAX_RESULTS,
        }
    }

    /// Validate the polling settings
    pub fn validate(&self) -> Result<()> {
        if self.project.trim().is_empty() {
            return Err(Error::Validation("Please specify a project".to_string()));
        }

        if self.user.trim().is_empty() {
            return Err(Error::Validation("Please specify a user".to_string()));
        }

        if self.interval.is_zero() {
            return Err(Error::Validation(
                "Polling interval must be greater than 0".to_string(),
            ));
        }

        if self.max_results == 0 {
            return Err(Error::Validation(
                "Max results must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
