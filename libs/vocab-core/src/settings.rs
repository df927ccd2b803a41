//! Drill configuration.

use crate::error::{DrillError, Result};
use crate::types::{INITIAL_EASE, MINIMUM_EASE};
use serde::{Deserialize, Serialize};

/// What happens to a lapsed card while a session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LapsePolicy {
    /// Lapses are collected for an explicit retry after the session completes.
    DeferToRetry,
    /// A lapsed card is appended to the running queue; the session only ends
    /// once every card has passed.
    Requeue,
}

impl Default for LapsePolicy {
    fn default() -> Self {
        Self::DeferToRetry
    }
}

/// Global drill settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillSettings {
    /// Window size for broad chapter review.
    pub broad_review_window: usize,
    /// Window size for targeted practice.
    pub targeted_window: usize,
    /// Ease factor given to new cards.
    pub initial_ease: f64,
    pub lapse_policy: LapsePolicy,
}

impl Default for DrillSettings {
    fn default() -> Self {
        Self {
            broad_review_window: 30,
            targeted_window: 10,
            initial_ease: INITIAL_EASE,
            lapse_policy: LapsePolicy::default(),
        }
    }
}

impl DrillSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.broad_review_window == 0 || self.targeted_window == 0 {
            return Err(DrillError::InvalidSettings(
                "window sizes must be positive".to_string(),
            ));
        }
        if self.initial_ease.is_nan() || self.initial_ease < MINIMUM_EASE {
            return Err(DrillError::InvalidSettings(format!(
                "initial ease {} is below {}",
                self.initial_ease, MINIMUM_EASE
            )));
        }
        Ok(())
    }
}
