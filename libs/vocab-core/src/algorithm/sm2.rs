//! SM-2 spaced repetition algorithm.
//!
//! Grades run from 0 to 5; 3 and above is a pass. Passes grow the interval
//! 1 day, 6 days, then by the ease factor. A lapse resets the streak and
//! schedules the card for the next day. The ease factor is adjusted after
//! every grade and never drops below the configured minimum.

use super::SpacedRepetitionAlgorithm;
use crate::error::Result;
use crate::types::{Quality, ReviewState, INITIAL_EASE, MINIMUM_EASE};
use chrono::{DateTime, Duration, Utc};

/// SM-2 algorithm with configurable parameters.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub first_interval: u32,
    pub second_interval: u32,
    pub maximum_interval: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: INITIAL_EASE,
            minimum_ease: MINIMUM_EASE,
            first_interval: 1,
            second_interval: 6,
            maximum_interval: 36_500,
        }
    }
}

impl Sm2 {
    pub fn with_initial_ease(initial_ease: f64) -> Self {
        Self {
            initial_ease,
            ..Default::default()
        }
    }

    fn next_interval(&self, state: &ReviewState) -> u32 {
        let interval = match state.repetition_count {
            0 => self.first_interval,
            1 => self.second_interval,
            _ => (state.interval_days as f64 * state.ease_factor)
                .round()
                .min(self.maximum_interval as f64) as u32,
        };
        interval.min(self.maximum_interval)
    }

    fn next_ease(&self, ease: f64, quality: Quality) -> f64 {
        let miss = 5.0 - quality.value() as f64;
        (ease + 0.1 - miss * (0.08 + miss * 0.02)).max(self.minimum_ease)
    }
}

impl SpacedRepetitionAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_state(&self, now: DateTime<Utc>) -> ReviewState {
        ReviewState {
            ease_factor: self.initial_ease,
            interval_days: 0,
            repetition_count: 0,
            next_due_at: now,
        }
    }

    fn schedule(&self, state: &ReviewState, quality: Quality, now: DateTime<Utc>) -> ReviewState {
        let (interval_days, repetition_count) = if quality.is_pass() {
            (self.next_interval(state), state.repetition_count + 1)
        } else {
            (self.first_interval, 0)
        };

        let ease_factor = self.next_ease(state.ease_factor, quality);
        let next_due_at = now
            .checked_add_signed(Duration::days(interval_days as i64))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        tracing::debug!(
            quality = quality.value(),
            interval_days,
            repetition_count,
            ease_factor,
            "scheduled review"
        );

        ReviewState {
            ease_factor,
            interval_days,
            repetition_count,
            next_due_at,
        }
    }
}

/// Schedule with default SM-2 parameters, validating the raw grade.
pub fn next_state(current: &ReviewState, quality: i32, now: DateTime<Utc>) -> Result<ReviewState> {
    let quality = Quality::new(quality)?;
    Ok(Sm2::default().schedule(current, quality, now))
}
