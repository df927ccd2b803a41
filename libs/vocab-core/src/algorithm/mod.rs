//! Spaced repetition scheduling.

pub mod sm2;

use crate::types::{Quality, ReviewState};
use chrono::{DateTime, Utc};

pub use sm2::{next_state, Sm2};

/// Trait for spaced repetition algorithms.
///
/// Implementations compute a replacement state; they never mutate the card.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the review state that follows a graded presentation.
    fn schedule(&self, state: &ReviewState, quality: Quality, now: DateTime<Utc>) -> ReviewState;

    /// Initial state for a new card, due at `now`.
    fn initial_state(&self, now: DateTime<Utc>) -> ReviewState;
}
