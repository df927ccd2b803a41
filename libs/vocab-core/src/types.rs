//! Core types for the vocabulary drill engine.

use crate::error::{DrillError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ease factor assigned to a card that has never been graded.
pub const INITIAL_EASE: f64 = 2.5;

/// Lowest ease factor a card can reach.
pub const MINIMUM_EASE: f64 = 1.3;

/// Card learning stage, derived from the repetition streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryLevel {
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl MasteryLevel {
    /// All levels in ascending order.
    pub const ALL: [MasteryLevel; 4] = [
        MasteryLevel::New,
        MasteryLevel::Learning,
        MasteryLevel::Reviewing,
        MasteryLevel::Mastered,
    ];

    /// Classify a repetition streak.
    pub fn from_repetitions(repetition_count: u32) -> Self {
        match repetition_count {
            0 => Self::New,
            1..=2 => Self::Learning,
            3..=4 => Self::Reviewing,
            _ => Self::Mastered,
        }
    }

    /// New and Learning cards count as "hard".
    pub fn is_hard(self) -> bool {
        matches!(self, Self::New | Self::Learning)
    }

    pub fn as_index(self) -> usize {
        self as usize
    }
}

/// Grade for one card presentation, 0 (blackout) to 5 (perfect).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Quality(u8);

impl Quality {
    /// Lowest grade that counts as a pass.
    pub const PASS_THRESHOLD: u8 = 3;

    /// Grade sent by a "known" card flip.
    pub const KNOWN: Quality = Quality(4);

    /// Grade sent by an "unknown" card flip.
    pub const UNKNOWN: Quality = Quality(1);

    /// Validate a raw grade.
    pub fn new(value: i32) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if v <= 5 => Ok(Self(v)),
            _ => Err(DrillError::InvalidGrade { value }),
        }
    }

    /// Map a typed or spoken answer evaluation to a grade.
    pub fn from_answer(is_correct: bool) -> Self {
        if is_correct { Self::KNOWN } else { Self::UNKNOWN }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_pass(self) -> bool {
        self.0 >= Self::PASS_THRESHOLD
    }
}

impl TryFrom<i32> for Quality {
    type Error = DrillError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Quality> for i32 {
    fn from(quality: Quality) -> i32 {
        quality.0 as i32
    }
}

/// Review scheduling state of a card.
///
/// The mastery level is not stored; see [`ReviewState::mastery_level`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewState {
    pub ease_factor: f64,
    pub interval_days: u32,
    pub repetition_count: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub next_due_at: DateTime<Utc>,
}

impl ReviewState {
    /// Fresh state for a card that becomes due at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            next_due_at: now,
            ..Default::default()
        }
    }

    pub fn mastery_level(&self) -> MasteryLevel {
        MasteryLevel::from_repetitions(self.repetition_count)
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_due_at <= now
    }
}

impl Default for ReviewState {
    fn default() -> Self {
        Self {
            ease_factor: INITIAL_EASE,
            interval_days: 0,
            repetition_count: 0,
            next_due_at: DateTime::<Utc>::default(),
        }
    }
}

/// Word class of a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Pronoun,
    Other,
}

impl Default for PartOfSpeech {
    fn default() -> Self {
        Self::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrammaticalGender {
    #[serde(rename = "m")]
    Masculine,
    #[serde(rename = "f")]
    Feminine,
    #[serde(rename = "n")]
    Neuter,
    #[serde(rename = "m/f")]
    MasculineOrFeminine,
}

/// Vocabulary card: identity fields plus its review state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub front: String,
    pub back: String,
    pub part_of_speech: PartOfSpeech,
    pub chapter: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<GrammaticalGender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammar_note: Option<String>,
    #[serde(default)]
    pub review: ReviewState,
}

impl Card {
    /// Create a card with a fresh review state.
    pub fn new(
        id: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
        part_of_speech: PartOfSpeech,
        chapter: u32,
    ) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
            part_of_speech,
            chapter,
            gender: None,
            grammar_note: None,
            review: ReviewState::default(),
        }
    }

    pub fn mastery_level(&self) -> MasteryLevel {
        self.review.mastery_level()
    }
}

/// How the user answers during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    Flashcard,
    Typing,
    Voice,
}

impl Default for StudyMode {
    fn default() -> Self {
        Self::Flashcard
    }
}
