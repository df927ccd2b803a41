//! Scheduling and session engine for vocabulary drills.
//!
//! Provides:
//! - SM-2 review scheduling with derived mastery levels
//! - Due-card selection
//! - Deterministic chapter ordering and fixed-size practice windows
//! - Practice set selection and shuffled session queues
//! - The study session state machine with retry of incorrect cards
//! - Answer matching for typing and voice modes

pub mod algorithm;
pub mod clock;
pub mod due;
pub mod error;
pub mod matching;
pub mod partition;
pub mod session;
pub mod settings;
pub mod shuffle;
pub mod types;
pub mod vocabulary;

pub use algorithm::{next_state, Sm2, SpacedRepetitionAlgorithm};
pub use clock::{Clock, FixedClock, SystemClock};
pub use due::{due_cards, due_count};
pub use error::{DrillError, Result};
pub use matching::{compare_answers, is_match, normalize_answer, MatchResult};
pub use partition::{build_windows, chapter_cards, chapters, id_number, ChapterWindow};
pub use session::{
    build_queue, select_cards, GradeOutcome, ReviewOutcome, Scope, Selection, Session,
    SessionHandle, SessionSnapshot, SessionStatus, SessionSummary,
};
pub use settings::{DrillSettings, LapsePolicy};
pub use shuffle::{RandShuffler, Shuffler};
pub use types::{
    Card, GrammaticalGender, MasteryLevel, PartOfSpeech, Quality, ReviewState, StudyMode,
};
pub use vocabulary::{search, VocabularyStats, VocabularyStore};
