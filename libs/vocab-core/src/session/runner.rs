//! Study session state machine.
//!
//! A session presents its queue one card at a time. Each grade is logged,
//! scheduled, and written back to the vocabulary store; the queued copy of
//! the card is left untouched. After the last card the session is complete
//! and the incorrect cards can be retried as a fresh session.

use super::builder::{build_queue, Selection};
use crate::algorithm::{Sm2, SpacedRepetitionAlgorithm};
use crate::clock::Clock;
use crate::error::{DrillError, Result};
use crate::settings::{DrillSettings, LapsePolicy};
use crate::shuffle::Shuffler;
use crate::types::{Card, Quality, ReviewState, StudyMode};
use crate::vocabulary::VocabularyStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum SessionStatus {
    Active { cursor: usize },
    Complete,
}

/// One logged presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub card_id: String,
    pub was_correct: bool,
}

/// What a grade did, returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeOutcome {
    pub card_id: String,
    pub was_correct: bool,
    pub new_state: ReviewState,
    /// False if the store did not know the card.
    pub stored: bool,
    pub status: SessionStatus,
}

/// Counts shown at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    /// Share of correct answers, rounded to a whole percent.
    pub percentage: u32,
}

impl SessionSummary {
    pub fn from_results(results: &[ReviewOutcome]) -> Self {
        let total = results.len();
        let correct = results.iter().filter(|r| r.was_correct).count();
        let percentage = if total == 0 {
            0
        } else {
            (correct as f64 * 100.0 / total as f64).round() as u32
        };
        Self {
            correct,
            incorrect: total - correct,
            total,
            percentage,
        }
    }

    pub fn has_incorrect(&self) -> bool {
        self.incorrect > 0
    }
}

/// Read-only view for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub mode: StudyMode,
    pub queue_len: usize,
    pub current: Option<Card>,
    pub results: Vec<ReviewOutcome>,
}

/// A running practice session.
#[derive(Debug, Clone)]
pub struct Session {
    queue: Vec<Card>,
    status: SessionStatus,
    results: Vec<ReviewOutcome>,
    mode: StudyMode,
    lapse_policy: LapsePolicy,
    scheduler: Sm2,
}

impl Session {
    /// Build a shuffled queue for `selection` and start at its first card.
    pub fn start<S: Shuffler>(
        cards: &[Card],
        selection: &Selection,
        mode: StudyMode,
        settings: &DrillSettings,
        shuffler: &mut S,
    ) -> Result<Self> {
        let queue = build_queue(cards, selection, shuffler)?;
        tracing::info!(
            chapter = selection.chapter,
            cards = queue.len(),
            ?mode,
            "session started"
        );
        Self::from_queue(queue, mode, settings)
    }

    /// Start a session over an already ordered queue.
    pub fn from_queue(queue: Vec<Card>, mode: StudyMode, settings: &DrillSettings) -> Result<Self> {
        if queue.is_empty() {
            return Err(DrillError::EmptyQueue);
        }
        Ok(Self {
            queue,
            status: SessionStatus::Active { cursor: 0 },
            results: Vec::new(),
            mode,
            lapse_policy: settings.lapse_policy,
            scheduler: Sm2::with_initial_ease(settings.initial_ease),
        })
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Complete
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn queue(&self) -> &[Card] {
        &self.queue
    }

    pub fn results(&self) -> &[ReviewOutcome] {
        &self.results
    }

    pub fn current(&self) -> Option<&Card> {
        match self.status {
            SessionStatus::Active { cursor } => self.queue.get(cursor),
            SessionStatus::Complete => None,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_results(&self.results)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            mode: self.mode,
            queue_len: self.queue.len(),
            current: self.current().cloned(),
            results: self.results.clone(),
        }
    }

    /// Grade the current card and advance.
    ///
    /// The raw grade is validated before anything is recorded.
    pub fn submit_grade<V, C>(&mut self, quality: i32, store: &mut V, clock: &C) -> Result<GradeOutcome>
    where
        V: VocabularyStore + ?Sized,
        C: Clock + ?Sized,
    {
        let quality = Quality::new(quality).inspect_err(|_| {
            tracing::warn!(quality, "rejected grade");
        })?;
        let cursor = match self.status {
            SessionStatus::Active { cursor } => cursor,
            SessionStatus::Complete => return Err(DrillError::SessionComplete),
        };
        let card = self.queue[cursor].clone();
        let was_correct = quality.is_pass();

        self.results.push(ReviewOutcome {
            card_id: card.id.clone(),
            was_correct,
        });

        // The store holds the current state; queued copies go stale once a card
        // is requeued or retried.
        let current = store
            .cards()
            .iter()
            .find(|c| c.id == card.id)
            .map_or(&card.review, |c| &c.review);
        let new_state = self.scheduler.schedule(current, quality, clock.now());
        let stored = store.replace_review_state(&card.id, new_state.clone());
        if !stored {
            tracing::warn!(card_id = %card.id, "graded card is not in the vocabulary store");
        }

        if !was_correct && self.lapse_policy == LapsePolicy::Requeue {
            self.queue.push(card.clone());
        }

        self.status = if cursor + 1 >= self.queue.len() {
            let summary = self.summary();
            tracing::info!(
                correct = summary.correct,
                incorrect = summary.incorrect,
                "session complete"
            );
            SessionStatus::Complete
        } else {
            SessionStatus::Active { cursor: cursor + 1 }
        };

        Ok(GradeOutcome {
            card_id: card.id,
            was_correct,
            new_state,
            stored,
            status: self.status,
        })
    }

    /// Restart with only the cards answered incorrectly, reshuffled.
    pub fn retry_incorrect<S: Shuffler>(&mut self, shuffler: &mut S) -> Result<()> {
        if !self.is_complete() {
            return Err(DrillError::SessionInProgress);
        }

        let incorrect: HashSet<&str> = self
            .results
            .iter()
            .filter(|r| !r.was_correct)
            .map(|r| r.card_id.as_str())
            .collect();
        if incorrect.is_empty() {
            return Err(DrillError::NoIncorrectResults);
        }

        let mut seen = HashSet::new();
        let mut queue: Vec<Card> = self
            .queue
            .iter()
            .filter(|c| incorrect.contains(c.id.as_str()) && seen.insert(c.id.as_str()))
            .cloned()
            .collect();
        shuffler.shuffle(&mut queue);

        tracing::info!(cards = queue.len(), "retrying incorrect cards");
        self.queue = queue;
        self.results.clear();
        self.status = SessionStatus::Active { cursor: 0 };
        Ok(())
    }
}

/// Session shared between threads; grades are applied one at a time.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn submit_grade<V, C>(&self, quality: i32, store: &mut V, clock: &C) -> Result<GradeOutcome>
    where
        V: VocabularyStore + ?Sized,
        C: Clock + ?Sized,
    {
        let mut session = self.inner.lock().map_err(|_| DrillError::SessionLockPoisoned)?;
        session.submit_grade(quality, store, clock)
    }

    pub fn retry_incorrect<S: Shuffler>(&self, shuffler: &mut S) -> Result<()> {
        let mut session = self.inner.lock().map_err(|_| DrillError::SessionLockPoisoned)?;
        session.retry_incorrect(shuffler)
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot> {
        let session = self.inner.lock().map_err(|_| DrillError::SessionLockPoisoned)?;
        Ok(session.snapshot())
    }
}
