//! Vocabulary collection access and overview figures.

use crate::due::due_count;
use crate::types::{Card, MasteryLevel, ReviewState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authoritative card collection the session writes review states back to.
pub trait VocabularyStore {
    fn cards(&self) -> &[Card];

    /// Replace the review state of one card. Returns false if the ID is unknown.
    fn replace_review_state(&mut self, card_id: &str, state: ReviewState) -> bool;
}

impl VocabularyStore for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }

    fn replace_review_state(&mut self, card_id: &str, state: ReviewState) -> bool {
        match self.iter_mut().find(|c| c.id == card_id) {
            Some(card) => {
                card.review = state;
                true
            }
            None => false,
        }
    }
}

/// Dashboard figures for a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub total: usize,
    pub due: usize,
    /// Card count per mastery level, indexed by [`MasteryLevel::as_index`].
    pub by_level: [usize; 4],
}

impl VocabularyStats {
    pub fn compute(cards: &[Card], now: DateTime<Utc>) -> Self {
        let mut by_level = [0; 4];
        for card in cards {
            by_level[card.mastery_level().as_index()] += 1;
        }
        Self {
            total: cards.len(),
            due: due_count(cards, now),
            by_level,
        }
    }

    pub fn count(&self, level: MasteryLevel) -> usize {
        self.by_level[level.as_index()]
    }

    pub fn mastered(&self) -> usize {
        self.count(MasteryLevel::Mastered)
    }
}

/// Cards whose front or back contains `term`, ignoring case.
pub fn search<'a>(cards: &'a [Card], term: &str) -> Vec<&'a Card> {
    let term = term.trim().to_lowercase();
    cards
        .iter()
        .filter(|c| c.front.to_lowercase().contains(&term) || c.back.to_lowercase().contains(&term))
        .collect()
}
