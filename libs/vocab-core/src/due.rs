//! Due-card selection.

use crate::types::Card;
use chrono::{DateTime, Utc};

/// Cards due at `now`, longest overdue first.
///
/// Cards with equal due timestamps keep their input order.
pub fn due_cards(cards: &[Card], now: DateTime<Utc>) -> Vec<&Card> {
    let mut due: Vec<&Card> = cards.iter().filter(|c| c.review.is_due(now)).collect();
    due.sort_by_key(|c| c.review.next_due_at);
    due
}

pub fn due_count(cards: &[Card], now: DateTime<Utc>) -> usize {
    cards.iter().filter(|c| c.review.is_due(now)).count()
}
