//! Factory functions for vocabulary test data.

use vocab_core::{Card, GrammaticalGender, PartOfSpeech, ReviewState};

use super::NOW_MS;

/// `count` cards for `chapter` with IDs `c{chapter}-001`, `c{chapter}-002`, ...
pub fn chapter_cards(chapter: u32, count: usize) -> Vec<Card> {
    (1..=count)
        .map(|i| {
            let id = format!("c{chapter}-{i:03}");
            let mut card = Card::new(
                id.clone(),
                format!("latin {chapter}.{i}"),
                format!("dutch {chapter}.{i}"),
                PartOfSpeech::Noun,
                chapter,
            );
            card.review = fresh_state();
            card
        })
        .collect()
}

/// Several chapters concatenated in the given order.
pub fn vocabulary(chapters: &[(u32, usize)]) -> Vec<Card> {
    chapters
        .iter()
        .flat_map(|&(chapter, count)| chapter_cards(chapter, count))
        .collect()
}

/// A review state due at the fixture clock's time.
pub fn fresh_state() -> ReviewState {
    let now = chrono::DateTime::from_timestamp_millis(NOW_MS).unwrap();
    ReviewState::new(now)
}

/// A noun with gender and a grammar note, as stored by the vocabulary app.
pub fn noun(id: &str, front: &str, back: &str, chapter: u32) -> Card {
    let mut card = Card::new(id, front, back, PartOfSpeech::Noun, chapter);
    card.gender = Some(GrammaticalGender::Feminine);
    card.grammar_note = Some("1st declension".to_string());
    card.review = fresh_state();
    card
}

pub fn ids(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.id.clone()).collect()
}
