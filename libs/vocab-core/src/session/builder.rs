//! Practice set selection.
//!
//! Selection is pure: the ordered card list depends only on the collection
//! and the criteria. Randomness enters afterwards through a [`Shuffler`].

use crate::error::{DrillError, Result};
use crate::partition::{chapter_cards, partition};
use crate::settings::DrillSettings;
use crate::shuffle::Shuffler;
use crate::types::Card;
use serde::{Deserialize, Serialize};

/// Which part of a chapter to study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Scope {
    WholeChapter,
    /// The `index`-th window of `size` cards.
    Window { size: usize, index: usize },
}

/// Criteria for carving a practice set out of the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub chapter: u32,
    pub scope: Scope,
    /// Keep only New and Learning cards.
    #[serde(default)]
    pub hard_only: bool,
}

impl Selection {
    pub fn whole_chapter(chapter: u32) -> Self {
        Self {
            chapter,
            scope: Scope::WholeChapter,
            hard_only: false,
        }
    }

    pub fn window(chapter: u32, size: usize, index: usize) -> Self {
        Self {
            chapter,
            scope: Scope::Window { size, index },
            hard_only: false,
        }
    }

    /// Broad review window (30 cards by default).
    pub fn broad_review(chapter: u32, index: usize, settings: &DrillSettings) -> Self {
        Self::window(chapter, settings.broad_review_window, index)
    }

    /// Targeted practice window (10 cards by default).
    pub fn targeted(chapter: u32, index: usize, settings: &DrillSettings) -> Self {
        Self::window(chapter, settings.targeted_window, index)
    }

    pub fn hard_only(mut self) -> Self {
        self.hard_only = true;
        self
    }
}

/// Cards matching `selection`, in chapter order.
pub fn select_cards(cards: &[Card], selection: &Selection) -> Result<Vec<Card>> {
    let ordered = chapter_cards(cards, selection.chapter);

    let scoped: &[&Card] = match selection.scope {
        Scope::WholeChapter => &ordered,
        Scope::Window { size, index } => {
            let windows = partition(&ordered, size)?;
            match windows.get(index) {
                Some(window) => window.slice(&ordered),
                None if windows.is_empty() => &[],
                None => {
                    return Err(DrillError::WindowNotFound {
                        chapter: selection.chapter,
                        index,
                        available: windows.len(),
                    })
                }
            }
        }
    };

    let selected: Vec<Card> = scoped
        .iter()
        .filter(|c| !selection.hard_only || c.mastery_level().is_hard())
        .map(|c| (*c).clone())
        .collect();

    tracing::debug!(
        chapter = selection.chapter,
        hard_only = selection.hard_only,
        selected = selected.len(),
        "selected practice cards"
    );

    if selected.is_empty() {
        return Err(DrillError::EmptySelection {
            hard_only: selection.hard_only,
        });
    }
    Ok(selected)
}

/// Select and shuffle a practice queue.
pub fn build_queue<S: Shuffler>(
    cards: &[Card],
    selection: &Selection,
    shuffler: &mut S,
) -> Result<Vec<Card>> {
    let mut queue = select_cards(cards, selection)?;
    shuffler.shuffle(&mut queue);
    Ok(queue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::RandShuffler;
    use crate::types::PartOfSpeech;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn chapter(chapter: u32, n: usize) -> Vec<Card> {
        (1..=n)
            .map(|i| {
                let id = format!("c{chapter}-{i:03}");
                Card::new(id.clone(), id.clone(), id, PartOfSpeech::Noun, chapter)
            })
            .collect()
    }

    fn ids(cards: &[Card]) -> Vec<String> {
        cards.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn whole_chapter_in_order() {
        let mut cards = chapter(2, 3);
        cards.extend(chapter(1, 4));
        cards.reverse();
        let selected = select_cards(&cards, &Selection::whole_chapter(1)).unwrap();
        assert_eq!(ids(&selected), vec!["c1-001", "c1-002", "c1-003", "c1-004"]);
    }

    #[test]
    fn window_slice() {
        let cards = chapter(1, 35);
        let selected = select_cards(&cards, &Selection::window(1, 30, 1)).unwrap();
        assert_eq!(
            ids(&selected),
            vec!["c1-031", "c1-032", "c1-033", "c1-034", "c1-035"]
        );
    }

    #[test]
    fn mode_window_sizes_from_settings() {
        let settings = DrillSettings::default();
        let cards = chapter(1, 35);
        let broad = select_cards(&cards, &Selection::broad_review(1, 0, &settings)).unwrap();
        let targeted = select_cards(&cards, &Selection::targeted(1, 3, &settings)).unwrap();
        assert_eq!(broad.len(), 30);
        assert_eq!(ids(&targeted), vec!["c1-031", "c1-032", "c1-033", "c1-034", "c1-035"]);
    }

    #[test]
    fn hard_only_keeps_new_and_learning() {
        let mut cards = chapter(1, 4);
        cards[0].review.repetition_count = 5;
        cards[1].review.repetition_count = 2;
        cards[2].review.repetition_count = 3;
        let selected = select_cards(&cards, &Selection::whole_chapter(1).hard_only()).unwrap();
        assert_eq!(ids(&selected), vec!["c1-002", "c1-004"]);
    }

    #[test]
    fn hard_only_with_nothing_hard_is_empty_selection() {
        let mut cards = chapter(1, 3);
        for card in &mut cards {
            card.review.repetition_count = 4;
        }
        let result = select_cards(&cards, &Selection::window(1, 10, 0).hard_only());
        assert!(matches!(result, Err(DrillError::EmptySelection { hard_only: true })));
    }

    #[test]
    fn empty_chapter_is_empty_selection() {
        let cards = chapter(1, 3);
        assert!(matches!(
            select_cards(&cards, &Selection::whole_chapter(4)),
            Err(DrillError::EmptySelection { hard_only: false })
        ));
        assert!(matches!(
            select_cards(&cards, &Selection::window(4, 10, 0)),
            Err(DrillError::EmptySelection { hard_only: false })
        ));
    }

    #[test]
    fn missing_window_is_reported() {
        let cards = chapter(1, 12);
        assert!(matches!(
            select_cards(&cards, &Selection::window(1, 10, 2)),
            Err(DrillError::WindowNotFound { chapter: 1, index: 2, available: 2 })
        ));
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let cards = chapter(1, 3);
        assert!(matches!(
            select_cards(&cards, &Selection::window(1, 0, 0)),
            Err(DrillError::InvalidWindowSize { size: 0 })
        ));
    }

    #[test]
    fn queue_is_a_permutation_of_the_selection() {
        let cards = chapter(1, 20);
        let selection = Selection::whole_chapter(1);
        let queue = build_queue(&cards, &selection, &mut RandShuffler::seeded(3)).unwrap();
        let expected: HashSet<String> = ids(&cards).into_iter().collect();
        let got: HashSet<String> = ids(&queue).into_iter().collect();
        assert_eq!(queue.len(), 20);
        assert_eq!(got, expected);
    }

    #[test]
    fn seeded_queues_are_reproducible() {
        let cards = chapter(1, 20);
        let selection = Selection::whole_chapter(1);
        let a = build_queue(&cards, &selection, &mut RandShuffler::seeded(11)).unwrap();
        let b = build_queue(&cards, &selection, &mut RandShuffler::seeded(11)).unwrap();
        assert_eq!(ids(&a), ids(&b));
    }
}
