//! Chapter ordering and windowing.
//!
//! Cards in a chapter are ordered by the number embedded in their ID
//! (`c1-007` sorts as 7), falling back to plain ID comparison. The order only
//! depends on the IDs and chapter numbers, so a window such as "1-30" covers
//! the same cards every time the same vocabulary is loaded.

use crate::error::{DrillError, Result};
use crate::types::Card;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Half-open slice `[start_offset, end_offset)` of a chapter's ordered cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterWindow {
    pub start_offset: usize,
    pub end_offset: usize,
    pub label: String,
}

impl ChapterWindow {
    pub fn len(&self) -> usize {
        self.end_offset - self.start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }

    /// The part of `items` this window covers, clamped to its length.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end_offset.min(items.len());
        let start = self.start_offset.min(end);
        &items[start..end]
    }
}

fn trailing_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)$").expect("trailing digits pattern"))
}

fn separated_digits() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[-_.:/\s](\d+)").expect("separated digits pattern"))
}

/// Display number embedded in a card ID.
///
/// Uses the trailing digit run when there is one (`c1-035` is 35), otherwise
/// the last digit run that follows a separator (`c2-014b` is 14).
pub fn id_number(id: &str) -> Option<u64> {
    let digits = trailing_digits()
        .captures(id)
        .or_else(|| separated_digits().captures_iter(id).last())?;
    digits.get(1)?.as_str().parse().ok()
}

/// Global order: chapter, then ID number (numbered IDs first), then ID text.
pub fn compare_cards(a: &Card, b: &Card) -> Ordering {
    a.chapter
        .cmp(&b.chapter)
        .then_with(|| match (id_number(&a.id), id_number(&b.id)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// Chapter numbers present in the collection, ascending.
pub fn chapters(cards: &[Card]) -> Vec<u32> {
    let mut chapters: Vec<u32> = cards.iter().map(|c| c.chapter).collect();
    chapters.sort_unstable();
    chapters.dedup();
    chapters
}

/// Cards of one chapter in global order.
pub fn chapter_cards(cards: &[Card], chapter: u32) -> Vec<&Card> {
    let mut selected: Vec<&Card> = cards.iter().filter(|c| c.chapter == chapter).collect();
    selected.sort_by(|a, b| compare_cards(a, b));
    selected
}

/// Split an already ordered card list into consecutive labeled windows.
pub fn partition(ordered: &[&Card], window_size: usize) -> Result<Vec<ChapterWindow>> {
    if window_size == 0 {
        return Err(DrillError::InvalidWindowSize { size: window_size });
    }

    let windows = ordered
        .chunks(window_size)
        .enumerate()
        .map(|(i, chunk)| {
            let start_offset = i * window_size;
            let end_offset = start_offset + chunk.len();
            ChapterWindow {
                start_offset,
                end_offset,
                label: window_label(chunk, start_offset, end_offset),
            }
        })
        .collect();
    Ok(windows)
}

/// Windows of `window_size` cards over one chapter.
///
/// A chapter without cards yields no windows.
pub fn build_windows(cards: &[Card], chapter: u32, window_size: usize) -> Result<Vec<ChapterWindow>> {
    let ordered = chapter_cards(cards, chapter);
    let windows = partition(&ordered, window_size)?;
    tracing::debug!(
        chapter,
        window_size,
        cards = ordered.len(),
        windows = windows.len(),
        "built chapter windows"
    );
    Ok(windows)
}

fn window_label(chunk: &[&Card], start_offset: usize, end_offset: usize) -> String {
    let first = chunk.first().and_then(|c| id_number(&c.id));
    let last = chunk.last().and_then(|c| id_number(&c.id));
    match (first, last) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => format!("{}-{}", start_offset + 1, end_offset),
    }
}
