//! Card rendering for the current page.
//!
//! A render produces a [`Rendered`] value; [`markdown`] turns it into text.

pub mod markdown;

use std::collections::BTreeSet;

use crate::config::defaults;
use crate::models::Paper;

pub use markdown::{format_card, format_rendered, format_screen};

/// Placeholder shown when the current page is empty.
pub const NO_DATA_MESSAGE: &str = "No data available for the given filters.";

/// A display card for one paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Paper title.
    pub title: String,
    /// Author names.
    pub authors: String,
    /// Publication year, if the date parses.
    pub year: Option<i32>,
    /// Citation count.
    pub citations: u64,
    /// Venue (journal).
    pub venue: String,
    /// First characters of the abstract.
    pub preview: String,
    /// Rest of the abstract, hidden until expanded.
    pub remainder: String,
    /// Whether the remainder is shown. UI-local, not part of the record.
    pub expanded: bool,
}

impl Card {
    /// Build a card from a paper.
    #[must_use]
    pub fn from_paper(paper: &Paper, expanded: bool) -> Self {
        let (preview, remainder) =
            split_abstract(&paper.r#abstract, defaults::ABSTRACT_PREVIEW_CHARS);
        Self {
            title: paper.title.clone(),
            authors: paper.authors.clone(),
            year: paper.year(),
            citations: paper.citation_count,
            venue: paper.journal.clone(),
            preview: preview.to_string(),
            remainder: remainder.to_string(),
            expanded,
        }
    }

    /// Whether there is abstract text beyond the preview.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.remainder.is_empty()
    }

    /// Label of the expand/collapse affordance.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        if self.expanded { "Read Less" } else { "Read More" }
    }

    /// Year for display.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year.map_or_else(|| "n/a".to_string(), |y| y.to_string())
    }
}

/// Split text after `max_chars` characters, on a `char` boundary.
#[must_use]
pub fn split_abstract(text: &str, max_chars: usize) -> (&str, &str) {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text.split_at(idx),
        None => (text, ""),
    }
}

/// Result area contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Cards for the current page.
    Cards(Vec<Card>),
    /// The page slice is empty.
    NoData,
    /// The load failed.
    Error(String),
}

/// Render a page slice. `expanded` holds the positions (0-based, within the
/// page) of cards whose abstract is open.
#[must_use]
pub fn render_page(items: &[Paper], expanded: &BTreeSet<usize>) -> Rendered {
    if items.is_empty() {
        return Rendered::NoData;
    }

    Rendered::Cards(
        items
            .iter()
            .enumerate()
            .map(|(i, paper)| Card::from_paper(paper, expanded.contains(&i)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_short_abstract() {
        assert_eq!(split_abstract("short", 100), ("short", ""));
    }

    #[test]
    fn test_split_at_limit() {
        let text = "a".repeat(150);
        let (head, tail) = split_abstract(&text, 100);
        assert_eq!(head.len(), 100);
        assert_eq!(tail.len(), 50);
    }

    #[test]
    fn test_split_respects_multibyte_chars() {
        let text = "é".repeat(120);
        let (head, tail) = split_abstract(&text, 100);
        assert_eq!(head.chars().count(), 100);
        assert_eq!(tail.chars().count(), 20);
    }

    #[test]
    fn test_empty_page_renders_no_data() {
        assert_eq!(render_page(&[], &BTreeSet::new()), Rendered::NoData);
    }

    #[test]
    fn test_expanded_positions() {
        let papers = vec![Paper::default(), Paper::default()];
        let expanded = BTreeSet::from([1]);
        let Rendered::Cards(cards) = render_page(&papers, &expanded) else {
            panic!("expected cards");
        };
        assert!(!cards[0].expanded);
        assert!(cards[1].expanded);
        assert_eq!(cards[1].toggle_label(), "Read Less");
    }

    #[test]
    fn test_card_toggle_label() {
        let paper = Paper { r#abstract: "x".repeat(120), ..Default::default() };
        let collapsed = Card::from_paper(&paper, false);
        assert!(collapsed.has_more());
        assert_eq!(collapsed.toggle_label(), "Read More");
        assert_eq!(Card::from_paper(&paper, true).toggle_label(), "Read Less");
    }
}
