//! Markdown output formatting.

use std::collections::BTreeSet;

use super::{Card, NO_DATA_MESSAGE, Rendered, render_page};
use crate::view::{LoadStatus, ViewState};

/// Format a single card as Markdown. `index` is the 1-based card number used
/// by the `more` command.
#[must_use]
pub fn format_card(card: &Card, index: usize) -> String {
    let mut output = String::new();

    // Title
    output.push_str(&format!("## {}. {}\n\n", index, card.title));

    // Authors
    if !card.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", card.authors));
    }

    // Year, citations, venue
    let mut meta = vec![
        format!("**Year**: {}", card.year_label()),
        format!("**Citations**: {}", card.citations),
    ];
    if !card.venue.is_empty() {
        meta.push(format!("**Venue**: {}", card.venue));
    }
    output.push_str(&format!("{}\n\n", meta.join(" | ")));

    // Abstract with expand/collapse affordance
    if card.has_more() {
        if card.expanded {
            output.push_str(&format!("{}{}\n", card.preview, card.remainder));
        } else {
            output.push_str(&format!("{}...\n", card.preview));
        }
        output.push_str(&format!("[{}]\n", card.toggle_label()));
    } else if !card.preview.is_empty() {
        output.push_str(&format!("{}\n", card.preview));
    }

    output
}

/// Format the result area.
#[must_use]
pub fn format_rendered(rendered: &Rendered) -> String {
    match rendered {
        Rendered::Cards(cards) => cards
            .iter()
            .enumerate()
            .map(|(i, card)| format_card(card, i + 1))
            .collect::<Vec<_>>()
            .join("\n---\n\n"),
        Rendered::NoData => format!("{NO_DATA_MESSAGE}\n"),
        Rendered::Error(message) => format!("{message}\n"),
    }
}

/// Format the whole screen: status line, result area and page navigation.
#[must_use]
pub fn format_screen(state: &ViewState, expanded: &BTreeSet<usize>) -> String {
    match state.status() {
        LoadStatus::Loading => "Loading...\n".to_string(),
        LoadStatus::Failed(message) => format_rendered(&Rendered::Error(message.clone())),
        LoadStatus::Ready => {
            let info = state.page_info();
            let rendered = render_page(state.page_items(), expanded);

            let mut output = format!("# Papers: {info}\n\n");
            output.push_str(&format_rendered(&rendered));

            let prev = if info.has_prev() { "[< Prev]" } else { "( Prev )" };
            let next = if info.has_next() { "[Next >]" } else { "( Next )" };
            output.push_str(&format!("\n{prev} {next}\n"));
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Paper;

    fn card(abstract_text: &str, expanded: bool) -> Card {
        let paper = Paper {
            title: "Sparse Transformers".into(),
            authors: "A. Author, B. Author".into(),
            published_at: "2019-04-23".into(),
            citation_count: 120,
            journal: "arXiv".into(),
            r#abstract: abstract_text.into(),
            ..Default::default()
        };
        Card::from_paper(&paper, expanded)
    }

    #[test]
    fn test_short_abstract_has_no_affordance() {
        let output = format_card(&card("Brief.", false), 1);
        assert!(output.contains("Brief.\n"));
        assert!(!output.contains("Read More"));
    }

    #[test]
    fn test_collapsed_card() {
        let text = format!("{}{}", "a".repeat(100), "TAIL");
        let output = format_card(&card(&text, false), 1);
        assert!(output.contains(&format!("{}...\n[Read More]", "a".repeat(100))));
        assert!(!output.contains("TAIL"));
    }

    #[test]
    fn test_expanded_card() {
        let text = format!("{}{}", "a".repeat(100), "TAIL");
        let output = format_card(&card(&text, true), 1);
        assert!(output.contains("TAIL\n[Read Less]"));
    }

    #[test]
    fn test_card_snapshot() {
        insta::assert_snapshot!(format_card(&card("Brief.", false), 2), @r"
        ## 2. Sparse Transformers

        **Authors**: A. Author, B. Author

        **Year**: 2019 | **Citations**: 120 | **Venue**: arXiv

        Brief.
        ");
    }

    #[test]
    fn test_no_data_placeholder() {
        assert_eq!(format_rendered(&Rendered::NoData), format!("{NO_DATA_MESSAGE}\n"));
    }
}
