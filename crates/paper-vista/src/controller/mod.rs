//! UI controller: owns the view state and turns events into screens.
//!
//! Each event is applied as a pure state transition ([`crate::view::apply`])
//! and followed by a render. Per-card expand flags live here, not in the
//! view state.

mod event;
mod session;

use std::collections::BTreeSet;
use std::path::PathBuf;

pub use event::{Event, HELP_TEXT};
pub use session::run_interactive;

use crate::config::Config;
use crate::error::{ExportError, LoadResult};
use crate::export;
use crate::models::{ExportFormat, Paper};
use crate::render;
use crate::view::{self, LoadStatus, ViewState};

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to show the user.
    pub output: String,
    /// Whether the session should end.
    pub quit: bool,
}

impl Outcome {
    fn show(output: impl Into<String>) -> Self {
        Self { output: output.into(), quit: false }
    }
}

/// Browser controller for one session.
#[derive(Debug)]
pub struct Controller {
    state: ViewState,
    expanded: BTreeSet<usize>,
    export_dir: PathBuf,
}

impl Controller {
    /// Create a controller awaiting the initial load.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            state: ViewState::new(config.rows_per_page),
            expanded: BTreeSet::new(),
            export_dir: config.export_dir.clone(),
        }
    }

    /// Apply the outcome of the initial load.
    pub fn on_loaded(&mut self, result: LoadResult<Vec<Paper>>) {
        let state = std::mem::take(&mut self.state);
        self.state = match result {
            Ok(papers) => state.loaded(papers),
            Err(e) => state.failed(e.to_user_message()),
        };
        self.expanded.clear();
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Positions (0-based, within the page) of expanded cards.
    #[must_use]
    pub const fn expanded(&self) -> &BTreeSet<usize> {
        &self.expanded
    }

    /// Render the current screen.
    #[must_use]
    pub fn screen(&self) -> String {
        render::format_screen(&self.state, &self.expanded)
    }

    /// Handle one event and return what to show.
    pub async fn handle(&mut self, event: Event) -> Outcome {
        tracing::debug!(?event, "Handling event");

        if event.changes_view() {
            let state = std::mem::take(&mut self.state);
            self.state = view::apply(state, &event);
            // Page contents may have changed; cards start collapsed.
            self.expanded.clear();
            return Outcome::show(self.screen());
        }

        match event {
            Event::ToggleAbstract(card) => self.toggle(card),
            Event::Export(format) => self.export(format).await,
            Event::Show => Outcome::show(self.screen()),
            Event::Help => Outcome::show(HELP_TEXT),
            Event::Quit => Outcome { output: String::new(), quit: true },
            _ => Outcome::show(self.screen()),
        }
    }

    fn toggle(&mut self, card: usize) -> Outcome {
        let on_page = self.state.page_items().len();
        if card == 0 || card > on_page {
            return Outcome::show(format!("No card {card} on this page (1-{on_page})."));
        }

        let position = card - 1;
        if !self.expanded.remove(&position) {
            self.expanded.insert(position);
        }
        Outcome::show(self.screen())
    }

    async fn export(&self, format: ExportFormat) -> Outcome {
        if matches!(self.state.status(), LoadStatus::Failed(_)) {
            tracing::warn!("Export requested after a failed load");
        }

        match export::export_to_dir(self.state.filtered(), format, &self.export_dir).await {
            Ok(path) => Outcome::show(format!(
                "Exported {} papers to {}\n",
                self.state.filtered().len(),
                path.display()
            )),
            Err(ExportError::Empty) => {
                tracing::info!("Export skipped: no papers match the current filters");
                Outcome::show(format!("{}\n", ExportError::Empty))
            }
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                Outcome::show(format!("Export failed: {e}\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    fn papers(n: usize) -> Vec<Paper> {
        (0..n)
            .map(|i| Paper {
                title: format!("Paper {i}"),
                published_at: "2020-05-05".into(),
                r#abstract: "z".repeat(150),
                ..Default::default()
            })
            .collect()
    }

    fn ready(n: usize) -> Controller {
        let mut controller = Controller::new(&Config::default());
        controller.on_loaded(Ok(papers(n)));
        controller
    }

    #[tokio::test]
    async fn test_toggle_flips_card() {
        let mut controller = ready(3);
        let out = controller.handle(Event::ToggleAbstract(2)).await;
        assert!(controller.expanded().contains(&1));
        assert!(out.output.contains("[Read Less]"));

        controller.handle(Event::ToggleAbstract(2)).await;
        assert!(controller.expanded().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_out_of_range() {
        let mut controller = ready(3);
        let out = controller.handle(Event::ToggleAbstract(9)).await;
        assert!(out.output.starts_with("No card 9"));
        assert!(controller.expanded().is_empty());
    }

    #[tokio::test]
    async fn test_page_change_collapses_cards() {
        let mut controller = ready(25);
        controller.handle(Event::ToggleAbstract(1)).await;
        controller.handle(Event::NextPage).await;
        assert!(controller.expanded().is_empty());
        assert_eq!(controller.state().current_page(), 2);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut controller = ready(1);
        assert!(controller.handle(Event::Quit).await.quit);
    }

    #[test]
    fn test_failed_load_renders_error() {
        let mut controller = Controller::new(&Config::default());
        controller.on_loaded(Err(LoadError::invalid_shape("no papers")));
        assert!(controller.screen().starts_with("Failed to load data."));
        assert!(controller.state().papers().is_empty());
    }
}
