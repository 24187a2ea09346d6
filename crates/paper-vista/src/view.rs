//! View state and its pure transitions.
//!
//! `ViewState` is owned by the controller. Every state-affecting event goes
//! through [`apply`], which consumes the old state and returns the new one.

use crate::controller::Event;
use crate::filter::filter_papers;
use crate::models::{FilterCriteria, FilterInputs, Paper};
use crate::pagination::{self, PageInfo};

/// Outcome of the initial load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Fetch still in flight.
    #[default]
    Loading,
    /// Payload loaded.
    Ready,
    /// Fetch failed; the message is shown in place of the cards.
    Failed(String),
}

/// Data store for one browsing session.
#[derive(Debug, Clone)]
pub struct ViewState {
    papers: Vec<Paper>,
    filtered: Vec<Paper>,
    inputs: FilterInputs,
    criteria: FilterCriteria,
    current_page: usize,
    rows_per_page: usize,
    status: LoadStatus,
}

impl ViewState {
    /// Empty state awaiting the load.
    #[must_use]
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            papers: Vec::new(),
            filtered: Vec::new(),
            inputs: FilterInputs::default(),
            criteria: FilterCriteria::default(),
            current_page: 1,
            rows_per_page: rows_per_page.max(1),
            status: LoadStatus::Loading,
        }
    }

    /// Install the loaded record set, reset to page 1 and run the filter.
    #[must_use]
    pub fn loaded(mut self, papers: Vec<Paper>) -> Self {
        tracing::info!(count = papers.len(), "Loaded papers");
        self.papers = papers;
        self.current_page = 1;
        self.status = LoadStatus::Ready;
        self.refilter()
    }

    /// Record a failed load. Both record sets stay empty.
    #[must_use]
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.papers.clear();
        self.filtered.clear();
        self.current_page = 1;
        self.status = LoadStatus::Failed(message.into());
        self
    }

    /// Same state with the given filter inputs applied.
    #[must_use]
    pub fn with_inputs(mut self, inputs: FilterInputs) -> Self {
        self.inputs = inputs;
        self.refilter()
    }

    /// Same state positioned on `page` (clamped).
    #[must_use]
    pub fn at_page(mut self, page: usize) -> Self {
        self.current_page = pagination::clamp_page(page, self.filtered.len(), self.rows_per_page);
        self
    }

    /// Recompute the filtered set from the current inputs and clamp the page.
    #[must_use]
    fn refilter(mut self) -> Self {
        self.criteria = self.inputs.criteria();
        tracing::debug!(
            title = %self.criteria.title,
            min_citations = ?self.criteria.min_citations,
            start_year = ?self.criteria.start_year,
            end_year = ?self.criteria.end_year,
            "Applying filters"
        );

        self.filtered = filter_papers(&self.papers, &self.criteria);
        self.current_page =
            pagination::clamp_page(self.current_page, self.filtered.len(), self.rows_per_page);

        tracing::debug!(filtered = self.filtered.len(), total = self.papers.len(), "Filtered papers");
        self
    }

    /// Full record set in load order.
    #[must_use]
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    /// Records matching the current criteria.
    #[must_use]
    pub fn filtered(&self) -> &[Paper] {
        &self.filtered
    }

    /// Raw filter inputs.
    #[must_use]
    pub const fn inputs(&self) -> &FilterInputs {
        &self.inputs
    }

    /// Criteria derived from the inputs.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    #[must_use]
    pub const fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Load outcome.
    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Records on the current page.
    #[must_use]
    pub fn page_items(&self) -> &[Paper] {
        pagination::page_slice(&self.filtered, self.current_page, self.rows_per_page)
    }

    /// Status line data for the current page.
    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.current_page, self.filtered.len(), self.rows_per_page)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(crate::config::defaults::ROWS_PER_PAGE)
    }
}

/// Apply a UI event to the view state.
///
/// Events that only concern presentation (toggles, export, help) leave the
/// state unchanged.
#[must_use]
pub fn apply(mut state: ViewState, event: &Event) -> ViewState {
    match event {
        Event::TitleChanged(value) => {
            state.inputs.title.clone_from(value);
            state.refilter()
        }
        Event::MinCitationsChanged(value) => {
            state.inputs.min_citations.clone_from(value);
            state.refilter()
        }
        Event::StartYearChanged(value) => {
            state.inputs.start_year.clone_from(value);
            state.refilter()
        }
        Event::EndYearChanged(value) => {
            state.inputs.end_year.clone_from(value);
            state.refilter()
        }
        Event::RowsPerPageChanged(value) => {
            state.rows_per_page = pagination::coerce_rows_per_page(value);
            state.current_page = 1;
            state.refilter()
        }
        Event::ClearFilters => {
            state.inputs.clear();
            state.refilter()
        }
        Event::PrevPage => {
            state.current_page = pagination::prev_page(state.current_page);
            state
        }
        Event::NextPage => {
            state.current_page =
                pagination::next_page(state.current_page, state.filtered.len(), state.rows_per_page);
            state
        }
        Event::ToggleAbstract(_)
        | Event::Export(_)
        | Event::Show
        | Event::Help
        | Event::Quit => state,
    }
}
