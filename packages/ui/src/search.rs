//! # Search view state machine
//!
//! ```text
//!            edit(non-blank)                  settle(ticket, Ok(n > 0))
//!   Idle ───────────────────▶ Pending ──────────────────────────────▶ Results(n)
//!    ▲                          │  ▲      settle(ticket, Ok(0) | NotFound) ─▶ Empty
//!    │ edit(blank)              │  │      settle(ticket, Err(other))      ─▶ Failed(msg)
//!    └──────────────────────────┘  └── edit(non-blank) from any state
//! ```
//!
//! Every edit bumps a ticket. Only the response carrying the latest ticket may settle
//! the state; answers to superseded queries are dropped so a slow response can never
//! paint stale results over newer ones (or over the idle screen).

use api::{CatalogError, MovieSummary, SearchPage};
use tracing::debug;

/// Where the search view currently is.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SearchPhase {
    /// No query typed.
    #[default]
    Idle,
    /// Waiting for the debounce delay or the catalog response.
    Pending,
    Results(Vec<MovieSummary>),
    /// The catalog had nothing for the query.
    Empty,
    Failed(String),
}

/// What the view has to do after an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEdit {
    /// Query is blank: cancel any pending search, no network call.
    Cleared,
    /// Debounce, then search `query` and settle with `ticket`.
    Scheduled { ticket: u64, query: String },
}

/// Query text, phase and ticket counter of the search view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    query: String,
    phase: SearchPhase,
    ticket: u64,
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Pending
    }

    /// Record a change of the query field.
    pub fn edit(&mut self, text: &str) -> SearchEdit {
        self.query = text.to_string();
        self.ticket += 1;

        if text.trim().is_empty() {
            self.phase = SearchPhase::Idle;
            return SearchEdit::Cleared;
        }

        self.phase = SearchPhase::Pending;
        SearchEdit::Scheduled {
            ticket: self.ticket,
            query: self.query.clone(),
        }
    }

    /// Apply a catalog response. Returns `false` (and changes nothing) when
    /// `ticket` belongs to a superseded edit.
    pub fn settle(&mut self, ticket: u64, result: Result<SearchPage, CatalogError>) -> bool {
        if ticket != self.ticket {
            debug!(ticket, latest = self.ticket, "dropping stale search response");
            return false;
        }

        self.phase = match result {
            Ok(page) if page.results.is_empty() => SearchPhase::Empty,
            Ok(page) => SearchPhase::Results(page.results),
            Err(CatalogError::NotFound(_)) => SearchPhase::Empty,
            Err(e) => SearchPhase::Failed(e.to_string()),
        };
        true
    }
}
