//! View selection: the single search term or status filter driving table loads.

use std::fmt;

use crate::error::{Result, SlaError};
use crate::types::{ALL_FILTER, DEFAULT_FILTERS};

/// Which tickets the table shows. Search and status filter are never combined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewSelector {
    /// Unfiltered `/tickets`
    #[default]
    All,
    /// `/tickets?status=<filter>`
    Status(String),
    /// `/search?q=<term>`
    Search(String),
}

impl ViewSelector {
    /// Selector for a status filter value; `all` means no filter
    pub fn for_filter(value: &str) -> Self {
        if value == ALL_FILTER {
            ViewSelector::All
        } else {
            ViewSelector::Status(value.to_string())
        }
    }

    /// Selector for raw search input; blank input reverts to the full list
    pub fn for_search(input: &str) -> Self {
        let term = input.trim();
        if term.is_empty() {
            ViewSelector::All
        } else {
            ViewSelector::Search(term.to_string())
        }
    }

    /// Backend path, relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            ViewSelector::All | ViewSelector::Status(_) => "tickets",
            ViewSelector::Search(_) => "search",
        }
    }

    /// Query parameter sent with [`path`](Self::path), if any
    pub fn query_pair(&self) -> Option<(&'static str, &str)> {
        match self {
            ViewSelector::All => None,
            ViewSelector::Status(status) => Some(("status", status.as_str())),
            ViewSelector::Search(term) => Some(("q", term.as_str())),
        }
    }
}

impl fmt::Display for ViewSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())?;
        if let Some((key, value)) = self.query_pair() {
            let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
            write!(f, "?{}={}", key, encoded)?;
        }
        Ok(())
    }
}

/// Owns the active view selector and the status filter buttons.
#[derive(Debug, Clone)]
pub struct QueryController {
    filters: Vec<String>,
    active_filter: usize,
    search_text: String,
    selector: ViewSelector,
}

impl Default for QueryController {
    fn default() -> Self {
        Self::new(DEFAULT_FILTERS.iter().map(|f| f.to_string()).collect())
    }
}

impl QueryController {
    /// Create a controller with the given filter buttons.
    ///
    /// `all` is inserted first when missing; it starts out active.
    pub fn new(mut filters: Vec<String>) -> Self {
        filters.retain(|f| !f.trim().is_empty());
        filters.dedup();
        let active_filter = match filters.iter().position(|f| f == ALL_FILTER) {
            Some(index) => index,
            None => {
                filters.insert(0, ALL_FILTER.to_string());
                0
            }
        };
        Self {
            filters,
            active_filter,
            search_text: String::new(),
            selector: ViewSelector::All,
        }
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn active_filter(&self) -> &str {
        &self.filters[self.active_filter]
    }

    pub fn active_filter_index(&self) -> usize {
        self.active_filter
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The selector the table was last asked to load
    pub fn selector(&self) -> &ViewSelector {
        &self.selector
    }

    /// Search input changed. Supersedes any status filter.
    pub fn search_input(&mut self, input: &str) -> ViewSelector {
        self.search_text = input.to_string();
        self.selector = ViewSelector::for_search(input);
        self.selector.clone()
    }

    /// A filter button was pressed. Supersedes any search.
    pub fn select_filter(&mut self, value: &str) -> Result<ViewSelector> {
        let index = self
            .filters
            .iter()
            .position(|f| f == value)
            .ok_or_else(|| SlaError::InvalidFilter(value.to_string()))?;
        Ok(self.select_filter_index(index))
    }

    /// Select the filter button at `index` (wrapping)
    pub fn select_filter_index(&mut self, index: usize) -> ViewSelector {
        self.active_filter = index % self.filters.len();
        self.selector = ViewSelector::for_filter(&self.filters[self.active_filter]);
        self.selector.clone()
    }

    /// Move the active filter button by `delta` positions
    pub fn cycle_filter(&mut self, delta: isize) -> ViewSelector {
        let len = self.filters.len() as isize;
        let next = (self.active_filter as isize + delta).rem_euclid(len) as usize;
        self.select_filter_index(next)
    }
}
