// Filter & Sort Selection Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sort order for the visible result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Descending by posting timestamp.
    #[default]
    Newest,
    /// Ascending by posting timestamp.
    Oldest,
    /// Ascending by company name, plain codepoint order (locale-insensitive).
    CompanyName,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Newest => write!(f, "Newest"),
            SortKey::Oldest => write!(f, "Oldest"),
            SortKey::CompanyName => write!(f, "Company Name"),
        }
    }
}

/// User-selected filters, sort order and page position for one render pass.
///
/// Treated as a value: interactions build a replacement state through the
/// `with_*` methods and hand it to the pipeline wholesale. Any filter or
/// sort change snaps `current_page` back to 1 so results are never shown at
/// a stale page offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub remote_only: bool,
    pub location_query: String,
    /// Already split, trimmed and lowercased; see [`parse_keywords`].
    pub keywords: Vec<String>,
    pub selected_job_types: BTreeSet<String>,
    pub sort_key: SortKey,
    /// 1-based page position.
    pub current_page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            remote_only: false,
            location_query: String::new(),
            keywords: Vec::new(),
            selected_job_types: BTreeSet::new(),
            sort_key: SortKey::Newest,
            current_page: 1,
        }
    }
}

impl FilterState {
    pub fn with_remote_only(mut self, remote_only: bool) -> Self {
        self.remote_only = remote_only;
        self.reset_page()
    }

    pub fn with_location_query(mut self, query: impl Into<String>) -> Self {
        self.location_query = query.into();
        self.reset_page()
    }

    /// Replace the keyword list from raw comma-separated input.
    pub fn with_keywords(mut self, raw: &str) -> Self {
        self.keywords = parse_keywords(raw);
        self.reset_page()
    }

    pub fn with_job_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.selected_job_types = types.into_iter().collect();
        self.reset_page()
    }

    pub fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self.reset_page()
    }

    /// Move to `page` without touching the filters. Pages are 1-based;
    /// anything lower is clamped to the first page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.current_page = page.max(1);
        self
    }

    fn reset_page(mut self) -> Self {
        self.current_page = 1;
        self
    }
}

/// Split raw comma-separated keyword input: trim each piece, drop the ones
/// that end up empty, lowercase the rest.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords_trims_lowercases_and_drops_empty() {
        assert_eq!(parse_keywords(" Java, , Remote "), vec!["java", "remote"]);
        assert_eq!(parse_keywords(""), Vec::<String>::new());
        assert_eq!(parse_keywords(" , ,, "), Vec::<String>::new());
        assert_eq!(parse_keywords("Rust"), vec!["rust"]);
    }

    #[test]
    fn filter_changes_reset_page() {
        let state = FilterState::default().with_page(3);
        assert_eq!(state.current_page, 3);

        assert_eq!(state.clone().with_remote_only(true).current_page, 1);
        assert_eq!(state.clone().with_location_query("berlin").current_page, 1);
        assert_eq!(state.clone().with_keywords("rust").current_page, 1);
        assert_eq!(
            state
                .clone()
                .with_job_types(vec!["full-time".to_string()])
                .current_page,
            1
        );
        assert_eq!(state.with_sort_key(SortKey::Oldest).current_page, 1);
    }

    #[test]
    fn with_page_keeps_filters_and_clamps_to_one() {
        let state = FilterState::default().with_keywords("rust").with_page(4);
        assert_eq!(state.current_page, 4);
        assert_eq!(state.keywords, vec!["rust"]);

        assert_eq!(FilterState::default().with_page(0).current_page, 1);
    }

    #[test]
    fn default_state_is_unfiltered_first_page() {
        let state = FilterState::default();
        assert!(!state.remote_only);
        assert!(state.location_query.is_empty());
        assert!(state.keywords.is_empty());
        assert!(state.selected_job_types.is_empty());
        assert_eq!(state.sort_key, SortKey::Newest);
        assert_eq!(state.current_page, 1);
    }
}
