//! In-memory suggestion source.

use super::{BoxFuture, SuggestionResult, SuggestionSource};
use crate::option::SelectOption;

/// Suggestions drawn from a fixed option list.
///
/// Matches options whose label contains the query, ignoring case. An empty
/// query matches everything.
#[derive(Debug, Clone, Default)]
pub struct StaticSuggestions<T> {
    options: Vec<SelectOption<T>>,
    limit: Option<usize>,
}

impl<T> StaticSuggestions<T> {
    /// Create a source over `options`.
    pub fn new(options: Vec<SelectOption<T>>) -> Self {
        Self {
            options,
            limit: None,
        }
    }

    /// Return at most `limit` matches per query.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// All options known to this source.
    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }
}

impl<T: Clone> StaticSuggestions<T> {
    /// Options matching `query`, in list order.
    pub fn matching(&self, query: &str) -> Vec<SelectOption<T>> {
        let needle = query.trim().to_lowercase();
        let matches = self
            .options
            .iter()
            .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .cloned();
        match self.limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        }
    }
}

impl<T: Clone + 'static> SuggestionSource<T> for StaticSuggestions<T> {
    fn suggestions(&self, query: &str) -> BoxFuture<'static, SuggestionResult<T>> {
        let matches = self.matching(query);
        Box::pin(std::future::ready(Ok(matches)))
    }
}
