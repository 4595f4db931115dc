//! Suggestion fetch lifecycle.

use super::{BoxFuture, SuggestionResult, SuggestionSource};
use crate::config::RacePolicy;
use crate::option::SelectOption;
use std::task::{Context, Poll};

/// A lookup that has been issued but has not resolved yet.
struct PendingFetch<T> {
    seq: u64,
    query: String,
    future: BoxFuture<'static, SuggestionResult<T>>,
}

/// Issues lookups against a [`SuggestionSource`] and keeps the latest
/// applied result.
///
/// Lookups are never cancelled. Every call to [`fetch`](Self::fetch) adds a
/// pending future which the owner drives through [`poll`](Self::poll).
/// Which resolved responses get applied is decided by the [`RacePolicy`].
pub struct SuggestionFetcher<T> {
    source: Box<dyn SuggestionSource<T>>,
    policy: RacePolicy,
    pending: Vec<PendingFetch<T>>,
    suggestions: Vec<SelectOption<T>>,
    errored: bool,
    next_seq: u64,
    applied_seq: Option<u64>,
    last_query: String,
    disposed: bool,
}

impl<T> SuggestionFetcher<T> {
    /// Create a fetcher. Nothing is issued until [`fetch`](Self::fetch).
    pub fn new(source: Box<dyn SuggestionSource<T>>, policy: RacePolicy) -> Self {
        Self {
            source,
            policy,
            pending: Vec::new(),
            suggestions: Vec::new(),
            errored: false,
            next_seq: 0,
            applied_seq: None,
            last_query: String::new(),
            disposed: false,
        }
    }

    /// Issue a lookup for `query`. Returns its sequence number.
    pub fn fetch(&mut self, query: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.last_query = query.to_string();
        if self.disposed {
            return seq;
        }
        log::debug!("Fetching suggestions #{} for {:?}", seq, query);
        let future = self.source.suggestions(query);
        self.pending.push(PendingFetch {
            seq,
            query: query.to_string(),
            future,
        });
        seq
    }

    /// Issue the last query again, even though it has not changed.
    pub fn refetch(&mut self) -> u64 {
        let query = self.last_query.clone();
        self.fetch(&query)
    }

    /// Poll every pending lookup once and apply the ones that resolved.
    /// Returns whether the visible suggestions or errored flag changed.
    pub fn poll(&mut self, cx: &mut Context<'_>) -> bool {
        if self.disposed {
            return false;
        }
        let mut resolved = Vec::new();
        self.pending
            .retain_mut(|fetch| match fetch.future.as_mut().poll(cx) {
                Poll::Ready(result) => {
                    resolved.push((fetch.seq, std::mem::take(&mut fetch.query), result));
                    false
                }
                Poll::Pending => true,
            });

        let mut changed = false;
        for (seq, query, result) in resolved {
            changed |= self.apply(seq, &query, result);
        }
        changed
    }

    fn apply(&mut self, seq: u64, query: &str, result: SuggestionResult<T>) -> bool {
        if self.policy == RacePolicy::LatestRequestWins {
            if let Some(applied) = self.applied_seq {
                if seq < applied {
                    log::warn!(
                        "Discarding stale suggestions #{} for {:?} (already applied #{})",
                        seq,
                        query,
                        applied
                    );
                    return false;
                }
            }
        }
        self.applied_seq = Some(seq);

        match result {
            Ok(options) => {
                log::debug!(
                    "Applied {} suggestions #{} for {:?}",
                    options.len(),
                    seq,
                    query
                );
                self.suggestions = options;
                self.errored = false;
            }
            Err(e) => {
                log::warn!("Suggestion lookup #{} for {:?} failed: {}", seq, query, e);
                self.suggestions.clear();
                self.errored = true;
            }
        }
        true
    }

    /// Most recently applied suggestions.
    pub fn suggestions(&self) -> &[SelectOption<T>] {
        &self.suggestions
    }

    /// Whether the most recently applied lookup failed.
    pub fn is_errored(&self) -> bool {
        self.errored
    }

    /// The query passed to the most recent [`fetch`](Self::fetch).
    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Number of lookups issued but not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// The race policy in effect.
    pub fn policy(&self) -> RacePolicy {
        self.policy
    }

    /// Drop every in-flight lookup. Later fetches and responses are ignored.
    pub fn dispose(&mut self) {
        if !self.disposed {
            log::debug!("Disposing fetcher with {} lookups in flight", self.pending.len());
        }
        self.disposed = true;
        self.pending.clear();
    }

    /// Whether [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::SuggestionError;
    use crate::fetch::testing::{manual_source, noop_context};

    fn labels(options: &[SelectOption<String>]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    fn opts(labels: &[&str]) -> Vec<SelectOption<String>> {
        labels.iter().map(|l| SelectOption::simple(*l)).collect()
    }

    #[test]
    fn test_success_replaces_list() {
        let (source, handle) = manual_source::<String>();
        let mut fetcher = SuggestionFetcher::new(Box::new(source), RacePolicy::default());
        let mut cx = noop_context();

        fetcher.fetch("");
        assert_eq!(fetcher.in_flight(), 1);
        assert!(!fetcher.poll(&mut cx));

        handle.resolve(0, Ok(opts(&["A", "B"])));
        assert!(fetcher.poll(&mut cx));
        assert_eq!(labels(fetcher.suggestions()), vec!["A", "B"]);
        assert!(!fetcher.is_errored());
        assert_eq!(fetcher.in_flight(), 0);
    }

    #[test]
    fn test_failure_clears_and_flags() {
        let (source, handle) = manual_source::<String>();
        let mut fetcher = SuggestionFetcher::new(Box::new(source), RacePolicy::default());
        let mut cx = noop_context();

        fetcher.fetch("");
        handle.resolve(0, Ok(opts(&["A"])));
        fetcher.poll(&mut cx);

        fetcher.fetch("a");
        handle.resolve(1, Err(SuggestionError::Unavailable));
        fetcher.poll(&mut cx);
        assert!(fetcher.suggestions().is_empty());
        assert!(fetcher.is_errored());

        fetcher.fetch("ab");
        handle.resolve(2, Ok(opts(&["AB"])));
        fetcher.poll(&mut cx);
        assert!(!fetcher.is_errored());
        assert_eq!(labels(fetcher.suggestions()), vec!["AB"]);
    }

    #[test]
    fn test_last_response_wins_applies_stale() {
        let (source, handle) = manual_source::<String>();
        let mut fetcher =
            SuggestionFetcher::new(Box::new(source), RacePolicy::LastResponseWins);
        let mut cx = noop_context();

        fetcher.fetch("m");
        fetcher.fetch("ma");
        handle.resolve(1, Ok(opts(&["Math"])));
        fetcher.poll(&mut cx);
        handle.resolve(0, Ok(opts(&["Math", "Music"])));
        fetcher.poll(&mut cx);

        assert_eq!(labels(fetcher.suggestions()), vec!["Math", "Music"]);
    }

    #[test]
    fn test_latest_request_wins_discards_stale() {
        let (source, handle) = manual_source::<String>();
        let mut fetcher =
            SuggestionFetcher::new(Box::new(source), RacePolicy::LatestRequestWins);
        let mut cx = noop_context();

        fetcher.fetch("m");
        fetcher.fetch("ma");
        handle.resolve(1, Ok(opts(&["Math"])));
        assert!(fetcher.poll(&mut cx));
        handle.resolve(0, Ok(opts(&["Math", "Music"])));
        assert!(!fetcher.poll(&mut cx));

        assert_eq!(labels(fetcher.suggestions()), vec!["Math"]);
        assert_eq!(fetcher.in_flight(), 0);
    }

    #[test]
    fn test_refetch_reissues_last_query() {
        let (source, handle) = manual_source::<String>();
        let mut fetcher = SuggestionFetcher::new(Box::new(source), RacePolicy::default());

        fetcher.fetch("phy");
        fetcher.refetch();
        assert_eq!(handle.queries(), vec!["phy", "phy"]);
        assert_eq!(fetcher.last_query(), "phy");
    }

    #[test]
    fn test_dispose_ignores_responses() {
        let (source, handle) = manual_source::<String>();
        let mut fetcher = SuggestionFetcher::new(Box::new(source), RacePolicy::default());
        let mut cx = noop_context();

        fetcher.fetch("");
        fetcher.dispose();
        handle.resolve(0, Ok(opts(&["A"])));
        assert!(!fetcher.poll(&mut cx));
        assert!(fetcher.suggestions().is_empty());

        fetcher.fetch("a");
        assert_eq!(fetcher.in_flight(), 0);
        assert_eq!(handle.queries().len(), 1);
    }
}
