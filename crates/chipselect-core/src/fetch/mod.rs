//! Suggestion lookup abstraction and the fetch lifecycle.

mod fetcher;
mod memory;

pub use fetcher::SuggestionFetcher;
pub use memory::StaticSuggestions;

use crate::option::SelectOption;
use std::pin::Pin;
use thiserror::Error;

/// Suggestion lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error("Suggestion lookup failed: {0}")]
    Failed(String),
    #[error("Suggestion source unavailable")]
    Unavailable,
}

/// Result of a suggestion lookup.
pub type SuggestionResult<T> = Result<Vec<SelectOption<T>>, SuggestionError>;

/// Boxed future for async lookups (no `Send` bound, the widget is single-threaded).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// The injected lookup capability behind a select.
///
/// Implementations can query a search index, a remote API, or a fixed list.
/// The returned future must not borrow the source: the fetcher keeps it
/// alive independently while newer queries are issued.
pub trait SuggestionSource<T> {
    /// Look up the options matching `query`.
    fn suggestions(&self, query: &str) -> BoxFuture<'static, SuggestionResult<T>>;
}

/// Adapts a closure returning a future into a [`SuggestionSource`].
pub struct FnSource<F> {
    lookup: F,
}

impl<F> FnSource<F> {
    /// Wrap `lookup`.
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

impl<T, F, Fut> SuggestionSource<T> for FnSource<F>
where
    F: Fn(&str) -> Fut,
    Fut: Future<Output = SuggestionResult<T>> + 'static,
{
    fn suggestions(&self, query: &str) -> BoxFuture<'static, SuggestionResult<T>> {
        Box::pin((self.lookup)(query))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Sources whose responses are released by the test.

    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::task::{Context, Poll, Waker};

    type Slot<T> = Rc<RefCell<Option<SuggestionResult<T>>>>;

    /// A source whose every call stays pending until the test resolves it.
    pub struct ManualSource<T> {
        calls: Rc<RefCell<Vec<(String, Slot<T>)>>>,
    }

    /// Handle the test keeps to resolve calls made through a [`ManualSource`].
    pub struct ManualHandle<T> {
        calls: Rc<RefCell<Vec<(String, Slot<T>)>>>,
    }

    pub fn manual_source<T>() -> (ManualSource<T>, ManualHandle<T>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            ManualSource {
                calls: Rc::clone(&calls),
            },
            ManualHandle { calls },
        )
    }

    impl<T: 'static> SuggestionSource<T> for ManualSource<T> {
        fn suggestions(&self, query: &str) -> BoxFuture<'static, SuggestionResult<T>> {
            let slot: Slot<T> = Rc::new(RefCell::new(None));
            self.calls
                .borrow_mut()
                .push((query.to_string(), Rc::clone(&slot)));
            Box::pin(std::future::poll_fn(move |_cx| match slot.borrow_mut().take() {
                Some(result) => Poll::Ready(result),
                None => Poll::Pending,
            }))
        }
    }

    impl<T> ManualHandle<T> {
        /// Queries received so far, in call order.
        pub fn queries(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(q, _)| q.clone()).collect()
        }

        /// Resolve the `index`-th call.
        pub fn resolve(&self, index: usize, result: SuggestionResult<T>) {
            let calls = self.calls.borrow();
            *calls[index].1.borrow_mut() = Some(result);
        }
    }

    /// Context with a waker that does nothing.
    pub fn noop_context() -> Context<'static> {
        Context::from_waker(Waker::noop())
    }
}
