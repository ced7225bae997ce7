//! Cursor-pagination walker.
//!
//! Shopify connections return at most a few hundred edges per request. The
//! collection editor needs complete lists (every collection for the parent
//! picker, every product in a collection), so it walks a connection page by
//! page with `after: endCursor` until `hasNextPage` is false.
//!
//! [`PageAggregator`] owns that loop. The caller injects the page fetch as an
//! async closure, which keeps this module free of any HTTP dependency.
//!
//! # Termination
//!
//! A page that claims there is more data but gives no usable cursor (null,
//! empty, or any cursor already requested during this walk) ends the walk. The
//! items gathered so far are returned as a normal result and a warning is
//! logged; callers may therefore see a truncated list from a misbehaving
//! backend.
//!
//! # Errors
//!
//! A failed fetch ends the walk and the error is returned as-is. There is
//! no retry, and items from earlier pages are discarded.
//!
//! # Example
//!
//! ```rust
//! # use curator_core::{Page, PageAggregator};
//! # tokio_test_block_on(async {
//! let pages = vec![
//!     Page::more(vec![1, 2], "c1"),
//!     Page::last(vec![3]),
//! ];
//! let mut pages = pages.into_iter();
//! let items = PageAggregator::new(|_after: Option<String>| {
//!     let page = pages.next().unwrap_or_else(|| Page::last(Vec::new()));
//!     std::future::ready(Ok::<_, std::convert::Infallible>(page))
//! })
//! .collect()
//! .await
//! .unwrap();
//! assert_eq!(items, vec![1, 2, 3]);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::collections::HashSet;
use std::future::Future;
use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items in backend order.
    pub items: Vec<T>,
    /// Cursor to pass as `after` for the next page. Only meaningful when
    /// `has_next` is true.
    pub cursor: Option<String>,
    /// Whether the backend reports more items after this page.
    pub has_next: bool,
}

impl<T> Page<T> {
    /// A final page.
    #[must_use]
    pub const fn last(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: None,
            has_next: false,
        }
    }

    /// A page followed by more data starting after `cursor`.
    #[must_use]
    pub fn more(items: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            items,
            cursor: Some(cursor.into()),
            has_next: true,
        }
    }

    /// Convert the items of this page, keeping its cursor.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            cursor: self.cursor,
            has_next: self.has_next,
        }
    }
}

/// Drains a cursor-paginated source through an injected page fetch.
///
/// `fetch` receives the `after` cursor (`None` for the first page) and
/// returns a future resolving to the next [`Page`]. Pages are requested one
/// at a time; the next request is not issued until the previous page has
/// been processed.
///
/// Each aggregator is consumed by the walk, so cursor state is never shared
/// between two walks.
#[derive(Debug)]
pub struct PageAggregator<F> {
    fetch: F,
}

impl<F> PageAggregator<F> {
    /// Create an aggregator around a page fetch.
    #[must_use]
    pub const fn new(fetch: F) -> Self {
        Self { fetch }
    }

    /// Fetch every page and concatenate the items in fetch order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the page fetch. Items from pages
    /// fetched before the failure are discarded.
    pub async fn collect<T, E, Fut>(self) -> Result<Vec<T>, E>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>>,
    {
        let mut results = Vec::new();
        self.walk(|item| {
            results.push(item);
            ControlFlow::Continue(())
        })
        .await?;
        Ok(results)
    }

    /// Walk pages until an item satisfies `predicate`.
    ///
    /// No page after the one containing the match is requested.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the page fetch.
    pub async fn find<T, E, Fut, P>(self, mut predicate: P) -> Result<Option<T>, E>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>>,
        P: FnMut(&T) -> bool,
    {
        let mut found = None;
        self.walk(|item| {
            if predicate(&item) {
                found = Some(item);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await?;
        Ok(found)
    }

    async fn walk<T, E, Fut, V>(mut self, mut visit: V) -> Result<(), E>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>>,
        V: FnMut(T) -> ControlFlow<()>,
    {
        let mut after: Option<String> = None;
        let mut seen = HashSet::new();
        let mut page_number: usize = 0;

        loop {
            page_number += 1;
            let Page {
                items,
                cursor,
                has_next,
            } = (self.fetch)(after.clone()).await?;

            debug!(
                page = page_number,
                items = items.len(),
                has_next,
                "Fetched page"
            );

            for item in items {
                if visit(item).is_break() {
                    debug!(page = page_number, "Stopped walk early");
                    return Ok(());
                }
            }

            if !has_next {
                return Ok(());
            }

            match cursor.filter(|c| !c.is_empty()) {
                None => {
                    warn!(
                        page = page_number,
                        "Page reported more results without a cursor; stopping"
                    );
                    return Ok(());
                }
                Some(next) if seen.contains(&next) => {
                    warn!(
                        page = page_number,
                        cursor = %next,
                        "Cursor was already requested; stopping"
                    );
                    return Ok(());
                }
                Some(next) => {
                    seen.insert(next.clone());
                    after = Some(next);
                }
            }
        }
    }
}
