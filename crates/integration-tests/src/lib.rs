//! Integration tests for Curator.
//!
//! # Running Tests
//!
//! ```bash
//! # Offline tests
//! cargo test -p curator-integration-tests
//!
//! # Live tests (needs SHOPIFY_STORE and SHOPIFY_ADMIN_ACCESS_TOKEN)
//! cargo test -p curator-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `rule_preview` - Rule evaluation and the preview service
//! - `catalog_paging` - Complete listings over a paged in-memory store
//! - `live_admin` - Read-only calls against a real development store
//!
//! This library holds the shared fixtures: a sample catalog and
//! [`InMemoryStore`], a [`CatalogSource`] that pages over fixed data the way
//! the Admin API does.

use std::future::{Future, ready};
use std::sync::Mutex;

use curator_admin::services::CatalogSource;
use curator_admin::shopify::{AdminShopifyError, CollectionNode, FileImage};
use curator_core::{CatalogItem, CollectionId, Page};

/// Products used across the rule tests.
#[must_use]
pub fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Red Shoe")
            .with_type("Shoes")
            .with_vendor("Nike")
            .with_tags(["Red", "sale"])
            .with_min_price("25.00"),
        CatalogItem::new("Blue Hat")
            .with_type("Hats")
            .with_vendor("NIKE")
            .with_tags(["blue"])
            .with_min_price("10.00"),
        CatalogItem::new("Green Scarf")
            .with_type("Accessories")
            .with_vendor("Acme")
            .with_tags(["green", "sale"])
            .with_min_price("19.99"),
        CatalogItem::new("Gift Card"),
    ]
}

/// A [`CatalogSource`] serving fixed data in pages of `page_size`.
///
/// Cursors are the stringified offset of the next page. Every call is
/// counted so tests can assert how far a walk went.
pub struct InMemoryStore {
    pub collections: Vec<CollectionNode>,
    pub products: Vec<CatalogItem>,
    pub collection_products: Vec<(CollectionId, Vec<CatalogItem>)>,
    pub files: Vec<FileImage>,
    pub page_size: usize,
    calls: Mutex<usize>,
}

impl InMemoryStore {
    #[must_use]
    pub const fn new(page_size: usize) -> Self {
        Self {
            collections: Vec::new(),
            products: Vec::new(),
            collection_products: Vec::new(),
            files: Vec::new(),
            page_size,
            calls: Mutex::new(0),
        }
    }

    /// Number of page requests served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.lock().map_or(0, |calls| *calls)
    }

    fn page<T: Clone>(&self, items: &[T], size: usize, after: Option<&str>) -> Page<T> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls += 1;
        }

        let start = after.and_then(|c| c.parse::<usize>().ok()).unwrap_or(0);
        let end = start.saturating_add(size).min(items.len());
        let slice = items.get(start..end).unwrap_or_default().to_vec();

        if end < items.len() {
            Page::more(slice, end.to_string())
        } else {
            Page::last(slice)
        }
    }
}

impl CatalogSource for InMemoryStore {
    fn collections_page(
        &self,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CollectionNode>, AdminShopifyError>> + Send {
        ready(Ok(self.page(
            &self.collections,
            self.page_size,
            after.as_deref(),
        )))
    }

    fn collection_products_page(
        &self,
        id: &CollectionId,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send {
        let result = self
            .collection_products
            .iter()
            .find(|(collection, _)| collection == id)
            .map(|(_, products)| self.page(products, self.page_size, after.as_deref()))
            .ok_or_else(|| AdminShopifyError::NotFound(format!("Collection {id}")));
        ready(result)
    }

    fn products_page(
        &self,
        first: i64,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send {
        let size = usize::try_from(first).unwrap_or(0);
        ready(Ok(self.page(&self.products, size, after.as_deref())))
    }

    fn files_page(
        &self,
        _query: &str,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<FileImage>, AdminShopifyError>> + Send {
        ready(Ok(self.page(&self.files, self.page_size, after.as_deref())))
    }
}
