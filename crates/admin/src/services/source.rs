//! Page-level catalog access used by the services.
//!
//! [`AdminClient`] is the production source. Services are generic over
//! [`CatalogSource`] so the paging and preview logic can run against
//! scripted pages in tests.

use std::future::Future;

use curator_core::{CatalogItem, CollectionId, Page};

use crate::shopify::{AdminClient, AdminShopifyError, CollectionNode, FileImage};

/// Single-page reads of the Shopify catalog.
pub trait CatalogSource {
    /// One page of collections.
    fn collections_page(
        &self,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CollectionNode>, AdminShopifyError>> + Send;

    /// One page of the products in a collection.
    fn collection_products_page(
        &self,
        id: &CollectionId,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send;

    /// One page of store products.
    fn products_page(
        &self,
        first: i64,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send;

    /// One page of media images matching a file search query.
    fn files_page(
        &self,
        query: &str,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<FileImage>, AdminShopifyError>> + Send;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn collections_page(
        &self,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CollectionNode>, AdminShopifyError>> + Send {
        (**self).collections_page(after)
    }

    fn collection_products_page(
        &self,
        id: &CollectionId,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send {
        (**self).collection_products_page(id, after)
    }

    fn products_page(
        &self,
        first: i64,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send {
        (**self).products_page(first, after)
    }

    fn files_page(
        &self,
        query: &str,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<FileImage>, AdminShopifyError>> + Send {
        (**self).files_page(query, after)
    }
}

impl CatalogSource for AdminClient {
    fn collections_page(
        &self,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CollectionNode>, AdminShopifyError>> + Send {
        Self::collections_page(self, after)
    }

    fn collection_products_page(
        &self,
        id: &CollectionId,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send {
        Self::collection_products_page(self, id, after)
    }

    fn products_page(
        &self,
        first: i64,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send {
        Self::products_page(self, first, after)
    }

    fn files_page(
        &self,
        query: &str,
        after: Option<String>,
    ) -> impl Future<Output = Result<Page<FileImage>, AdminShopifyError>> + Send {
        Self::files_page(self, query, after)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod testing {
    //! Scripted [`CatalogSource`] for service tests.

    use std::collections::VecDeque;
    use std::future::{Ready, ready};
    use std::sync::Mutex;

    use super::*;

    type Script<T> = Mutex<VecDeque<Result<Page<T>, AdminShopifyError>>>;

    /// A request the scripted source received.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Request {
        Collections(Option<String>),
        CollectionProducts(String, Option<String>),
        Products(i64, Option<String>),
        Files(String, Option<String>),
    }

    /// Serves queued pages per operation and records every request.
    ///
    /// An operation with no queued page left answers with `NotFound`.
    #[derive(Default)]
    pub struct ScriptedSource {
        pub collections: Script<CollectionNode>,
        pub collection_products: Script<CatalogItem>,
        pub products: Script<CatalogItem>,
        pub files: Script<FileImage>,
        pub requests: Mutex<Vec<Request>>,
    }

    impl ScriptedSource {
        pub fn requests(&self) -> Vec<Request> {
            self.requests.lock().unwrap().clone()
        }

        fn next<T>(
            &self,
            script: &Script<T>,
            request: Request,
        ) -> Ready<Result<Page<T>, AdminShopifyError>> {
            self.requests.lock().unwrap().push(request);
            ready(
                script
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(|| Err(AdminShopifyError::NotFound("script".to_string()))),
            )
        }
    }

    pub fn push<T>(script: &Script<T>, page: Result<Page<T>, AdminShopifyError>) {
        script.lock().unwrap().push_back(page);
    }

    impl CatalogSource for ScriptedSource {
        fn collections_page(
            &self,
            after: Option<String>,
        ) -> impl Future<Output = Result<Page<CollectionNode>, AdminShopifyError>> + Send
        {
            self.next(&self.collections, Request::Collections(after))
        }

        fn collection_products_page(
            &self,
            id: &CollectionId,
            after: Option<String>,
        ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send {
            self.next(
                &self.collection_products,
                Request::CollectionProducts(id.to_string(), after),
            )
        }

        fn products_page(
            &self,
            first: i64,
            after: Option<String>,
        ) -> impl Future<Output = Result<Page<CatalogItem>, AdminShopifyError>> + Send {
            self.next(&self.products, Request::Products(first, after))
        }

        fn files_page(
            &self,
            query: &str,
            after: Option<String>,
        ) -> impl Future<Output = Result<Page<FileImage>, AdminShopifyError>> + Send {
            self.next(&self.files, Request::Files(query.to_string(), after))
        }
    }
}
