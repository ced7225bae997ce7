//! Collection read operations for the Admin API.

use curator_core::{CatalogItem, CollectionId, Page};
use tracing::instrument;

use super::{
    AdminClient, AdminShopifyError,
    conversions::{convert_collection, convert_connection, convert_product},
    queries::{GetCollectionProducts, GetCollections, get_collection_products, get_collections},
};
use crate::shopify::types::{
    CollectionNode, METAFIELD_NAMESPACE, PARENT_COLLECTION_KEY, SUBCATEGORY_KEY,
};

/// Page size for collection listings.
///
/// Shopify rejects a query whose requested cost exceeds 1000 points, and
/// each collection on the page carries up to `SUBCATEGORY_LIMIT` references.
pub const COLLECTIONS_PAGE_SIZE: i64 = 15;

/// Subcategory references read per collection.
pub const SUBCATEGORY_LIMIT: i64 = 20;

/// Page size for the products of a collection.
pub const COLLECTION_PRODUCTS_PAGE_SIZE: i64 = 100;

impl AdminClient {
    /// Get one page of collections, with subcategories and parent resolved.
    ///
    /// # Arguments
    ///
    /// * `after` - Cursor from the previous page, `None` for the first page
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn collections_page(
        &self,
        after: Option<String>,
    ) -> Result<Page<CollectionNode>, AdminShopifyError> {
        let variables = get_collections::Variables {
            first: COLLECTIONS_PAGE_SIZE,
            after,
            namespace: METAFIELD_NAMESPACE.to_string(),
            subcategory_key: SUBCATEGORY_KEY.to_string(),
            parent_key: PARENT_COLLECTION_KEY.to_string(),
            subcategory_limit: SUBCATEGORY_LIMIT,
        };

        let response = self.execute::<GetCollections>(variables).await?;

        Ok(convert_connection(response.collections, |c| {
            Some(convert_collection(c))
        }))
    }

    /// Get one page of the products in a collection.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the collection does not exist, or an error if
    /// the API request fails.
    #[instrument(skip(self), fields(collection_id = %id))]
    pub async fn collection_products_page(
        &self,
        id: &CollectionId,
        after: Option<String>,
    ) -> Result<Page<CatalogItem>, AdminShopifyError> {
        let variables = get_collection_products::Variables {
            id: id.to_string(),
            first: COLLECTION_PRODUCTS_PAGE_SIZE,
            after,
        };

        let response = self.execute::<GetCollectionProducts>(variables).await?;

        let collection = response
            .collection
            .ok_or_else(|| AdminShopifyError::NotFound(format!("Collection {id}")))?;

        Ok(convert_connection(collection.products, |p| {
            Some(convert_product(p))
        }))
    }
}
