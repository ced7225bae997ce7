//! Collection tree and product listings.
//!
//! Every listing here drains a Shopify connection with
//! [`PageAggregator`], so callers always see complete lists.

use curator_core::{CatalogItem, CollectionId, FileId, PageAggregator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::CatalogSource;
use crate::error::AppError;
use crate::shopify::{AdminClient, CollectionNode, CollectionSummary};

/// A collection as listed in the collection tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionListing {
    #[serde(flatten)]
    pub collection: CollectionNode,
    pub has_subcategories: bool,
    /// Whether the collection is rule-based and can be previewed.
    pub is_smart: bool,
}

impl From<CollectionNode> for CollectionListing {
    fn from(collection: CollectionNode) -> Self {
        Self {
            has_subcategories: collection.has_subcategories(),
            is_smart: collection.is_smart(),
            collection,
        }
    }
}

/// Outcome of looking up an uploaded image file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileLookup {
    /// The file exists and its preview image is generated.
    Ready {
        #[serde(rename = "imageUrl")]
        image_url: String,
    },
    /// The file is not visible yet, or its image is still being generated.
    Processing,
}

impl FileLookup {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }
}

/// Collection tree and product listing service.
#[derive(Debug, Clone)]
pub struct CollectionService<S = AdminClient> {
    source: S,
}

impl<S: CatalogSource> CollectionService<S> {
    /// Create a new collection service.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Every collection in the store, in Shopify order.
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error.
    #[instrument(skip(self))]
    pub async fn all_collections(&self) -> Result<Vec<CollectionNode>, AppError> {
        let collections = PageAggregator::new(|after| self.source.collections_page(after))
            .collect()
            .await?;

        info!(count = collections.len(), "Fetched all collections");
        Ok(collections)
    }

    /// Every collection with its subcategories, flagged with
    /// `hasSubcategories` and `isSmart`.
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error.
    pub async fn collections_with_subcategories(
        &self,
    ) -> Result<Vec<CollectionListing>, AppError> {
        Ok(self
            .all_collections()
            .await?
            .into_iter()
            .map(CollectionListing::from)
            .collect())
    }

    /// Every collection except `current`, for picking a parent collection.
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error.
    #[instrument(skip(self), fields(current = %current))]
    pub async fn other_collections(
        &self,
        current: &CollectionId,
    ) -> Result<Vec<CollectionSummary>, AppError> {
        Ok(self
            .all_collections()
            .await?
            .iter()
            .filter(|c| &c.id != current)
            .map(CollectionNode::summary)
            .collect())
    }

    /// Find one collection by ID, stopping at the page that contains it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no collection has this ID, or the first page
    /// fetch error.
    #[instrument(skip(self), fields(collection_id = %id))]
    pub async fn find_collection(&self, id: &CollectionId) -> Result<CollectionNode, AppError> {
        PageAggregator::new(|after| self.source.collections_page(after))
            .find(|c: &CollectionNode| &c.id == id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Collection {id}")))
    }

    /// Every product in a collection, in the collection's sort order.
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error, including `NotFound` when the
    /// collection does not exist.
    #[instrument(skip(self), fields(collection_id = %id))]
    pub async fn collection_products(
        &self,
        id: &CollectionId,
    ) -> Result<Vec<CatalogItem>, AppError> {
        let products =
            PageAggregator::new(|after| self.source.collection_products_page(id, after))
                .collect()
                .await?;

        info!(count = products.len(), "Fetched collection products");
        Ok(products)
    }

    /// The parent of `collection`, resolved to a full collection.
    ///
    /// Returns `None` when no parent is set. A parent ID that matches no
    /// collection is also `None`; the metafield may point at a deleted
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error.
    pub async fn parent_collection(
        &self,
        collection: &CollectionNode,
    ) -> Result<Option<CollectionNode>, AppError> {
        let Some(parent_id) = Self::parent_collection_id(collection) else {
            return Ok(None);
        };

        match self.find_collection(parent_id).await {
            Ok(parent) => Ok(Some(parent)),
            Err(AppError::NotFound(_)) => {
                debug!(parent = %parent_id, "Parent collection no longer exists");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// The normalized parent collection ID of `collection`, if any.
    #[must_use]
    pub const fn parent_collection_id(collection: &CollectionNode) -> Option<&CollectionId> {
        collection.parent_collection_id.as_ref()
    }

    /// Look up an uploaded image by file ID.
    ///
    /// Searches the store's files and stops at the first page containing the
    /// file. Newly uploaded files can take a moment to appear and to get a
    /// preview image; both cases report [`FileLookup::Processing`].
    ///
    /// # Errors
    ///
    /// Returns the first page fetch error.
    #[instrument(skip(self), fields(file_id = %file_id))]
    pub async fn find_file_image(&self, file_id: &FileId) -> Result<FileLookup, AppError> {
        let query = file_id.as_str();
        let file = PageAggregator::new(|after| self.source.files_page(query, after))
            .find(|f: &crate::shopify::FileImage| &f.id == file_id)
            .await?;

        let lookup = match file.and_then(|f| f.preview_url) {
            Some(image_url) => FileLookup::Ready { image_url },
            None => FileLookup::Processing,
        };
        debug!(ready = lookup.is_ready(), "File lookup finished");
        Ok(lookup)
    }
}
