//! Collection domain types.

use curator_core::{CollectionId, RuleSet};
use serde::{Deserialize, Serialize};

/// Metafield namespace holding the collection tree.
pub const METAFIELD_NAMESPACE: &str = "custom";

/// Metafield key listing a collection's subcategories (collection references).
pub const SUBCATEGORY_KEY: &str = "subcat";

/// Metafield key holding a collection's parent collection ID.
pub const PARENT_COLLECTION_KEY: &str = "parent_collection";

/// Minimal view of a collection, as shown in pickers and subcategory lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    /// Shopify collection ID.
    pub id: CollectionId,
    /// Collection title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// Collection image URL.
    pub image_url: Option<String>,
}

/// A collection with its place in the collection tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionNode {
    /// Shopify collection ID.
    pub id: CollectionId,
    /// Collection title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// Collection image URL.
    pub image_url: Option<String>,
    /// Smart collection rules; `None` for manual collections.
    pub rule_set: Option<RuleSet>,
    /// Collections referenced by the `custom.subcat` metafield.
    pub subcategories: Vec<CollectionSummary>,
    /// Parent from the `custom.parent_collection` metafield, normalized to a GID.
    pub parent_collection_id: Option<CollectionId>,
}

impl CollectionNode {
    /// Whether this collection has any subcategories.
    #[must_use]
    pub fn has_subcategories(&self) -> bool {
        !self.subcategories.is_empty()
    }

    /// Whether this is a smart (rule-based) collection.
    #[must_use]
    pub const fn is_smart(&self) -> bool {
        self.rule_set.is_some()
    }

    /// Summary view of this collection.
    #[must_use]
    pub fn summary(&self) -> CollectionSummary {
        CollectionSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            handle: self.handle.clone(),
            image_url: self.image_url.clone(),
        }
    }
}
