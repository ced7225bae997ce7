//! Catalog items as seen by the rule evaluator.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Price used when a product carries no variant pricing.
pub const DEFAULT_MIN_PRICE: &str = "0";

fn default_min_price() -> String {
    DEFAULT_MIN_PRICE.to_owned()
}

/// A product reduced to the attributes smart-collection rules inspect.
///
/// Built by the Admin API adapter, which applies the defaults for missing
/// attributes (empty strings, `"0"` price, no tags). Rules never look at
/// `id`, `handle` or `image_url`; those are carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Shopify product ID, if the item came from Shopify.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Product title.
    #[serde(default)]
    pub title: String,
    /// Product type (Shopify `productType`).
    #[serde(default, rename = "type", alias = "productType")]
    pub product_type: String,
    /// Vendor name.
    #[serde(default)]
    pub vendor: String,
    /// Lowest variant price as a decimal string.
    #[serde(default = "default_min_price")]
    pub min_price: String,
    /// Tags in Shopify order. Duplicates are allowed.
    #[serde(default)]
    pub tags: Vec<String>,
    /// URL handle.
    #[serde(default)]
    pub handle: String,
    /// Featured image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Default for CatalogItem {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            product_type: String::new(),
            vendor: String::new(),
            min_price: default_min_price(),
            tags: Vec::new(),
            handle: String::new(),
            image_url: None,
        }
    }
}

impl CatalogItem {
    /// Create an item with just a title; every other attribute is defaulted.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }

    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    #[must_use]
    pub fn with_min_price(mut self, min_price: impl Into<String>) -> Self {
        self.min_price = min_price.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_attributes_default() {
        let item: CatalogItem = serde_json::from_value(json!({ "title": "Blue Hat" })).unwrap();
        assert_eq!(item.title, "Blue Hat");
        assert_eq!(item.product_type, "");
        assert_eq!(item.vendor, "");
        assert_eq!(item.min_price, "0");
        assert!(item.tags.is_empty());
        assert!(item.id.is_none());
    }

    #[test]
    fn test_accepts_shopify_product_type_name() {
        let item: CatalogItem =
            serde_json::from_value(json!({ "title": "Tee", "productType": "Shirts" })).unwrap();
        assert_eq!(item.product_type, "Shirts");
    }

    #[test]
    fn test_serializes_with_rule_attribute_names() {
        let item = CatalogItem::new("Red Shoe")
            .with_type("Shoes")
            .with_min_price("10.00")
            .with_tags(["red", "shoe"]);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "Shoes");
        assert_eq!(value["minPrice"], "10.00");
        assert_eq!(value["tags"], json!(["red", "shoe"]));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_default_price() {
        assert_eq!(CatalogItem::default().min_price, DEFAULT_MIN_PRICE);
    }
}
