//! Product type conversion functions.

use curator_core::{CatalogItem, DEFAULT_MIN_PRICE, ProductId};

use super::super::queries::ProductFields;

/// Convert a product into the item shape the rule evaluator reads.
///
/// Missing vendor and type become empty strings; a product without variant
/// pricing gets a minimum price of `"0"`.
pub fn convert_product(product: ProductFields) -> CatalogItem {
    CatalogItem {
        id: Some(ProductId::parse(&product.id)),
        title: product.title,
        product_type: product.product_type.unwrap_or_default(),
        vendor: product.vendor.unwrap_or_default(),
        min_price: product
            .price_range_v2
            .and_then(|range| range.min_variant_price)
            .map_or_else(|| DEFAULT_MIN_PRICE.to_owned(), |money| money.amount),
        tags: product.tags,
        handle: product.handle,
        image_url: product.featured_image.map(|image| image.url),
    }
}
