//! Product read operations for the Admin API.

use curator_core::{CatalogItem, Page};
use tracing::instrument;

use super::{
    AdminClient, AdminShopifyError,
    conversions::{convert_connection, convert_product},
    queries::{GetProducts, get_products},
};

impl AdminClient {
    /// Get one page of store products in Shopify's default order.
    ///
    /// # Arguments
    ///
    /// * `first` - Number of products to return (1..=250)
    /// * `after` - Cursor for pagination
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn products_page(
        &self,
        first: i64,
        after: Option<String>,
    ) -> Result<Page<CatalogItem>, AdminShopifyError> {
        let variables = get_products::Variables { first, after };

        let response = self.execute::<GetProducts>(variables).await?;

        Ok(convert_connection(response.products, |p| {
            Some(convert_product(p))
        }))
    }
}
