//! File (media) read operations for the Admin API.

use curator_core::Page;
use tracing::instrument;

use super::{
    AdminClient, AdminShopifyError,
    conversions::{convert_connection, convert_file},
    queries::{GetFiles, get_files},
};
use crate::shopify::types::FileImage;

/// Page size for file searches.
pub const FILES_PAGE_SIZE: i64 = 50;

impl AdminClient {
    /// Get one page of media images matching a file search query.
    ///
    /// Files that are not media images are left out of the page.
    ///
    /// # Arguments
    ///
    /// * `query` - Shopify file search query (a file ID works as a query)
    /// * `after` - Cursor for pagination
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn files_page(
        &self,
        query: &str,
        after: Option<String>,
    ) -> Result<Page<FileImage>, AdminShopifyError> {
        let variables = get_files::Variables {
            query: query.to_string(),
            first: FILES_PAGE_SIZE,
            after,
        };

        let response = self.execute::<GetFiles>(variables).await?;

        Ok(convert_connection(response.files, convert_file))
    }
}
