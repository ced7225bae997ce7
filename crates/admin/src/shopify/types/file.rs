//! File (media image) types.

use curator_core::FileId;
use serde::{Deserialize, Serialize};

/// A `MediaImage` file and its generated preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileImage {
    /// Shopify file ID.
    pub id: FileId,
    /// Preview image URL. `None` while Shopify is still processing the upload.
    pub preview_url: Option<String>,
}
