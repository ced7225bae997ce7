//! File type conversion functions.

use curator_core::FileId;

use super::super::queries::get_files;
use crate::shopify::types::FileImage;

/// Convert a file node. Returns `None` for files that are not media images.
pub fn convert_file(file: get_files::FileNode) -> Option<FileImage> {
    let id = file.id?;
    Some(FileImage {
        id: FileId::parse(&id),
        preview_url: file
            .preview
            .and_then(|preview| preview.image)
            .map(|image| image.url),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_convert_processed_image() {
        let node: get_files::FileNode = serde_json::from_value(json!({
            "id": "gid://shopify/MediaImage/55",
            "preview": { "image": { "url": "https://cdn.shopify.com/banner.jpg" } }
        }))
        .unwrap();

        let file = convert_file(node).unwrap();

        assert_eq!(file.id.as_str(), "gid://shopify/MediaImage/55");
        assert_eq!(
            file.preview_url.as_deref(),
            Some("https://cdn.shopify.com/banner.jpg")
        );
    }

    #[test]
    fn test_convert_image_still_processing() {
        let node: get_files::FileNode = serde_json::from_value(json!({
            "id": "gid://shopify/MediaImage/56",
            "preview": { "image": null }
        }))
        .unwrap();

        assert!(convert_file(node).unwrap().preview_url.is_none());
    }

    #[test]
    fn test_non_image_file_is_skipped() {
        let node: get_files::FileNode = serde_json::from_value(json!({})).unwrap();
        assert!(convert_file(node).is_none());
    }
}
