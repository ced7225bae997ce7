//! Collection, product and file listing commands.

use curator_admin::services::CollectionService;
use curator_core::{CollectionId, FileId};

use super::{CommandError, connect, print_json};

/// Print every collection, or the parent picker list when `exclude` is set.
pub async fn list(exclude: Option<&str>) -> Result<(), CommandError> {
    let (_, client) = connect()?;
    let service = CollectionService::new(client);

    match exclude {
        Some(current) => {
            let others = service
                .other_collections(&CollectionId::parse(current))
                .await?;
            print_json(&others)
        }
        None => print_json(&service.collections_with_subcategories().await?),
    }
}

/// Print every product in a collection.
pub async fn products(collection: &str) -> Result<(), CommandError> {
    let (_, client) = connect()?;

    let products = CollectionService::new(client)
        .collection_products(&CollectionId::parse(collection))
        .await?;
    print_json(&products)
}

/// Print the lookup result for an uploaded image.
pub async fn file(id: &str) -> Result<(), CommandError> {
    let (_, client) = connect()?;

    let lookup = CollectionService::new(client)
        .find_file_image(&FileId::parse(id))
        .await?;
    if !lookup.is_ready() {
        tracing::info!("File is still processing; try again shortly");
    }
    print_json(&lookup)
}
