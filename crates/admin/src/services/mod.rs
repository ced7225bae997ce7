//! Business logic services for the collection tools.
//!
//! # Services
//!
//! - `collections` - Collection tree, product listings and file lookup
//! - `preview` - Smart-collection rule preview against a product sample
//!
//! Both services are generic over [`CatalogSource`] and default to
//! [`AdminClient`](crate::shopify::AdminClient).

pub mod collections;
pub mod preview;
mod source;

pub use collections::{CollectionListing, CollectionService, FileLookup};
pub use preview::{DEFAULT_SAMPLE_SIZE, PreviewService, RulePreview};
pub use source::CatalogSource;
