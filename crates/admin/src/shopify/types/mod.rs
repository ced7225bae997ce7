//! Domain types for Shopify Admin API.
//!
//! These types provide a clean, ergonomic API separate from the raw
//! query response shapes in `admin::queries`.

pub mod collection;
pub mod file;

pub use collection::*;
pub use file::*;
