//! Type conversions from GraphQL response types to domain types.
//!
//! These functions convert the hand-written query response shapes
//! into our clean domain types.

mod collections;
mod files;
mod products;

pub use collections::convert_collection;
pub use files::convert_file;
pub use products::convert_product;

use curator_core::Page;

use super::queries::{Connection, PageInfoFields};

/// Convert a connection into a [`Page`], converting each node with `convert`.
///
/// Nodes for which `convert` returns `None` are dropped; the page's cursor is
/// kept either way.
pub fn convert_connection<N, T>(
    connection: Connection<N>,
    convert: impl FnMut(N) -> Option<T>,
) -> Page<T> {
    let Connection { nodes, page_info } = connection;
    let PageInfoFields {
        has_next_page,
        end_cursor,
    } = page_info;

    Page {
        items: nodes.into_iter().filter_map(convert).collect(),
        cursor: end_cursor,
        has_next: has_next_page,
    }
}
