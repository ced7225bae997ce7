//! Shopify Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **The Admin API access token has full read/write access to the store.**
//! It is held in a `SecretString` and never logged.
//!
//! # Architecture
//!
//! - Query documents are hand-written GraphQL, sent through
//!   `graphql_client`'s `GraphQLQuery`/`QueryBody` envelope
//! - Only the fields the collection tools need are requested
//! - Connection queries are exposed as single-page fetches; draining them is
//!   done with [`curator_core::PageAggregator`] in [`crate::services`]
//!
//! # Example
//!
//! ```rust,ignore
//! use curator_admin::shopify::AdminClient;
//!
//! let client = AdminClient::new(&config.shopify)?;
//!
//! // First page of collections
//! let page = client.collections_page(None).await?;
//!
//! // Products of one collection, one page at a time
//! let page = client
//!     .collection_products_page(&CollectionId::parse("123"), page.cursor)
//!     .await?;
//! ```

mod admin;
pub mod types;

pub use admin::AdminClient;
pub use types::*;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Client could not be built from the configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl AdminShopifyError {
    /// Single GraphQL error with only a message.
    pub(crate) fn graphql_message(message: impl Into<String>) -> Self {
        Self::GraphQL(vec![GraphQLError {
            message: message.into(),
            locations: vec![],
            path: vec![],
        }])
    }
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<String>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| {
            if e.path.is_empty() {
                e.message.clone()
            } else {
                format!("{} (at {})", e.message, e.path.join("."))
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_shopify_error_display() {
        let err = AdminShopifyError::NotFound("collection-123".to_string());
        assert_eq!(err.to_string(), "Not found: collection-123");
    }

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError {
                message: "Field not found".to_string(),
                locations: vec![],
                path: vec![],
            },
            GraphQLError {
                message: "Invalid ID".to_string(),
                locations: vec![GraphQLErrorLocation { line: 2, column: 3 }],
                path: vec!["collection".to_string(), "products".to_string()],
            },
        ];
        let err = AdminShopifyError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Invalid ID (at collection.products)"
        );
    }

    #[test]
    fn test_graphql_message() {
        let err = AdminShopifyError::graphql_message("No data in response");
        assert_eq!(err.to_string(), "GraphQL errors: No data in response");
    }

    #[test]
    fn test_rate_limited_error() {
        let err = AdminShopifyError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_unauthorized_error() {
        let err = AdminShopifyError::Unauthorized("Invalid token".to_string());
        assert_eq!(err.to_string(), "Unauthorized: Invalid token");
    }
}
