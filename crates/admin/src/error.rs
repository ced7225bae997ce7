//! Unified error handling for the collection services.

use thiserror::Error;

use crate::config::ConfigError;
use crate::shopify::AdminShopifyError;

/// Application-level error type for the collection services.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] AdminShopifyError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Whether retrying the same request later may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Shopify(AdminShopifyError::RateLimited(_) | AdminShopifyError::Http(_))
        )
    }
}
