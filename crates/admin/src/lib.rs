//! Curator Shopify Admin library.
//!
//! Reads collections, products and files from the Shopify Admin API and
//! drives the smart-collection rule preview.
//!
//! # Security
//!
//! This crate holds HIGH PRIVILEGE access:
//! - Shopify Admin API access token (full store access)
//!
//! The token is kept in a `SecretString` and never logged.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod services;
pub mod shopify;

pub use config::{AdminConfig, ConfigError, LogFormat, ShopifyAdminConfig};
pub use error::AppError;
