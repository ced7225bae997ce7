//! Curator Core - Shared types and algorithms.
//!
//! This crate holds the parts of Curator that never talk to Shopify. Both
//! other crates build on it:
//! - `admin` - Shopify Admin API client and collection services
//! - `cli` - Command-line entry point and composition root
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no HTTP
//! clients and no filesystem access. Page fetching is injected by the caller
//! as an async closure, so the pagination walker can be driven by the Admin
//! API in production and by in-memory pages in tests.
//!
//! # Modules
//!
//! - [`types`] - Shopify GIDs, catalog items, and smart-collection rules
//! - [`rules`] - Rule evaluation (AND/OR) against catalog items
//! - [`pagination`] - Cursor-pagination walker with a termination guard

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pagination;
pub mod rules;
pub mod types;

pub use pagination::{Page, PageAggregator};
pub use rules::{RuleSet, compare_values, filter_items, match_tag, rule_matches};
pub use types::*;
