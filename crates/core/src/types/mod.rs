//! Core types for Curator.
//!
//! This module provides type-safe wrappers for the catalog and rule concepts
//! shared between the Admin API client and the rule evaluator.

pub mod catalog;
pub mod id;
pub mod rule;

pub use catalog::{CatalogItem, DEFAULT_MIN_PRICE};
pub use id::{CollectionId, FileId, ProductId};
pub use rule::{Combinator, Rule, RuleColumn, RuleDraft, RuleRelation, rules_from_drafts};
