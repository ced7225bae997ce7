//! Smart-collection rule preview.
//!
//! Shows which products a rule set would select before the merchant saves
//! the collection. Rules are evaluated locally against one page of store
//! products (the preview sample), not against the whole catalog.

use curator_core::{CatalogItem, Combinator, Rule, RuleDraft, RuleSet, rules_from_drafts};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::CatalogSource;
use crate::error::AppError;
use crate::shopify::AdminClient;

/// Default number of products fetched for a preview.
pub const DEFAULT_SAMPLE_SIZE: i64 = 50;

/// Note attached to a preview that had no valid rule to evaluate.
pub const NO_VALID_RULES_NOTE: &str = "No valid rules to preview";

/// Result of a rule preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulePreview {
    /// Sampled products the rules select, in Shopify order.
    pub products: Vec<CatalogItem>,
    /// Rules that were evaluated.
    pub applied_rules: Vec<Rule>,
    /// Number of drafts dropped for a missing column, relation or condition.
    pub rejected_rules: usize,
    /// How the applied rules were combined.
    pub combinator: Combinator,
    /// Number of products the rules were evaluated against.
    pub sampled: usize,
    /// Why the preview is empty, when it was not evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Rule preview service.
#[derive(Debug, Clone)]
pub struct PreviewService<S = AdminClient> {
    source: S,
    sample_size: i64,
}

impl<S: CatalogSource> PreviewService<S> {
    /// Create a preview service sampling `sample_size` products per preview.
    #[must_use]
    pub const fn new(source: S, sample_size: i64) -> Self {
        Self {
            source,
            sample_size,
        }
    }

    /// Preview rule drafts as submitted by the collection form.
    ///
    /// Incomplete drafts are dropped. When none remain, an empty preview is
    /// returned without contacting Shopify.
    ///
    /// # Errors
    ///
    /// Returns an error if the product sample cannot be fetched.
    #[instrument(skip(self, drafts), fields(drafts = drafts.len(), combinator = %combinator))]
    pub async fn preview(
        &self,
        drafts: Vec<RuleDraft>,
        combinator: Combinator,
    ) -> Result<RulePreview, AppError> {
        let (rules, rejected) = rules_from_drafts(drafts);
        if rejected > 0 {
            debug!(rejected, "Dropped incomplete rule drafts");
        }

        let mut preview = self.preview_rule_set(RuleSet::new(rules, combinator)).await?;
        preview.rejected_rules = rejected;
        Ok(preview)
    }

    /// Preview an already-valid rule set, such as a saved collection's.
    ///
    /// # Errors
    ///
    /// Returns an error if the product sample cannot be fetched.
    pub async fn preview_rule_set(&self, rule_set: RuleSet) -> Result<RulePreview, AppError> {
        if rule_set.is_empty() {
            info!("No valid rules; skipping product fetch");
            return Ok(RulePreview {
                products: Vec::new(),
                applied_rules: Vec::new(),
                rejected_rules: 0,
                combinator: rule_set.combinator,
                sampled: 0,
                note: Some(NO_VALID_RULES_NOTE.to_string()),
            });
        }

        let sample = self.source.products_page(self.sample_size, None).await?;
        let sampled = sample.items.len();
        let products = rule_set.filter(sample.items);

        info!(
            sampled,
            matched = products.len(),
            rules = rule_set.rules.len(),
            "Rule preview evaluated"
        );

        Ok(RulePreview {
            products,
            applied_rules: rule_set.rules,
            rejected_rules: 0,
            combinator: rule_set.combinator,
            sampled,
            note: None,
        })
    }
}
