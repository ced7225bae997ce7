//! Offline rule evaluation.

use std::path::Path;

use curator_core::{CatalogItem, Combinator, RuleDraft, RuleSet, rules_from_drafts};
use serde::Serialize;

use super::{CommandError, print_json, read_json};

/// Result of an offline rule check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleCheck {
    matched: Vec<CatalogItem>,
    rule_set: RuleSet,
    rejected_rules: usize,
    checked: usize,
}

/// Evaluate the drafts in `rules_path` against the items in `items_path`.
pub fn run(rules_path: &Path, items_path: &Path, any: bool) -> Result<(), CommandError> {
    let drafts: Vec<RuleDraft> = read_json(rules_path)?;
    let items: Vec<CatalogItem> = read_json(items_path)?;

    print_json(&check(drafts, items, Combinator::from_disjunctive(any)))
}

fn check(drafts: Vec<RuleDraft>, items: Vec<CatalogItem>, combinator: Combinator) -> RuleCheck {
    let (rules, rejected_rules) = rules_from_drafts(drafts);
    let rule_set = RuleSet::new(rules, combinator);
    let checked = items.len();
    let matched = rule_set.filter(items);

    tracing::info!(checked, matched = matched.len(), "Rules checked");

    RuleCheck {
        matched,
        rule_set,
        rejected_rules,
        checked,
    }
}
