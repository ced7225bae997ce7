//! Collection type conversion functions.

use curator_core::{CollectionId, Rule, RuleSet};

use super::super::queries::get_collections;
use crate::shopify::types::{CollectionNode, CollectionSummary};

// =============================================================================
// GetCollections conversions
// =============================================================================

/// Convert a collection, resolving its subcategories and parent from the
/// `custom` metafields.
pub fn convert_collection(collection: get_collections::CollectionNode) -> CollectionNode {
    let subcategories = collection
        .subcategories
        .and_then(|m| m.references)
        .map(|refs| refs.nodes.iter().filter_map(convert_reference).collect())
        .unwrap_or_default();

    let parent_collection_id = collection
        .parent_collection
        .and_then(|m| m.value)
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(CollectionId::parse);

    CollectionNode {
        id: CollectionId::parse(&collection.id),
        title: collection.title,
        handle: collection.handle,
        image_url: collection.image.map(|image| image.url),
        rule_set: collection.rule_set.map(convert_rule_set),
        subcategories,
        parent_collection_id,
    }
}

/// Convert Shopify's `ruleSet` into an evaluable [`RuleSet`].
pub fn convert_rule_set(rule_set: get_collections::RuleSetFields) -> RuleSet {
    RuleSet::from_shopify(
        rule_set
            .rules
            .into_iter()
            .map(|r| Rule::new(r.column, r.relation, r.condition))
            .collect(),
        rule_set.applied_disjunctively,
    )
}

fn convert_reference(reference: &get_collections::ReferenceNode) -> Option<CollectionSummary> {
    let id = reference.id.as_deref()?;
    Some(CollectionSummary {
        id: CollectionId::parse(id),
        title: reference.title.clone().unwrap_or_default(),
        handle: reference.handle.clone().unwrap_or_default(),
        image_url: reference.image.as_ref().map(|image| image.url.clone()),
    })
}
