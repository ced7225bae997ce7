//! Client-side smart-collection rule evaluation.
//!
//! Shopify has no API to preview which products a rule set would select, so
//! the collection editor approximates it here: each rule resolves an
//! attribute from the item and compares it against the rule's condition, and
//! the results are combined with AND or OR.
//!
//! # Semantics
//!
//! - An empty rule set matches nothing.
//! - Title, type, vendor and price comparisons are case-insensitive.
//! - Tag comparisons are case-sensitive and look at each tag verbatim.
//! - `GREATER_THAN`/`LESS_THAN` compare as `f64`; an operand that does not
//!   parse becomes NaN, so the comparison is `false`. Operands are compared
//!   lower-cased, and the words `inf`, `infinity` and `nan` are not numbers.
//! - Unknown columns or relations evaluate to `false`. Nothing here errors.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::types::{CatalogItem, Combinator, Rule, RuleColumn, RuleRelation};

/// A list of rules and the way they combine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rules in display order. Order does not affect evaluation.
    pub rules: Vec<Rule>,
    /// AND or OR.
    #[serde(default)]
    pub combinator: Combinator,
}

impl RuleSet {
    /// Create a rule set.
    #[must_use]
    pub const fn new(rules: Vec<Rule>, combinator: Combinator) -> Self {
        Self { rules, combinator }
    }

    /// Build from Shopify's `ruleSet { rules appliedDisjunctively }`.
    #[must_use]
    pub const fn from_shopify(rules: Vec<Rule>, applied_disjunctively: bool) -> Self {
        Self::new(rules, Combinator::from_disjunctive(applied_disjunctively))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether a single item satisfies this rule set.
    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        item_matches(item, &self.rules, self.combinator)
    }

    /// Stable filter of `items` down to those this rule set selects.
    #[must_use]
    pub fn filter<I>(&self, items: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Borrow<CatalogItem>,
    {
        filter_items(items, &self.rules, self.combinator)
    }
}

/// Keep the items that satisfy `rules` under `combinator`, in input order.
///
/// Works on owned items (`Vec<CatalogItem>`) and borrowed ones
/// (`&[CatalogItem]`, yielding `Vec<&CatalogItem>`).
pub fn filter_items<I>(items: I, rules: &[Rule], combinator: Combinator) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Borrow<CatalogItem>,
{
    if rules.is_empty() {
        return Vec::new();
    }

    items
        .into_iter()
        .filter(|item| item_matches(Borrow::<CatalogItem>::borrow(item), rules, combinator))
        .collect()
}

fn item_matches(item: &CatalogItem, rules: &[Rule], combinator: Combinator) -> bool {
    if rules.is_empty() {
        return false;
    }

    match combinator {
        Combinator::Or => rules.iter().any(|rule| rule_matches(item, rule)),
        Combinator::And => rules.iter().all(|rule| rule_matches(item, rule)),
    }
}

/// Whether `item` satisfies a single rule.
#[must_use]
pub fn rule_matches(item: &CatalogItem, rule: &Rule) -> bool {
    let value = match &rule.column {
        RuleColumn::Title => item.title.as_str(),
        RuleColumn::Type => item.product_type.as_str(),
        RuleColumn::Vendor => item.vendor.as_str(),
        RuleColumn::Price => item.min_price.as_str(),
        RuleColumn::Tag => return match_tag(&item.tags, &rule.relation, &rule.condition),
        RuleColumn::Other(_) => return false,
    };

    compare_values(value, &rule.relation, &rule.condition)
}

/// Compare an attribute value against a condition, ignoring case.
#[must_use]
pub fn compare_values(value: &str, relation: &RuleRelation, condition: &str) -> bool {
    let value = value.to_lowercase();
    let condition = condition.to_lowercase();

    match relation {
        RuleRelation::Equals => value == condition,
        RuleRelation::NotEquals => value != condition,
        RuleRelation::GreaterThan => parse_number(&value) > parse_number(&condition),
        RuleRelation::LessThan => parse_number(&value) < parse_number(&condition),
        RuleRelation::StartsWith => value.starts_with(&condition),
        RuleRelation::EndsWith => value.ends_with(&condition),
        RuleRelation::Contains => value.contains(&condition),
        RuleRelation::NotContains => !value.contains(&condition),
        RuleRelation::Other(_) => false,
    }
}

/// Compare a product's tags against a condition, respecting case.
///
/// Only equality and containment relations apply to tags.
#[must_use]
pub fn match_tag(tags: &[String], relation: &RuleRelation, condition: &str) -> bool {
    if tags.is_empty() {
        return false;
    }

    match relation {
        RuleRelation::Equals => tags.iter().any(|tag| tag == condition),
        RuleRelation::NotEquals => !tags.iter().any(|tag| tag == condition),
        RuleRelation::Contains => tags.iter().any(|tag| tag.contains(condition)),
        RuleRelation::NotContains => !tags.iter().any(|tag| tag.contains(condition)),
        _ => false,
    }
}

/// Unparsable input yields NaN, which compares false against everything.
///
/// Only digits, signs, a decimal point and an exponent are accepted; the
/// `f64` parser's spelled-out infinities and NaN are refused.
fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.bytes().any(|b| b.is_ascii_alphabetic() && !b.eq_ignore_ascii_case(&b'e')) {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe_and_hat() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Red Shoe").with_tags(["red", "shoe"]),
            CatalogItem::new("Blue Hat").with_tags(["blue"]),
        ]
    }

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("Air Runner")
                .with_vendor("Nike")
                .with_type("Shoes")
                .with_min_price("120.00")
                .with_tags(["running", "Sale"]),
            CatalogItem::new("Trail Cap")
                .with_vendor("Patagonia")
                .with_type("Hats")
                .with_min_price("35.00")
                .with_tags(["outdoor"]),
            CatalogItem::new("Court Classic")
                .with_vendor("Nike")
                .with_type("Shoes")
                .with_min_price("80.00"),
            CatalogItem::new("Gift Card"),
        ]
    }

    fn titles(items: &[&CatalogItem]) -> Vec<String> {
        items.iter().map(|item| item.title.clone()).collect()
    }

    // -------------------------------------------------------------------------
    // Rule set combination
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_rules_match_nothing() {
        let items = catalog();
        assert!(filter_items(&items, &[], Combinator::And).is_empty());
        assert!(filter_items(&items, &[], Combinator::Or).is_empty());
        assert!(!RuleSet::default().matches(&CatalogItem::new("anything")));
    }

    #[test]
    fn test_empty_items_match_nothing() {
        let rules = vec![Rule::new("TITLE", "CONTAINS", "")];
        let items: Vec<CatalogItem> = Vec::new();
        assert!(filter_items(&items, &rules, Combinator::Or).is_empty());
    }

    #[test]
    fn test_and_requires_every_rule() {
        let rules = vec![
            Rule::new("VENDOR", "EQUALS", "nike"),
            Rule::new("PRICE", "LESS_THAN", "100"),
        ];
        let items = catalog();
        let matched = filter_items(&items, &rules, Combinator::And);
        assert_eq!(titles(&matched), vec!["Court Classic"]);
    }

    #[test]
    fn test_or_requires_any_rule() {
        let rules = vec![
            Rule::new("VENDOR", "EQUALS", "patagonia"),
            Rule::new("PRICE", "GREATER_THAN", "100"),
        ];
        let items = catalog();
        let matched = filter_items(&items, &rules, Combinator::Or);
        assert_eq!(titles(&matched), vec!["Air Runner", "Trail Cap"]);
    }

    #[test]
    fn test_and_result_is_subset_of_or_result() {
        let rule_sets = vec![
            vec![Rule::new("TYPE", "EQUALS", "shoes")],
            vec![
                Rule::new("VENDOR", "EQUALS", "Nike"),
                Rule::new("TAG", "EQUALS", "Sale"),
            ],
            vec![
                Rule::new("TITLE", "STARTS_WITH", "t"),
                Rule::new("PRICE", "GREATER_THAN", "50"),
                Rule::new("BOGUS", "EQUALS", "x"),
            ],
        ];
        let items = catalog();
        for rules in rule_sets {
            let and = filter_items(&items, &rules, Combinator::And);
            let or = filter_items(&items, &rules, Combinator::Or);
            assert!(and.iter().all(|item| or.contains(item)), "{rules:?}");
        }
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let rules = vec![Rule::new("TYPE", "EQUALS", "SHOES")];
        let mut items = catalog();
        items.reverse();
        let matched = filter_items(&items, &rules, Combinator::Or);
        assert_eq!(titles(&matched), vec!["Court Classic", "Air Runner"]);
    }

    #[test]
    fn test_filter_owned_items() {
        let set = RuleSet::new(vec![Rule::new("VENDOR", "EQUALS", "nike")], Combinator::And);
        let matched: Vec<CatalogItem> = set.filter(catalog());
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_unknown_rule_blocks_and_but_not_or() {
        let rules = vec![
            Rule::new("TITLE", "CONTAINS", "runner"),
            Rule::new("WEIGHT", "GREATER_THAN", "1"),
        ];
        let items = catalog();
        assert!(filter_items(&items, &rules, Combinator::And).is_empty());
        assert_eq!(
            titles(&filter_items(&items, &rules, Combinator::Or)),
            vec!["Air Runner"]
        );
    }

    #[test]
    fn test_rule_set_from_shopify_flag() {
        let set = RuleSet::from_shopify(vec![Rule::new("TAG", "EQUALS", "red")], true);
        assert_eq!(set.combinator, Combinator::Or);
    }

    // -------------------------------------------------------------------------
    // Generic comparator
    // -------------------------------------------------------------------------

    #[test]
    fn test_equals_ignores_case() {
        assert!(compare_values("Nike", &RuleRelation::Equals, "nike"));
        assert!(compare_values("Nike", &RuleRelation::Equals, "NIKE"));
        assert!(!compare_values("Nike", &RuleRelation::NotEquals, "nIkE"));
        assert!(compare_values("Nike", &RuleRelation::NotEquals, "Adidas"));
    }

    #[test]
    fn test_substring_relations() {
        assert!(compare_values("Summer Dress", &RuleRelation::StartsWith, "SUMMER"));
        assert!(compare_values("Summer Dress", &RuleRelation::EndsWith, "dress"));
        assert!(compare_values("Summer Dress", &RuleRelation::Contains, "mer d"));
        assert!(compare_values("Summer Dress", &RuleRelation::NotContains, "winter"));
        assert!(!compare_values("Summer Dress", &RuleRelation::NotContains, "DRESS"));
    }

    #[test]
    fn test_numeric_relations() {
        assert!(compare_values("25.00", &RuleRelation::GreaterThan, "15"));
        assert!(!compare_values("10.00", &RuleRelation::GreaterThan, "15"));
        assert!(compare_values("10.00", &RuleRelation::LessThan, "15"));
        assert!(!compare_values("15", &RuleRelation::LessThan, "15.0"));
        assert!(compare_values(" 7 ", &RuleRelation::LessThan, "8"));
    }

    #[test]
    fn test_numeric_relations_with_non_numbers_are_false() {
        assert!(!compare_values("abc", &RuleRelation::GreaterThan, "5"));
        assert!(!compare_values("abc", &RuleRelation::LessThan, "5"));
        assert!(!compare_values("5", &RuleRelation::GreaterThan, ""));
        assert!(!compare_values("10abc", &RuleRelation::GreaterThan, "5"));
    }

    #[test]
    fn test_spelled_out_infinity_is_not_a_number() {
        assert!(!compare_values("25.00", &RuleRelation::LessThan, "Infinity"));
        assert!(!compare_values("inf", &RuleRelation::GreaterThan, "5"));
        assert!(!compare_values("NaN", &RuleRelation::LessThan, "5"));
        assert!(compare_values("1e3", &RuleRelation::GreaterThan, "999"));
        assert!(compare_values("2.5E1", &RuleRelation::GreaterThan, "20"));
    }

    #[test]
    fn test_unknown_relation_is_false() {
        let relation = RuleRelation::Other("IS_SET".to_string());
        assert!(!compare_values("Nike", &relation, "Nike"));
    }

    #[test]
    fn test_price_column_uses_default_when_missing() {
        let item = CatalogItem::new("Free Sticker");
        assert!(rule_matches(&item, &Rule::new("PRICE", "LESS_THAN", "1")));
        assert!(rule_matches(&item, &Rule::new("PRICE", "EQUALS", "0")));
    }

    // -------------------------------------------------------------------------
    // Tag comparator
    // -------------------------------------------------------------------------

    #[test]
    fn test_tag_equals_is_case_sensitive() {
        let item = CatalogItem::new("Rose").with_tags(["Red"]);
        assert!(!rule_matches(&item, &Rule::new("TAG", "EQUALS", "red")));
        assert!(rule_matches(&item, &Rule::new("TAG", "EQUALS", "Red")));
    }

    #[test]
    fn test_tag_relations() {
        let tags = vec!["summer-sale".to_string(), "linen".to_string()];
        assert!(match_tag(&tags, &RuleRelation::Equals, "linen"));
        assert!(!match_tag(&tags, &RuleRelation::Equals, "sale"));
        assert!(match_tag(&tags, &RuleRelation::NotEquals, "sale"));
        assert!(match_tag(&tags, &RuleRelation::Contains, "sale"));
        assert!(!match_tag(&tags, &RuleRelation::Contains, "SALE"));
        assert!(match_tag(&tags, &RuleRelation::NotContains, "wool"));
        assert!(!match_tag(&tags, &RuleRelation::NotContains, "lin"));
    }

    #[test]
    fn test_tag_ordering_relations_are_false() {
        let tags = vec!["10".to_string()];
        assert!(!match_tag(&tags, &RuleRelation::GreaterThan, "5"));
        assert!(!match_tag(&tags, &RuleRelation::StartsWith, "1"));
    }

    #[test]
    fn test_no_tags_never_match() {
        let tags: Vec<String> = Vec::new();
        assert!(!match_tag(&tags, &RuleRelation::NotEquals, "red"));
        assert!(!match_tag(&tags, &RuleRelation::NotContains, "red"));
    }

    #[test]
    fn test_tag_match_with_duplicate_tags() {
        let tags = vec!["red".to_string(), "red".to_string()];
        assert!(match_tag(&tags, &RuleRelation::Equals, "red"));
        assert!(!match_tag(&tags, &RuleRelation::NotEquals, "red"));
    }

    // -------------------------------------------------------------------------
    // Scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_tag_rule_with_or_selects_red_shoe() {
        let items = shoe_and_hat();
        let rules = vec![Rule::new("TAG", "EQUALS", "red")];
        let matched = filter_items(&items, &rules, Combinator::Or);
        assert_eq!(titles(&matched), vec!["Red Shoe"]);
    }

    #[test]
    fn test_price_rule_with_and_selects_expensive_item() {
        let items = vec![
            CatalogItem::new("Budget").with_min_price("10.00"),
            CatalogItem::new("Premium").with_min_price("25.00"),
        ];
        let rules = vec![Rule::new("PRICE", "GREATER_THAN", "15")];
        let matched = filter_items(&items, &rules, Combinator::And);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched.first().map(|item| item.min_price.as_str()), Some("25.00"));
    }
}
