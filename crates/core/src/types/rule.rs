//! Smart-collection rule types.
//!
//! These mirror the shape of Shopify's `CollectionRuleSet`: a list of
//! `{ column, relation, condition }` rules applied either disjunctively (OR)
//! or conjunctively (AND).
//!
//! Columns and relations are closed sets, but values outside those sets are
//! kept as `Other(..)` instead of being rejected at deserialization. A rule
//! with an unknown column or relation evaluates to `false`; the preview must
//! keep working while a merchant is halfway through editing a rule form.

use serde::{Deserialize, Serialize};

/// The product attribute a rule inspects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleColumn {
    Title,
    Type,
    Vendor,
    Price,
    Tag,
    /// Any column name outside the supported set.
    Other(String),
}

impl RuleColumn {
    /// Wire name, as sent by Shopify and the rule form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Title => "TITLE",
            Self::Type => "TYPE",
            Self::Vendor => "VENDOR",
            Self::Price => "PRICE",
            Self::Tag => "TAG",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for RuleColumn {
    fn from(s: &str) -> Self {
        match s {
            "TITLE" => Self::Title,
            "TYPE" => Self::Type,
            "VENDOR" => Self::Vendor,
            "PRICE" => Self::Price,
            "TAG" => Self::Tag,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for RuleColumn {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<RuleColumn> for String {
    fn from(column: RuleColumn) -> Self {
        match column {
            RuleColumn::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for RuleColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The comparison a rule applies between an attribute and its condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleRelation {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    StartsWith,
    EndsWith,
    Contains,
    NotContains,
    /// Any relation name outside the supported set.
    Other(String),
}

impl RuleRelation {
    /// Wire name, as sent by Shopify and the rule form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equals => "EQUALS",
            Self::NotEquals => "NOT_EQUALS",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThan => "LESS_THAN",
            Self::StartsWith => "STARTS_WITH",
            Self::EndsWith => "ENDS_WITH",
            Self::Contains => "CONTAINS",
            Self::NotContains => "NOT_CONTAINS",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for RuleRelation {
    fn from(s: &str) -> Self {
        match s {
            "EQUALS" => Self::Equals,
            "NOT_EQUALS" => Self::NotEquals,
            "GREATER_THAN" => Self::GreaterThan,
            "LESS_THAN" => Self::LessThan,
            "STARTS_WITH" => Self::StartsWith,
            "ENDS_WITH" => Self::EndsWith,
            "CONTAINS" => Self::Contains,
            "NOT_CONTAINS" => Self::NotContains,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for RuleRelation {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<RuleRelation> for String {
    fn from(relation: RuleRelation) -> Self {
        match relation {
            RuleRelation::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for RuleRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the rules of a set combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Combinator {
    /// Every rule must match (`appliedDisjunctively: false`).
    #[default]
    And,
    /// Any rule may match (`appliedDisjunctively: true`).
    Or,
}

impl Combinator {
    /// Build from Shopify's `appliedDisjunctively` flag.
    #[must_use]
    pub const fn from_disjunctive(applied_disjunctively: bool) -> Self {
        if applied_disjunctively {
            Self::Or
        } else {
            Self::And
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Only the exact string `"OR"` selects disjunctive matching.
impl From<&str> for Combinator {
    fn from(s: &str) -> Self {
        Self::from_disjunctive(s == "OR")
    }
}

impl From<String> for Combinator {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Combinator> for String {
    fn from(combinator: Combinator) -> Self {
        combinator.as_str().to_owned()
    }
}

impl std::fmt::Display for Combinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single smart-collection rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    /// The attribute to inspect.
    pub column: RuleColumn,
    /// The comparison to apply.
    pub relation: RuleRelation,
    /// The value to compare against.
    pub condition: String,
}

impl Rule {
    /// Create a new rule.
    #[must_use]
    pub fn new(
        column: impl Into<RuleColumn>,
        relation: impl Into<RuleRelation>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            relation: relation.into(),
            condition: condition.into(),
        }
    }
}

/// A rule as the collection form submits it.
///
/// The form keeps the condition under both `condition` and `value`; either
/// may be missing while the merchant is typing. [`RuleDraft::into_rule`] is
/// the only place the two are reconciled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDraft {
    #[serde(default)]
    pub column: Option<RuleColumn>,
    #[serde(default)]
    pub relation: Option<RuleRelation>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl RuleDraft {
    /// Map the form state to a domain rule.
    ///
    /// `condition` wins over `value`. Returns `None` when the column or
    /// relation is missing or blank, or when neither condition field is
    /// present. An empty condition string is a valid condition.
    #[must_use]
    pub fn into_rule(self) -> Option<Rule> {
        let column = self.column.filter(|c| !c.as_str().is_empty())?;
        let relation = self.relation.filter(|r| !r.as_str().is_empty())?;
        let condition = self.condition.or(self.value)?;

        Some(Rule {
            column,
            relation,
            condition,
        })
    }
}

impl From<Rule> for RuleDraft {
    fn from(rule: Rule) -> Self {
        Self {
            column: Some(rule.column),
            relation: Some(rule.relation),
            value: Some(rule.condition.clone()),
            condition: Some(rule.condition),
        }
    }
}

/// Split drafts into valid rules and a count of rejected drafts.
#[must_use]
pub fn rules_from_drafts(drafts: impl IntoIterator<Item = RuleDraft>) -> (Vec<Rule>, usize) {
    let mut rejected = 0;
    let rules = drafts
        .into_iter()
        .filter_map(|draft| {
            let rule = draft.into_rule();
            if rule.is_none() {
                rejected += 1;
            }
            rule
        })
        .collect();
    (rules, rejected)
}
