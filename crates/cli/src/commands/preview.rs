//! Rule preview commands.

use std::path::Path;

use curator_admin::services::{CollectionService, PreviewService};
use curator_core::{CollectionId, Combinator, RuleDraft};

use super::{CommandError, connect, print_json, read_json};

/// Preview rule drafts read from `rules_path`.
pub async fn from_file(rules_path: &Path, any: bool) -> Result<(), CommandError> {
    let drafts: Vec<RuleDraft> = read_json(rules_path)?;
    let (config, client) = connect()?;

    let preview = PreviewService::new(client, config.preview_sample_size)
        .preview(drafts, Combinator::from_disjunctive(any))
        .await?;

    if preview.rejected_rules > 0 {
        tracing::warn!(
            rejected = preview.rejected_rules,
            "Some rules were incomplete and were ignored"
        );
    }
    print_json(&preview)
}

/// Preview the rules saved on a smart collection.
pub async fn saved_collection(collection: &str) -> Result<(), CommandError> {
    let (config, client) = connect()?;
    let id = CollectionId::parse(collection);

    let node = CollectionService::new(client.clone())
        .find_collection(&id)
        .await?;
    let Some(rule_set) = node.rule_set else {
        return Err(CommandError::Usage(format!(
            "{} is a manual collection and has no rules",
            node.title
        )));
    };

    let preview = PreviewService::new(client, config.preview_sample_size)
        .preview_rule_set(rule_set)
        .await?;
    print_json(&preview)
}
