//! Curator CLI - smart-collection rule previews and collection listings.
//!
//! # Usage
//!
//! ```bash
//! # Preview rules from a file, combined with OR
//! curator preview --rules rules.json --any
//!
//! # List every collection with its subcategories
//! curator collections
//!
//! # Evaluate rules against local items, no network
//! curator check-rules --rules rules.json --items items.json
//! ```
//!
//! # Commands
//!
//! - `preview` - Preview the products a rule set selects
//! - `collections` - List collections (optionally excluding one)
//! - `products` - List every product in a collection
//! - `file` - Look up an uploaded image
//! - `check-rules` - Evaluate rules offline against a JSON item list

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use curator_admin::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::CommandError;

const DEFAULT_LOG_FILTER: &str = "curator_cli=info,curator_admin=info,curator_core=warn";

#[derive(Parser)]
#[command(name = "curator")]
#[command(author, version, about = "Curator smart-collection tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview the products a rule set selects
    Preview {
        /// JSON file holding an array of rule drafts
        #[arg(short, long, required_unless_present = "collection")]
        rules: Option<PathBuf>,

        /// Use the rules saved on this smart collection (ID or GID)
        #[arg(short, long, conflicts_with_all = ["rules", "any"])]
        collection: Option<String>,

        /// Match products satisfying any rule (default: all rules)
        #[arg(long)]
        any: bool,
    },
    /// List collections with their subcategories
    Collections {
        /// Leave this collection out (parent picker list)
        #[arg(short, long)]
        exclude: Option<String>,
    },
    /// List every product in a collection
    Products {
        /// Collection ID or GID
        collection: String,
    },
    /// Look up an uploaded image by file ID
    File {
        /// File ID or GID
        id: String,
    },
    /// Evaluate rules against a local item list (no network)
    CheckRules {
        /// JSON file holding an array of rule drafts
        #[arg(short, long)]
        rules: PathBuf,

        /// JSON file holding an array of catalog items
        #[arg(short, long)]
        items: PathBuf,

        /// Match items satisfying any rule (default: all rules)
        #[arg(long)]
        any: bool,
    },
}

#[tokio::main]
async fn main() {
    let log_format = match LogFormat::from_env() {
        Ok(format) => format,
        Err(e) => {
            init_tracing(LogFormat::Text);
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(log_format);

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Log to stderr; stdout carries command output.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    match cli.command {
        Commands::Preview {
            rules,
            collection,
            any,
        } => match (collection, rules) {
            (Some(collection), _) => commands::preview::saved_collection(&collection).await,
            (None, Some(rules)) => commands::preview::from_file(&rules, any).await,
            (None, None) => Err(CommandError::Usage(
                "either --rules or --collection is required".to_string(),
            )),
        },
        Commands::Collections { exclude } => {
            commands::collections::list(exclude.as_deref()).await
        }
        Commands::Products { collection } => commands::collections::products(&collection).await,
        Commands::File { id } => commands::collections::file(&id).await,
        Commands::CheckRules { rules, items, any } => {
            commands::check_rules::run(&rules, &items, any)
        }
    }
}
