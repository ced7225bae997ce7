//! Command implementations.
//!
//! Commands print their result as pretty JSON on stdout. Anything meant for
//! a human goes through `tracing` to stderr.

pub mod check_rules;
pub mod collections;
pub mod preview;

use std::io::Write;
use std::path::{Path, PathBuf};

use curator_admin::shopify::{AdminClient, AdminShopifyError};
use curator_admin::{AdminConfig, AppError, ConfigError};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The Shopify client could not be created.
    #[error("Client error: {0}")]
    Client(#[from] AdminShopifyError),

    /// A service call failed.
    #[error(transparent)]
    App(#[from] AppError),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An input file is not the expected JSON.
    #[error("Invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Writing the result failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Arguments did not describe a runnable command.
    #[error("Invalid usage: {0}")]
    Usage(String),
}

/// Load configuration and build the Admin API client.
fn connect() -> Result<(AdminConfig, AdminClient), CommandError> {
    let config = AdminConfig::from_env()?;
    let client = AdminClient::new(config.shopify())?;
    tracing::debug!(store = client.store(), "Admin API client ready");
    Ok((config, client))
}

/// Read and parse a JSON input file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(path, &raw)
}

fn parse_json<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T, CommandError> {
    serde_json::from_str(raw).map_err(|source| CommandError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` to stdout as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(std::io::Error::from)?;
    writeln!(stdout)?;
    Ok(())
}
