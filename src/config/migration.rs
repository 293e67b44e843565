//! Migration run configuration loaded from migration.toml
//!
//! The binary reads its bulk-migration settings from a TOML file so a run can
//! be repeated with the same parameters. Only `user_id` is required; every
//! other field has a default.

use crate::core::bulk::BulkMigrateCommand;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "MIGRATION_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "migration.toml";

/// Configuration structure representing the entire migration.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Settings for the bulk migration run
    pub migration: MigrationConfig,
}

/// Settings for a single bulk migration run
#[derive(Debug, Deserialize, Clone)]
pub struct MigrationConfig {
    /// User the migration is performed on behalf of
    pub user_id: String,
    /// Number of materials per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Keep going after a batch containing failures
    #[serde(default = "default_continue_on_error")]
    pub continue_on_error: bool,
    /// Skip required-field validation
    #[serde(default)]
    pub skip_validation: bool,
    /// Overwrite existing variants and migrate invalid materials anyway
    #[serde(default)]
    pub force_migration: bool,
    /// Restrict the run to these materials; all materials when absent
    #[serde(default)]
    pub material_ids: Option<Vec<Uuid>>,
    /// Where to write the JSON report, if anywhere
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

const fn default_batch_size() -> usize {
    50
}

const fn default_continue_on_error() -> bool {
    true
}

impl MigrationConfig {
    /// Builds the bulk migration command described by this configuration
    #[must_use]
    pub fn to_command(&self) -> BulkMigrateCommand {
        BulkMigrateCommand {
            material_ids: self.material_ids.clone(),
            user_id: self.user_id.clone(),
            batch_size: self.batch_size,
            continue_on_error: self.continue_on_error,
            skip_validation: self.skip_validation,
            force_migration: self.force_migration,
        }
    }
}

/// Loads migration configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading migration configuration from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Parses migration configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse migration config: {e}"),
    })
}

/// Loads migration configuration from `$MIGRATION_CONFIG`, falling back to ./migration.toml
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}
