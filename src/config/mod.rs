/// Database configuration and connection management
pub mod database;

/// Migration run settings loaded from migration.toml
pub mod migration;
