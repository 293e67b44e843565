//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and seeding legacy materials with sensible defaults.

use crate::{
    core::{
        category,
        material::{self, NewMaterial},
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A valid material with sensible defaults.
///
/// # Defaults
/// * `unit_type`: "kg"
/// * `unit_value`: 2.5
/// * `stock_quantity`: 100.0
/// * `photos`: `"[]"`
/// * `dynamic_properties`: `"{}"`
#[must_use]
pub fn test_material(name: &str) -> NewMaterial {
    NewMaterial {
        name: name.to_string(),
        unit_type: "kg".to_string(),
        unit_value: 2.5,
        stock_quantity: 100.0,
        photos: "[]".to_string(),
        dynamic_properties: "{}".to_string(),
        ..Default::default()
    }
}

/// Seeds a valid material named `name` using [`test_material`] defaults.
pub async fn create_test_material(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::material::Model> {
    material::create_material(db, test_material(name)).await
}

/// Seeds a material with custom fields.
/// Use this when you need invalid or unusual legacy data.
pub async fn create_custom_material(
    db: &DatabaseConnection,
    new_material: NewMaterial,
) -> Result<entities::material::Model> {
    material::create_material(db, new_material).await
}

/// Creates a category with no description.
pub async fn create_test_category(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::category::Model> {
    category::create_category(db, name, None).await
}
