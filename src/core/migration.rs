//! Single material migration.
//!
//! Moves one legacy material onto the base product / product variant model:
//! validate, normalize the unit, resolve category and base product, decode the
//! photo and property payloads, then create or (when forced) update the
//! variant. Each material runs in its own database transaction, so a failure
//! leaves nothing behind for that material and never touches other materials.
//!
//! [`migrate_material`] never returns an error. Every failure, expected or
//! not, comes back as a [`MigrationResult`] with `success == false`.

use crate::{
    core::{
        category::get_category_by_id,
        material::get_material_by_id,
        payload::{parse_photo_list, parse_property_map},
        product::{
            VariantDetails, create_variant, get_variant_by_name_and_base_product,
            resolve_base_product, update_variant,
        },
        unit::resolve_unit_of_measure,
    },
    entities::material,
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Request to migrate a single material
#[derive(Debug, Clone, Deserialize)]
pub struct MigrateMaterialCommand {
    /// Material to migrate
    pub material_id: Uuid,
    /// User the migration is performed on behalf of
    pub user_id: String,
    /// Skip required-field validation
    #[serde(default)]
    pub skip_validation: bool,
    /// Migrate invalid materials anyway and overwrite an existing variant
    #[serde(default)]
    pub force_migration: bool,
}

/// Outcome of migrating one material
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MigrationResult {
    /// Material that was migrated
    pub material_id: Uuid,
    /// Whether the migration succeeded
    pub success: bool,
    /// Base product the material now belongs to
    pub base_product_id: Option<Uuid>,
    /// Variant created or updated for the material
    pub product_variant_id: Option<Uuid>,
    /// Why the migration failed
    pub error_message: Option<String>,
    /// When the attempt finished
    pub migrated_at: DateTime<Utc>,
}

impl MigrationResult {
    /// A successful migration
    #[must_use]
    pub fn success(material_id: Uuid, base_product_id: Uuid, product_variant_id: Uuid) -> Self {
        Self {
            material_id,
            success: true,
            base_product_id: Some(base_product_id),
            product_variant_id: Some(product_variant_id),
            error_message: None,
            migrated_at: Utc::now(),
        }
    }

    /// A failed migration
    #[must_use]
    pub fn failure(material_id: Uuid, error_message: impl Into<String>) -> Self {
        Self {
            material_id,
            success: false,
            base_product_id: None,
            product_variant_id: None,
            error_message: Some(error_message.into()),
            migrated_at: Utc::now(),
        }
    }
}

/// Ids written by a successful migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MigratedIds {
    base_product_id: Uuid,
    product_variant_id: Uuid,
}

/// Checks the fields a variant cannot do without. Returns the violated rules
/// in a fixed order; an empty vector means the material is valid.
#[must_use]
pub fn validate_material(material: &material::Model) -> Vec<String> {
    let mut violations = Vec::new();

    if material.name.trim().is_empty() {
        violations.push("Material name is required".to_string());
    }
    if material.unit_type.trim().is_empty() {
        violations.push("Unit type is required".to_string());
    }
    if material.unit_value.is_nan() || material.unit_value <= 0.0 {
        violations.push("Unit value must be greater than zero".to_string());
    }
    if material.stock_quantity.is_nan() || material.stock_quantity < 0.0 {
        violations.push("Stock quantity cannot be negative".to_string());
    }

    violations
}

/// Migrates one material to a product variant.
///
/// This function runs the whole single-item pipeline in one transaction:
/// it loads the material, validates it unless `skip_validation` is set,
/// resolves the unit of measure, category and base product, then creates the
/// variant. An existing variant with the same name under the base product is
/// a conflict, unless `force_migration` is set, in which case it is updated in
/// place. The source material is only read, never modified.
///
/// Never fails: not-found, validation, conflict and database errors are all
/// reported through the returned [`MigrationResult`], and any partial writes
/// for the material are rolled back.
#[instrument(
    skip(db, command),
    fields(material_id = %command.material_id, user_id = %command.user_id)
)]
pub async fn migrate_material(
    db: &DatabaseConnection,
    command: &MigrateMaterialCommand,
) -> MigrationResult {
    match try_migrate_material(db, command).await {
        Ok(ids) => {
            info!(
                "Migrated material {} to variant {} of base product {}",
                command.material_id, ids.product_variant_id, ids.base_product_id
            );
            MigrationResult::success(
                command.material_id,
                ids.base_product_id,
                ids.product_variant_id,
            )
        }
        Err(e) => {
            match &e {
                Error::Database(_) | Error::Json(_) | Error::Io(_) => {
                    error!("Unexpected error migrating material {}: {}", command.material_id, e);
                }
                _ => warn!("Material {} not migrated: {}", command.material_id, e),
            }
            MigrationResult::failure(command.material_id, e.to_string())
        }
    }
}

async fn try_migrate_material(
    db: &DatabaseConnection,
    command: &MigrateMaterialCommand,
) -> Result<MigratedIds> {
    let txn = db.begin().await?;

    let material = get_material_by_id(&txn, command.material_id)
        .await?
        .ok_or(Error::MaterialNotFound {
            id: command.material_id,
        })?;

    if !command.skip_validation {
        let violations = validate_material(&material);
        if !violations.is_empty() {
            if !command.force_migration {
                return Err(Error::Validation { violations });
            }
            warn!(
                "Material {} failed validation, migrating anyway because migration is forced: {}",
                material.id,
                violations.join("; ")
            );
        }
    }

    let unit = resolve_unit_of_measure(&txn, &material.unit_type).await?;
    debug!("Resolved unit '{}' to {} ({})", material.unit_type, unit.name, unit.id);

    let category_id = resolve_category_id(&txn, &material).await?;

    let base_product = resolve_base_product(
        &txn,
        &material.name,
        material.description.clone(),
        category_id,
    )
    .await?;

    let details = VariantDetails {
        name: material.name.clone(),
        stock_quantity: material.stock_quantity,
        unit_of_measure_id: unit.id,
        unit_value: material.unit_value,
        usage_notes: material.usage_notes.clone(),
        photos: parse_photo_list(material.id, &material.photos),
        properties: parse_property_map(material.id, &material.dynamic_properties),
    };

    let existing_variant =
        get_variant_by_name_and_base_product(&txn, &material.name, base_product.id).await?;
    let variant = match existing_variant {
        None => create_variant(&txn, base_product.id, &details).await?,
        Some(existing) if command.force_migration => {
            debug!("Overwriting existing variant {} (forced)", existing.id);
            update_variant(&txn, existing, &details).await?
        }
        Some(_) => {
            return Err(Error::VariantConflict {
                name: material.name.clone(),
                base_product: base_product.name,
            });
        }
    };

    txn.commit().await?;

    Ok(MigratedIds {
        base_product_id: base_product.id,
        product_variant_id: variant.id,
    })
}

/// A dangling category reference is tolerated and treated as no category.
async fn resolve_category_id<C>(db: &C, material: &material::Model) -> Result<Option<Uuid>>
where
    C: sea_orm::ConnectionTrait,
{
    let Some(category_id) = material.category_id else {
        return Ok(None);
    };

    if get_category_by_id(db, category_id).await?.is_some() {
        Ok(Some(category_id))
    } else {
        warn!(
            "Category {} referenced by material {} not found, migrating without category",
            category_id, material.id
        );
        Ok(None)
    }
}
