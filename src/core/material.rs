//! Legacy material access.
//!
//! Materials are the migration source. The pipeline only ever reads them;
//! [`create_material`] exists for seeding databases and tests.

use crate::{
    entities::{Material, material},
    errors::Result,
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// Field values for a new legacy material record
#[derive(Debug, Clone, Default)]
pub struct NewMaterial {
    /// Material name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional category reference
    pub category_id: Option<Uuid>,
    /// Free-text unit type
    pub unit_type: String,
    /// Amount of the unit per stocked item
    pub unit_value: f64,
    /// Units in stock
    pub stock_quantity: f64,
    /// Optional usage notes
    pub usage_notes: Option<String>,
    /// Serialized JSON array of photo references
    pub photos: String,
    /// Serialized JSON object of dynamic properties
    pub dynamic_properties: String,
}

/// Fetches a single material by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_material_by_id<C>(db: &C, material_id: Uuid) -> Result<Option<material::Model>>
where
    C: ConnectionTrait,
{
    Material::find_by_id(material_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the ids of every material, ordered by name and then id so that
/// repeated runs batch materials identically.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_material_ids<C>(db: &C) -> Result<Vec<Uuid>>
where
    C: ConnectionTrait,
{
    Material::find()
        .select_only()
        .column(material::Column::Id)
        .order_by_asc(material::Column::Name)
        .order_by_asc(material::Column::Id)
        .into_tuple::<Uuid>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Inserts a legacy material record as given. No validation is applied:
/// legacy data is allowed to be invalid.
///
/// # Errors
/// Returns an error if the database insert fails.
pub async fn create_material<C>(db: &C, new_material: NewMaterial) -> Result<material::Model>
where
    C: ConnectionTrait,
{
    let material = material::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(new_material.name),
        description: Set(new_material.description),
        category_id: Set(new_material.category_id),
        unit_type: Set(new_material.unit_type),
        unit_value: Set(new_material.unit_value),
        stock_quantity: Set(new_material.stock_quantity),
        usage_notes: Set(new_material.usage_notes),
        photos: Set(new_material.photos),
        dynamic_properties: Set(new_material.dynamic_properties),
    };
    material.insert(db).await.map_err(Into::into)
}
