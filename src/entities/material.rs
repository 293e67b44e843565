//! Material entity - The legacy flat inventory record being phased out.
//!
//! Materials are read-only from the migration's point of view. Photos and
//! dynamic properties are stored as raw serialized JSON text and may be
//! malformed, which is why they are not typed columns here.
//! `category_id` is not a foreign key: legacy rows may point at categories
//! that no longer exist.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Material database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    /// Unique identifier for the material
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Name of the material (e.g., "Steel Pipe")
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Category the material was filed under, if any
    pub category_id: Option<Uuid>,
    /// Free-text unit type (e.g., "kg", "pcs", "litre")
    pub unit_type: String,
    /// Amount of `unit_type` per stocked unit
    pub unit_value: f64,
    /// Units currently in stock
    pub stock_quantity: f64,
    /// Optional usage notes
    pub usage_notes: Option<String>,
    /// Serialized JSON array of photo references
    pub photos: String,
    /// Serialized JSON object of dynamic properties
    pub dynamic_properties: String,
}

/// Materials are not linked to other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
