//! Unit of measure entity - Canonical unit definitions used by product variants.
//!
//! Names are unique. Units are created on demand during migration when no
//! existing unit matches either the raw or the canonical unit name.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unit of measure database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "units_of_measure")]
pub struct Model {
    /// Unique identifier for the unit
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Canonical unit name (e.g., "Kilogram")
    #[sea_orm(unique)]
    pub name: String,
    /// Short symbol (e.g., "kg")
    pub symbol: String,
    /// Unit category label (e.g., "Weight", "Volume", "Other")
    pub unit_type: String,
}

/// Defines relationships between `UnitOfMeasure` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One unit is used by many product variants
    #[sea_orm(has_many = "super::product_variant::Entity")]
    ProductVariants,
}

impl Related<super::product_variant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductVariants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
