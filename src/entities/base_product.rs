//! Base product entity - A canonical named product grouping one or more variants.
//!
//! Base products are looked up by exact name during migration, so several
//! materials with the same name share one base product.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Base product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "base_products")]
pub struct Model {
    /// Unique identifier for the base product
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Product name, matched exactly when migrating
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Owning category, if any
    pub category_id: Option<Uuid>,
    /// When the base product was created
    pub created_at: DateTime,
    /// When the base product was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between `BaseProduct` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each base product optionally belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// One base product has many variants
    #[sea_orm(has_many = "super::product_variant::Entity")]
    ProductVariants,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product_variant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductVariants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
