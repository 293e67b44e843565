//! Category entity - Groups base products for browsing.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name of the category (e.g., "Plumbing")
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One category has many base products
    #[sea_orm(has_many = "super::base_product::Entity")]
    BaseProducts,
}

impl Related<super::base_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BaseProducts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
