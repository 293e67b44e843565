//! Product variant entity - A concrete stockable unit of a base product.
//!
//! The (`name`, `base_product_id`) pair is unique under normal migration; a
//! second migration of the same material is a conflict unless forced.
//! Photos and dynamic properties are typed JSON columns.

use crate::models::{PhotoList, PropertyMap};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product variant database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_variants")]
pub struct Model {
    /// Unique identifier for the variant
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// ID of the owning base product
    pub base_product_id: Uuid,
    /// Variant name
    pub name: String,
    /// Units currently in stock
    pub stock_quantity: f64,
    /// ID of the unit of measure
    pub unit_of_measure_id: Uuid,
    /// Amount of the unit per stocked item
    pub unit_value: f64,
    /// Optional usage notes
    pub usage_notes: Option<String>,
    /// Photo references
    pub photos: PhotoList,
    /// Dynamic properties
    pub properties: PropertyMap,
    /// When the variant was created
    pub created_at: DateTime,
    /// When the variant was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between `ProductVariant` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each variant belongs to one base product
    #[sea_orm(
        belongs_to = "super::base_product::Entity",
        from = "Column::BaseProductId",
        to = "super::base_product::Column::Id"
    )]
    BaseProduct,
    /// Each variant is measured in one unit
    #[sea_orm(
        belongs_to = "super::unit_of_measure::Entity",
        from = "Column::UnitOfMeasureId",
        to = "super::unit_of_measure::Column::Id"
    )]
    UnitOfMeasure,
}

impl Related<super::base_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BaseProduct.def()
    }
}

impl Related<super::unit_of_measure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UnitOfMeasure.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
