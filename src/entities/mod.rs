//! Entity module - Contains all SeaORM entity definitions for the database.
//! The legacy `materials` table is the migration source; base products,
//! product variants, units of measure and categories are the target model.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod base_product;
pub mod category;
pub mod material;
pub mod product_variant;
pub mod unit_of_measure;

// Re-export specific types to avoid conflicts
pub use base_product::{
    Column as BaseProductColumn, Entity as BaseProduct, Model as BaseProductModel,
};
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use material::{Column as MaterialColumn, Entity as Material, Model as MaterialModel};
pub use product_variant::{
    Column as ProductVariantColumn, Entity as ProductVariant, Model as ProductVariantModel,
};
pub use unit_of_measure::{
    Column as UnitOfMeasureColumn, Entity as UnitOfMeasure, Model as UnitOfMeasureModel,
};
