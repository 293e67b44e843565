//! Base product and product variant upsert logic.
//!
//! Base products are found by exact name and created on demand; their
//! description and category are refreshed when an incoming material disagrees.
//! Variants are found by (name, base product) and are either created or, when
//! the caller asks for it, updated in place. Deciding whether an existing
//! variant is a conflict is left to the migration handler.

use crate::{
    entities::{BaseProduct, ProductVariant, base_product, product_variant},
    errors::Result,
    models::{PhotoList, PropertyMap},
};
use sea_orm::{Set, prelude::*};
use tracing::debug;

/// Everything a variant carries besides its identity and owner
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDetails {
    /// Variant name
    pub name: String,
    /// Units in stock
    pub stock_quantity: f64,
    /// Unit of measure id
    pub unit_of_measure_id: Uuid,
    /// Amount of the unit per stocked item
    pub unit_value: f64,
    /// Optional usage notes
    pub usage_notes: Option<String>,
    /// Photo references
    pub photos: PhotoList,
    /// Dynamic properties
    pub properties: PropertyMap,
}

/// Finds a base product by exact name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_base_product_by_name<C>(
    db: &C,
    name: &str,
) -> Result<Option<base_product::Model>>
where
    C: ConnectionTrait,
{
    BaseProduct::find()
        .filter(base_product::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a base product.
///
/// # Errors
/// Returns an error if the database insert fails.
pub async fn create_base_product<C>(
    db: &C,
    name: &str,
    description: Option<String>,
    category_id: Option<Uuid>,
) -> Result<base_product::Model>
where
    C: ConnectionTrait,
{
    let now = chrono::Utc::now().naive_utc();

    let product = base_product::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        description: Set(description),
        category_id: Set(category_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    product.insert(db).await.map_err(Into::into)
}

/// Overwrites a base product's description and category.
///
/// # Errors
/// Returns an error if the database update fails.
pub async fn update_base_product_details<C>(
    db: &C,
    product: base_product::Model,
    description: Option<String>,
    category_id: Option<Uuid>,
) -> Result<base_product::Model>
where
    C: ConnectionTrait,
{
    let mut product: base_product::ActiveModel = product.into();
    product.description = Set(description);
    product.category_id = Set(category_id);
    product.updated_at = Set(chrono::Utc::now().naive_utc());

    product.update(db).await.map_err(Into::into)
}

/// Finds the base product named `name`, creating it when absent.
///
/// The name is matched exactly, whitespace included, so materials with
/// slightly different names get separate base products. An existing product
/// whose description or category differs from the material's is updated to
/// match, which refreshes its `updated_at`. An unchanged product is returned
/// as is without a write.
///
/// # Errors
/// Returns an error if the lookup, insert or update fails.
pub async fn resolve_base_product<C>(
    db: &C,
    name: &str,
    description: Option<String>,
    category_id: Option<Uuid>,
) -> Result<base_product::Model>
where
    C: ConnectionTrait,
{
    match get_base_product_by_name(db, name).await? {
        Some(existing)
            if existing.description == description && existing.category_id == category_id =>
        {
            debug!("Reusing base product '{}' ({})", existing.name, existing.id);
            Ok(existing)
        }
        Some(existing) => {
            debug!("Updating details of base product '{}'", existing.name);
            update_base_product_details(db, existing, description, category_id).await
        }
        None => {
            debug!("Creating base product '{}'", name);
            create_base_product(db, name, description, category_id).await
        }
    }
}

/// Finds a variant by name within a base product.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_variant_by_name_and_base_product<C>(
    db: &C,
    name: &str,
    base_product_id: Uuid,
) -> Result<Option<product_variant::Model>>
where
    C: ConnectionTrait,
{
    ProductVariant::find()
        .filter(product_variant::Column::Name.eq(name))
        .filter(product_variant::Column::BaseProductId.eq(base_product_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a variant under `base_product_id`.
///
/// # Errors
/// Returns an error if the database insert fails.
pub async fn create_variant<C>(
    db: &C,
    base_product_id: Uuid,
    details: &VariantDetails,
) -> Result<product_variant::Model>
where
    C: ConnectionTrait,
{
    let now = chrono::Utc::now().naive_utc();

    let variant = product_variant::ActiveModel {
        id: Set(Uuid::new_v4()),
        base_product_id: Set(base_product_id),
        name: Set(details.name.clone()),
        stock_quantity: Set(details.stock_quantity),
        unit_of_measure_id: Set(details.unit_of_measure_id),
        unit_value: Set(details.unit_value),
        usage_notes: Set(details.usage_notes.clone()),
        photos: Set(details.photos.clone()),
        properties: Set(details.properties.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    variant.insert(db).await.map_err(Into::into)
}

/// Replaces an existing variant's stock, unit, notes, photos and properties.
/// Identity, owner and name are left untouched.
///
/// # Errors
/// Returns an error if the database update fails.
pub async fn update_variant<C>(
    db: &C,
    variant: product_variant::Model,
    details: &VariantDetails,
) -> Result<product_variant::Model>
where
    C: ConnectionTrait,
{
    let mut variant: product_variant::ActiveModel = variant.into();
    variant.stock_quantity = Set(details.stock_quantity);
    variant.unit_of_measure_id = Set(details.unit_of_measure_id);
    variant.unit_value = Set(details.unit_value);
    variant.usage_notes = Set(details.usage_notes.clone());
    variant.photos = Set(details.photos.clone());
    variant.properties = Set(details.properties.clone());
    variant.updated_at = Set(chrono::Utc::now().naive_utc());

    variant.update(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::unit::resolve_unit_of_measure;
    use crate::models::PropertyValue;
    use crate::test_utils::*;
    use std::collections::BTreeMap;

    fn details(name: &str, unit_of_measure_id: Uuid, stock_quantity: f64) -> VariantDetails {
        VariantDetails {
            name: name.to_string(),
            stock_quantity,
            unit_of_measure_id,
            unit_value: 1.0,
            usage_notes: None,
            photos: PhotoList::default(),
            properties: PropertyMap::default(),
        }
    }

    #[tokio::test]
    async fn test_resolve_base_product_creates_then_reuses() -> Result<()> {
        let db = setup_test_db().await?;

        let created = resolve_base_product(&db, "Steel Pipe", None, None).await?;
        let reused = resolve_base_product(&db, "Steel Pipe", None, None).await?;

        assert_eq!(created.id, reused.id);
        assert_eq!(BaseProduct::find().count(&db).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_base_product_updates_changed_details() -> Result<()> {
        let db = setup_test_db().await?;
        let category = create_test_category(&db, "Plumbing").await?;

        let created = resolve_base_product(&db, "Steel Pipe", None, None).await?;
        let updated = resolve_base_product(
            &db,
            "Steel Pipe",
            Some("Galvanised".to_string()),
            Some(category.id),
        )
        .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.description.as_deref(), Some("Galvanised"));
        assert_eq!(updated.category_id, Some(category.id));

        let stored = BaseProduct::find_by_id(created.id).one(&db).await?.unwrap();
        assert_eq!(stored, updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_base_product_lookup_is_exact() -> Result<()> {
        let db = setup_test_db().await?;
        create_base_product(&db, "Steel Pipe", None, None).await?;

        assert!(get_base_product_by_name(&db, "Steel Pipe").await?.is_some());
        assert!(get_base_product_by_name(&db, "Steel").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_find_variant() -> Result<()> {
        let db = setup_test_db().await?;
        let unit = resolve_unit_of_measure(&db, "kg").await?;
        let product = create_base_product(&db, "Steel Pipe", None, None).await?;
        let other = create_base_product(&db, "Copper Pipe", None, None).await?;

        let mut new_details = details("Steel Pipe", unit.id, 100.0);
        new_details.photos = PhotoList(vec!["a.jpg".to_string()]);
        new_details.properties = PropertyMap(BTreeMap::from([(
            "grade".to_string(),
            PropertyValue::Text("A".to_string()),
        )]));
        let variant = create_variant(&db, product.id, &new_details).await?;

        let found = get_variant_by_name_and_base_product(&db, "Steel Pipe", product.id)
            .await?
            .unwrap();
        assert_eq!(found, variant);
        assert_eq!(found.photos.0, vec!["a.jpg".to_string()]);
        assert_eq!(found.properties, new_details.properties);

        // Same name under a different base product is a different variant
        assert!(
            get_variant_by_name_and_base_product(&db, "Steel Pipe", other.id)
                .await?
                .is_none()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_variant_in_place() -> Result<()> {
        let db = setup_test_db().await?;
        let kg = resolve_unit_of_measure(&db, "kg").await?;
        let pcs = resolve_unit_of_measure(&db, "pcs").await?;
        let product = create_base_product(&db, "Steel Pipe", None, None).await?;
        let variant = create_variant(&db, product.id, &details("Steel Pipe", kg.id, 100.0)).await?;

        let mut changed = details("Steel Pipe", pcs.id, 40.0);
        changed.usage_notes = Some("Handle with gloves".to_string());
        let updated = update_variant(&db, variant.clone(), &changed).await?;

        assert_eq!(updated.id, variant.id);
        assert_eq!(updated.stock_quantity, 40.0);
        assert_eq!(updated.unit_of_measure_id, pcs.id);
        assert_eq!(updated.usage_notes.as_deref(), Some("Handle with gloves"));
        assert_eq!(ProductVariant::find().count(&db).await?, 1);

        Ok(())
    }
}
