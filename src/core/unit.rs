//! Unit of measure normalization and resolution.
//!
//! Legacy materials describe units as free text ("kg", "Litres", "pcs").
//! [`normalize_unit`] maps known spellings onto a canonical unit and falls back
//! to the raw text for anything it does not recognise. [`resolve_unit_of_measure`]
//! then finds or creates the matching `units_of_measure` row.

use crate::{
    entities::{UnitOfMeasure, unit_of_measure},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::{debug, info};

/// Category label used for unrecognised unit types
pub const OTHER_UNIT_TYPE: &str = "Other";

/// A canonical unit definition produced by [`normalize_unit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUnit {
    /// Canonical name (e.g., "Kilogram")
    pub name: String,
    /// Symbol (e.g., "kg")
    pub symbol: String,
    /// Category label (e.g., "Weight")
    pub unit_type: String,
}

/// (synonyms, name, symbol, category)
const UNIT_SYNONYMS: &[(&[&str], &str, &str, &str)] = &[
    (&["kg", "kgs", "kilogram", "kilograms"], "Kilogram", "kg", "Weight"),
    (&["g", "gr", "gram", "grams"], "Gram", "g", "Weight"),
    (&["lb", "lbs", "pound", "pounds"], "Pound", "lb", "Weight"),
    (
        &["l", "liter", "liters", "litre", "litres"],
        "Liter",
        "L",
        "Volume",
    ),
    (
        &["ml", "milliliter", "milliliters", "millilitre", "millilitres"],
        "Milliliter",
        "mL",
        "Volume",
    ),
    (&["m", "meter", "meters", "metre", "metres"], "Meter", "m", "Length"),
    (
        &["cm", "centimeter", "centimeters", "centimetre", "centimetres"],
        "Centimeter",
        "cm",
        "Length",
    ),
    (
        &["mm", "millimeter", "millimeters", "millimetre", "millimetres"],
        "Millimeter",
        "mm",
        "Length",
    ),
    (
        &["pcs", "pc", "piece", "pieces", "unit", "units", "ea", "each"],
        "Piece",
        "pcs",
        "Count",
    ),
    (&["box", "boxes", "bx"], "Box", "box", "Count"),
];

/// Maps a free-text unit type onto its canonical unit.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Unknown
/// input is returned verbatim as both name and symbol with category
/// [`OTHER_UNIT_TYPE`]; this never fails.
#[must_use]
pub fn normalize_unit(raw_unit_type: &str) -> NormalizedUnit {
    let key = raw_unit_type.trim().to_lowercase();

    UNIT_SYNONYMS
        .iter()
        .find(|(synonyms, ..)| synonyms.contains(&key.as_str()))
        .map_or_else(
            || NormalizedUnit {
                name: raw_unit_type.to_string(),
                symbol: raw_unit_type.to_string(),
                unit_type: OTHER_UNIT_TYPE.to_string(),
            },
            |(_, name, symbol, unit_type)| NormalizedUnit {
                name: (*name).to_string(),
                symbol: (*symbol).to_string(),
                unit_type: (*unit_type).to_string(),
            },
        )
}

/// Finds a unit of measure by exact name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_unit_by_name<C>(db: &C, name: &str) -> Result<Option<unit_of_measure::Model>>
where
    C: ConnectionTrait,
{
    UnitOfMeasure::find()
        .filter(unit_of_measure::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts a new unit of measure.
///
/// # Errors
/// Returns an error if the insert fails (including a duplicate name).
pub async fn create_unit<C>(db: &C, unit: &NormalizedUnit) -> Result<unit_of_measure::Model>
where
    C: ConnectionTrait,
{
    let unit = unit_of_measure::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(unit.name.clone()),
        symbol: Set(unit.symbol.clone()),
        unit_type: Set(unit.unit_type.clone()),
    };
    unit.insert(db).await.map_err(Into::into)
}

/// Resolves the unit of measure for a raw material unit type, creating it if needed.
///
/// The raw text is normalized with [`normalize_unit`] first. The lookup then
/// tries the raw name, so units created earlier under a legacy spelling are
/// reused, and then the canonical name. A new unit with the canonical name,
/// symbol and type is inserted only when neither lookup finds one.
///
/// This runs inside the caller's transaction, so a unit created for a material
/// that later fails is rolled back with it.
///
/// # Errors
/// Returns an error if:
/// - The unit type normalizes to a blank name ([`Error::UnitResolution`])
/// - A database lookup or insert fails
pub async fn resolve_unit_of_measure<C>(
    db: &C,
    raw_unit_type: &str,
) -> Result<unit_of_measure::Model>
where
    C: ConnectionTrait,
{
    let normalized = normalize_unit(raw_unit_type);
    if normalized.name.trim().is_empty() {
        return Err(Error::UnitResolution {
            unit_type: raw_unit_type.to_string(),
        });
    }

    if let Some(unit) = get_unit_by_name(db, raw_unit_type).await? {
        debug!("Unit '{}' matched by raw name", raw_unit_type);
        return Ok(unit);
    }

    if let Some(unit) = get_unit_by_name(db, &normalized.name).await? {
        debug!(
            "Unit '{}' matched by canonical name '{}'",
            raw_unit_type, normalized.name
        );
        return Ok(unit);
    }

    let unit = create_unit(db, &normalized).await?;
    info!(
        "Created unit of measure '{}' ({}) for unit type '{}'",
        unit.name, unit.symbol, raw_unit_type
    );
    Ok(unit)
}
