//! Decoding of the serialized photo and property payloads stored on materials.
//!
//! Legacy payloads are frequently empty or malformed. Decoding never fails:
//! bad input degrades to an empty collection and a warning.

use crate::models::{PhotoList, PropertyMap};
use tracing::warn;
use uuid::Uuid;

/// Decodes a serialized JSON array of photo references.
///
/// Blank input yields an empty list without a warning. Blank entries are dropped.
#[must_use]
pub fn parse_photo_list(material_id: Uuid, raw: &str) -> PhotoList {
    if raw.trim().is_empty() {
        return PhotoList::default();
    }

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(photos) => PhotoList(
            photos
                .into_iter()
                .map(|photo| photo.trim().to_string())
                .filter(|photo| !photo.is_empty())
                .collect(),
        ),
        Err(e) => {
            warn!(
                "Material {} has malformed photo list, migrating without photos: {}",
                material_id, e
            );
            PhotoList::default()
        }
    }
}

/// Decodes a serialized JSON object of dynamic properties.
///
/// Blank input yields an empty map without a warning.
#[must_use]
pub fn parse_property_map(material_id: Uuid, raw: &str) -> PropertyMap {
    if raw.trim().is_empty() {
        return PropertyMap::default();
    }

    match serde_json::from_str::<PropertyMap>(raw) {
        Ok(properties) => properties,
        Err(e) => {
            warn!(
                "Material {} has malformed dynamic properties, migrating without them: {}",
                material_id, e
            );
            PropertyMap::default()
        }
    }
}
