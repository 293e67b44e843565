//! JSON-backed value types stored on product variants.
//!
//! Legacy materials keep photos and dynamic properties as serialized strings.
//! Once migrated they live in typed JSON columns using the types below.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single dynamic property value. Mirrors the JSON data model so arbitrary
/// property payloads survive migration unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// JSON `null`
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number (integer or float, kept exact)
    Number(serde_json::Number),
    /// JSON string
    Text(String),
    /// JSON array
    List(Vec<PropertyValue>),
    /// Nested JSON object
    Map(BTreeMap<String, PropertyValue>),
}

/// Dynamic property map of a product variant, keyed by property name
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct PropertyMap(pub BTreeMap<String, PropertyValue>);

impl PropertyMap {
    /// Returns true when no properties are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level properties
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Looks up a top-level property
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }
}

/// Ordered list of photo references (URLs or storage keys)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct PhotoList(pub Vec<String>);

impl PhotoList {
    /// Returns true when there are no photos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of photos
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_property_value_keeps_json_shape() {
        let raw = r#"{"color":"red","diameter":12,"ratio":0.5,"coated":true,"grade":null,
            "sizes":[1,2],"dims":{"w":3}}"#;
        let map: PropertyMap = serde_json::from_str(raw).unwrap();

        assert_eq!(map.len(), 7);
        assert_eq!(map.get("color"), Some(&PropertyValue::Text("red".to_string())));
        assert_eq!(map.get("coated"), Some(&PropertyValue::Bool(true)));
        assert_eq!(map.get("grade"), Some(&PropertyValue::Null));
        assert!(matches!(map.get("diameter"), Some(PropertyValue::Number(n)) if n.as_i64() == Some(12)));
        assert!(matches!(map.get("sizes"), Some(PropertyValue::List(items)) if items.len() == 2));
        assert!(matches!(map.get("dims"), Some(PropertyValue::Map(inner)) if inner.contains_key("w")));

        // Integers stay integers after a write
        let written = serde_json::to_value(&map).unwrap();
        assert_eq!(written["diameter"], serde_json::json!(12));
    }
}
