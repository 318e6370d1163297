//! Neo4j query modules organized by entity

mod index;
mod node;
mod relationship;

// Re-export Neo4jClient for the impl blocks
pub(super) use super::neo4j::Neo4jClient;

use std::collections::HashMap;

use neo4rs::{BoltBoolean, BoltFloat, BoltType};

use super::properties::{Properties, PropertyValue};
use super::store::StoreError;

/// Quote a label or relationship type for interpolation into Cypher
///
/// Labels cannot be query parameters, so they are backtick-quoted with
/// embedded backticks doubled.
pub fn quote_label(label: &str) -> Result<String, StoreError> {
    if label.trim().is_empty() {
        return Err(StoreError::InvalidLabel(label.to_string()));
    }
    Ok(format!("`{}`", label.replace('`', "``")))
}

/// Convert a property bag to a Bolt map parameter
pub fn properties_to_bolt(properties: &Properties) -> HashMap<String, BoltType> {
    properties
        .iter()
        .map(|(key, value)| (key.to_string(), value_to_bolt(value)))
        .collect()
}

fn value_to_bolt(value: &PropertyValue) -> BoltType {
    match value {
        PropertyValue::Boolean(b) => BoltType::Boolean(BoltBoolean::new(*b)),
        PropertyValue::Integer(i) => BoltType::Integer((*i).into()),
        PropertyValue::Float(f) => BoltType::Float(BoltFloat::new(*f)),
        PropertyValue::String(s) => BoltType::String(s.clone().into()),
        PropertyValue::Reference(r) => BoltType::String(r.entity_ref.clone().into()),
    }
}
