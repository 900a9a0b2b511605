//! Schema-level field definitions and the schema document loading boundary.
//!
//! Definitions are supplied by the backend and treated as immutable,
//! read-only inputs. `apiName` is the join key between a definition and a
//! stored value and must be unique within a schema document.

use serde::{Deserialize, Serialize};

use crate::field_type::FieldType;

/// One field's shape, independent of any value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Stable identifier; the value-map key.
    pub api_name: String,
    /// Human-readable label.
    pub name: String,
    /// Type tag; determines which of the other attributes are meaningful.
    pub field_type: FieldType,
    /// Governs presence validation.
    #[serde(default)]
    pub is_required: bool,
    /// Display hint, no effect on validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Display hint, no effect on validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered choices for SELECT/MULTISELECT; empty for every other type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Errors produced while loading a schema document.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The document parsed as JSON but is not an array of definitions.
    #[error("schema document must be a JSON array of field definitions")]
    NotAnArray,
    /// The document is not valid JSON, or a definition record is malformed.
    #[error("invalid schema document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse a schema document: an ordered JSON array of definition records.
pub fn parse_schema(doc: &str) -> Result<Vec<FieldDefinition>, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(doc)?;
    if !value.is_array() {
        return Err(SchemaError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}
