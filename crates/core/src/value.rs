//! Runtime field values and the coercion boundary.
//!
//! A stored value has no static type of its own; its expected shape is
//! re-derived from the paired [`FieldDefinition`] every time it is handled.
//! `FieldValue::from_json` is the single place where a definition and a raw
//! JSON value meet: past that boundary the engine works on this closed union
//! and never re-checks shapes ad hoc.
//!
//! Malformed stored values are recoverable data, never a crash. A garbage
//! DATE string or a non-boolean BOOLEAN coerces to absent (the user re-enters
//! it); a non-numeric NUMBER/CURRENCY string is kept as `Text` so validation
//! can report "Must be a valid number" against it.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::definition::FieldDefinition;
use crate::field_type::FieldType;

/// A runtime value for one field. Absence is `Option::None` in the value
/// map, never a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(Decimal),
    Bool(bool),
    Instant(OffsetDateTime),
    List(Vec<String>),
}

impl FieldValue {
    /// Human-readable type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "Text",
            FieldValue::Number(_) => "Number",
            FieldValue::Bool(_) => "Bool",
            FieldValue::Instant(_) => "Instant",
            FieldValue::List(_) => "List",
        }
    }

    /// True when the value counts as empty for presence validation: an
    /// empty string, or a zero-length selection list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// The finite numeric quantity this value holds, if any. Text that
    /// parses as a decimal counts; everything else does not.
    pub fn numeric(&self) -> Option<Decimal> {
        match self {
            FieldValue::Number(d) => Some(*d),
            FieldValue::Text(s) => parse_decimal(s.trim()),
            _ => None,
        }
    }

    /// The canonical instant this value holds, if any. Text in RFC 3339
    /// form counts; everything else does not.
    pub fn instant(&self) -> Option<OffsetDateTime> {
        match self {
            FieldValue::Instant(t) => Some(*t),
            FieldValue::Text(s) => OffsetDateTime::parse(s, &Rfc3339).ok(),
            _ => None,
        }
    }

    /// Plain string form, used by the display fallback path.
    pub fn plain_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(d) => d.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Instant(t) => t.format(&Rfc3339).unwrap_or_default(),
            FieldValue::List(items) => items.join(", "),
        }
    }

    /// Coerce a raw JSON value into the canonical in-memory shape implied
    /// by the paired definition. Returns `None` for JSON null and for
    /// malformed values the user must re-enter.
    pub fn from_json(def: &FieldDefinition, raw: &serde_json::Value) -> Option<FieldValue> {
        match &def.field_type {
            FieldType::Number | FieldType::Currency => match raw {
                serde_json::Value::Number(n) => Some(
                    parse_decimal(&n.to_string())
                        .map(FieldValue::Number)
                        // Out-of-range numbers stay textual so validation
                        // reports them instead of silently dropping them.
                        .unwrap_or_else(|| FieldValue::Text(n.to_string())),
                ),
                serde_json::Value::String(s) => Some(
                    parse_decimal(s.trim())
                        .map(FieldValue::Number)
                        .unwrap_or_else(|| FieldValue::Text(s.clone())),
                ),
                serde_json::Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
                _ => None,
            },
            FieldType::Boolean => raw.as_bool().map(FieldValue::Bool),
            FieldType::Date | FieldType::DateTime => {
                let s = raw.as_str()?;
                if s.is_empty() {
                    return Some(FieldValue::Text(String::new()));
                }
                OffsetDateTime::parse(s, &Rfc3339)
                    .ok()
                    .map(FieldValue::Instant)
            }
            FieldType::MultiSelect => match raw {
                serde_json::Value::Array(items) => Some(FieldValue::List(
                    items
                        .iter()
                        .filter_map(|item| match item {
                            serde_json::Value::String(s) => Some(s.clone()),
                            serde_json::Value::Number(n) => Some(n.to_string()),
                            serde_json::Value::Bool(b) => Some(b.to_string()),
                            _ => None,
                        })
                        .collect(),
                )),
                // A bare string is tolerated as a single selection.
                serde_json::Value::String(s) => Some(FieldValue::List(vec![s.clone()])),
                _ => None,
            },
            // TEXT, TEXTAREA, SELECT, EMAIL, PHONE, URL, and anything
            // unrecognized take the text path.
            _ => match raw {
                serde_json::Value::String(s) => Some(FieldValue::Text(s.clone())),
                serde_json::Value::Number(n) => Some(FieldValue::Text(n.to_string())),
                serde_json::Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
                _ => None,
            },
        }
    }

    /// Canonical JSON payload form: strings for text-shaped types, a JSON
    /// number for numeric values, a boolean, an RFC 3339 string, or an
    /// array of strings.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Number(d) => decimal_to_json(*d),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Instant(t) => t
                .format(&Rfc3339)
                .map(serde_json::Value::String)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::List(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(|s| serde_json::Value::String(s.clone()))
                    .collect(),
            ),
        }
    }
}

/// Parse a decimal, accepting plain and scientific notation.
fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    s.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(s).ok())
}

/// A Decimal at the JSON boundary. The wire representation is a JSON
/// number; values a JSON number cannot carry fall back to their string form.
fn decimal_to_json(d: Decimal) -> serde_json::Value {
    match serde_json::from_str::<serde_json::Number>(&d.to_string()) {
        Ok(n) => serde_json::Value::Number(n),
        Err(_) => serde_json::Value::String(d.to_string()),
    }
}

/// The current values of one edit session, keyed by `apiName`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueMap(pub BTreeMap<String, FieldValue>);

impl ValueMap {
    pub fn new() -> Self {
        ValueMap(BTreeMap::new())
    }

    pub fn get(&self, api_name: &str) -> Option<&FieldValue> {
        self.0.get(api_name)
    }

    pub fn get_mut(&mut self, api_name: &str) -> Option<&mut FieldValue> {
        self.0.get_mut(api_name)
    }

    pub fn insert(&mut self, api_name: String, value: FieldValue) {
        self.0.insert(api_name, value);
    }

    pub fn remove(&mut self, api_name: &str) -> Option<FieldValue> {
        self.0.remove(api_name)
    }

    /// True when the field holds no value, or an empty one.
    pub fn is_empty_at(&self, api_name: &str) -> bool {
        self.get(api_name).map_or(true, FieldValue::is_empty)
    }

    /// Build a value map from a JSON object, definition-directed.
    /// Undeclared keys, nulls, and unrecoverably malformed values are
    /// dropped; the field reads as empty and is re-entered by the user.
    pub fn from_json(definitions: &[FieldDefinition], raw: &serde_json::Value) -> ValueMap {
        let mut map = ValueMap::new();
        let Some(obj) = raw.as_object() else {
            return map;
        };
        for def in definitions {
            if let Some(v) = obj.get(&def.api_name) {
                if let Some(value) = FieldValue::from_json(def, v) {
                    map.insert(def.api_name.clone(), value);
                }
            }
        }
        map
    }

    /// The canonical save payload over the declared fields. Fields with no
    /// value are omitted.
    pub fn to_payload(&self, definitions: &[FieldDefinition]) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        for def in definitions {
            if let Some(value) = self.get(&def.api_name) {
                obj.insert(def.api_name.clone(), value.to_json());
            }
        }
        serde_json::Value::Object(obj)
    }
}
