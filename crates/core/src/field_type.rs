//! The recognized field-type tags and their fallback behavior.
//!
//! Tags arrive from the schema backend as plain strings. `from_tag` never
//! rejects: a tag this build does not recognize becomes [`FieldType::Unknown`]
//! and behaves as `TEXT` at every dispatch site, so schemas published with
//! newer field types keep working without a client redeploy.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A field's type tag, deserialized from the schema wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Currency,
    Date,
    DateTime,
    Boolean,
    Select,
    MultiSelect,
    Email,
    Phone,
    Url,
    /// An unrecognized tag, carried verbatim. Re-serializing a schema must
    /// not rewrite tags the client does not know about.
    Unknown(String),
}

impl FieldType {
    /// Resolve a wire tag. Unknown tags are accepted, never rejected.
    pub fn from_tag(tag: &str) -> FieldType {
        match tag {
            "TEXT" => FieldType::Text,
            "TEXTAREA" => FieldType::Textarea,
            "NUMBER" => FieldType::Number,
            "CURRENCY" => FieldType::Currency,
            "DATE" => FieldType::Date,
            "DATETIME" => FieldType::DateTime,
            "BOOLEAN" => FieldType::Boolean,
            "SELECT" => FieldType::Select,
            "MULTISELECT" => FieldType::MultiSelect,
            "EMAIL" => FieldType::Email,
            "PHONE" => FieldType::Phone,
            "URL" => FieldType::Url,
            other => FieldType::Unknown(other.to_string()),
        }
    }

    /// The wire tag for this type.
    pub fn tag(&self) -> &str {
        match self {
            FieldType::Text => "TEXT",
            FieldType::Textarea => "TEXTAREA",
            FieldType::Number => "NUMBER",
            FieldType::Currency => "CURRENCY",
            FieldType::Date => "DATE",
            FieldType::DateTime => "DATETIME",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Select => "SELECT",
            FieldType::MultiSelect => "MULTISELECT",
            FieldType::Email => "EMAIL",
            FieldType::Phone => "PHONE",
            FieldType::Url => "URL",
            FieldType::Unknown(tag) => tag,
        }
    }

    /// True for types whose definition carries an `options` list.
    pub fn uses_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::MultiSelect)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagVisitor;

        impl Visitor<'_> for TagVisitor {
            type Value = FieldType;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a field type tag string")
            }

            fn visit_str<E: de::Error>(self, tag: &str) -> Result<FieldType, E> {
                Ok(FieldType::from_tag(tag))
            }
        }

        deserializer.deserialize_str(TagVisitor)
    }
}
