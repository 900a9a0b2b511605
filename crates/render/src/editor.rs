//! Editor affordance dispatch.
//!
//! `describe_editor` maps a definition to the interaction affordance the
//! caller should present, as plain data -- no UI toolkit types leak in
//! either direction. One arm per field type; unrecognized tags take the
//! plain-text fallback arm rather than failing the group.

use fieldset_core::{FieldDefinition, FieldType, FieldValue};
use rust_decimal::Decimal;
use serde::Serialize;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::CURRENCY_SYMBOL;

/// Default height of a multi-line text affordance, in rows.
const TEXTAREA_ROWS: u8 = 3;

/// Keyboard/format hint for a single-line text affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextInput {
    Plain,
    Email,
    Phone,
    Url,
}

/// Which interaction affordance to present for a field, and how.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditorSpec {
    SingleLine {
        input: TextInput,
        placeholder: String,
    },
    MultiLine {
        rows: u8,
        placeholder: String,
    },
    Numeric {
        #[serde(skip_serializing_if = "Option::is_none")]
        step: Option<Decimal>,
        #[serde(skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
    },
    DatePicker,
    DateTimePicker,
    /// The field's own name doubles as the inline label.
    Toggle { label: String },
    /// Closed single choice over `options`, in their given order.
    SingleChoice { options: Vec<String> },
    /// `selected` renders as removable chips in selection order;
    /// `available` excludes already-selected options.
    MultiChoice {
        selected: Vec<String>,
        available: Vec<String>,
    },
}

/// Map a definition to its editor affordance. The current value feeds only
/// the MULTISELECT chip state; every other affordance derives from the
/// definition alone.
pub fn describe_editor(def: &FieldDefinition, value: Option<&FieldValue>) -> EditorSpec {
    match &def.field_type {
        FieldType::Text => single_line(TextInput::Plain, def),
        FieldType::Email => single_line(TextInput::Email, def),
        FieldType::Phone => single_line(TextInput::Phone, def),
        FieldType::Url => single_line(TextInput::Url, def),
        FieldType::Textarea => EditorSpec::MultiLine {
            rows: TEXTAREA_ROWS,
            placeholder: placeholder(def),
        },
        FieldType::Number => EditorSpec::Numeric {
            step: None,
            prefix: None,
        },
        FieldType::Currency => EditorSpec::Numeric {
            step: Some(Decimal::new(1, 2)),
            prefix: Some(CURRENCY_SYMBOL.to_string()),
        },
        FieldType::Date => EditorSpec::DatePicker,
        FieldType::DateTime => EditorSpec::DateTimePicker,
        FieldType::Boolean => EditorSpec::Toggle {
            label: def.name.clone(),
        },
        FieldType::Select => EditorSpec::SingleChoice {
            options: def.options.clone(),
        },
        FieldType::MultiSelect => {
            let selected = match value {
                Some(FieldValue::List(items)) => items.clone(),
                _ => Vec::new(),
            };
            let available = def
                .options
                .iter()
                .filter(|option| !selected.contains(option))
                .cloned()
                .collect();
            EditorSpec::MultiChoice {
                selected,
                available,
            }
        }
        // Unrecognized tags degrade to the safest editable representation.
        FieldType::Unknown(_) => single_line(TextInput::Plain, def),
    }
}

fn single_line(input: TextInput, def: &FieldDefinition) -> EditorSpec {
    EditorSpec::SingleLine {
        input,
        placeholder: placeholder(def),
    }
}

fn placeholder(def: &FieldDefinition) -> String {
    def.placeholder
        .clone()
        .unwrap_or_else(|| format!("Enter {}", def.name.to_lowercase()))
}

/// Minute-precision editing form of a canonical instant, `YYYY-MM-DDTHH:MM`
/// on the UTC clock face.
pub fn datetime_to_input(instant: &OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    instant
        .to_offset(UtcOffset::UTC)
        .format(&format)
        .unwrap_or_default()
}

/// Parse the editing form back to the canonical instant. Round-trips
/// losslessly with [`datetime_to_input`] at minute precision.
pub fn datetime_from_input(s: &str) -> Option<OffsetDateTime> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    PrimitiveDateTime::parse(s, &format)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
