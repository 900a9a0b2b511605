//! Read-only display formatting, the symmetric counterpart to the editor
//! dispatch. Total and deterministic: malformed stored values format as the
//! unset sentinel, never a panic.

use fieldset_core::{FieldDefinition, FieldType, FieldValue};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::CURRENCY_SYMBOL;

/// Sentinel for an absent value.
pub const NOT_SET: &str = "Not set";
/// Sentinel for an empty multi-choice selection.
pub const NONE_SELECTED: &str = "None selected";

/// How a reference-shaped value is navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Web,
    Mail,
    Call,
}

/// A human-readable rendering of one stored value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayValue {
    Unset { text: &'static str },
    Plain { text: String },
    /// The raw string decorated as a navigable reference.
    Reference { link: LinkKind, text: String },
    /// Chip-rendered option strings in stored order.
    Chips { items: Vec<String> },
}

impl DisplayValue {
    /// Flattened plain-text form for text-mode output.
    pub fn text(&self) -> String {
        match self {
            DisplayValue::Unset { text } => (*text).to_string(),
            DisplayValue::Plain { text } => text.clone(),
            DisplayValue::Reference { text, .. } => text.clone(),
            DisplayValue::Chips { items } => items.join(", "),
        }
    }
}

/// Render a stored value for a detail view.
pub fn format_for_display(def: &FieldDefinition, value: Option<&FieldValue>) -> DisplayValue {
    let unset = || DisplayValue::Unset { text: NOT_SET };
    let empty = value.map_or(true, FieldValue::is_empty);
    if empty {
        if def.field_type == FieldType::MultiSelect {
            return DisplayValue::Unset {
                text: NONE_SELECTED,
            };
        }
        return unset();
    }
    let Some(value) = value else {
        return unset();
    };

    match &def.field_type {
        FieldType::Boolean => match value {
            FieldValue::Bool(b) => DisplayValue::Plain {
                text: if *b { "Yes" } else { "No" }.to_string(),
            },
            other => plain(other),
        },
        FieldType::Date => match value.instant() {
            Some(t) => DisplayValue::Plain {
                text: long_date(&t),
            },
            None => unset(),
        },
        FieldType::DateTime => match value.instant() {
            Some(t) => DisplayValue::Plain {
                text: format!("{} at {}", long_date(&t), short_time(&t)),
            },
            None => unset(),
        },
        FieldType::Currency => match value.numeric() {
            Some(amount) => DisplayValue::Plain {
                text: format_money(amount),
            },
            None => unset(),
        },
        FieldType::MultiSelect => match value.as_list() {
            Some(items) => DisplayValue::Chips {
                items: items.to_vec(),
            },
            None => DisplayValue::Chips {
                items: vec![value.plain_text()],
            },
        },
        FieldType::Url => reference(LinkKind::Web, value),
        FieldType::Email => reference(LinkKind::Mail, value),
        FieldType::Phone => reference(LinkKind::Call, value),
        // TEXT, TEXTAREA, NUMBER, SELECT, and unrecognized tags: the
        // value's plain string form.
        _ => plain(value),
    }
}

fn plain(value: &FieldValue) -> DisplayValue {
    DisplayValue::Plain {
        text: value.plain_text(),
    }
}

fn reference(link: LinkKind, value: &FieldValue) -> DisplayValue {
    DisplayValue::Reference {
        link,
        text: value.plain_text(),
    }
}

/// "January 5, 2024" on the UTC clock face.
fn long_date(instant: &OffsetDateTime) -> String {
    let format = format_description!("[month repr:long] [day padding:none], [year]");
    instant
        .to_offset(UtcOffset::UTC)
        .format(&format)
        .unwrap_or_default()
}

/// "2:30 PM".
fn short_time(instant: &OffsetDateTime) -> String {
    let format = format_description!("[hour repr:12 padding:none]:[minute] [period case:upper]");
    instant
        .to_offset(UtcOffset::UTC)
        .format(&format)
        .unwrap_or_default()
}

/// Fixed-currency monetary form: two decimals, banker's rounding,
/// thousands grouping.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let unsigned = rounded.abs().to_string();
    let (int_part, frac) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), ""));
    let frac_part = format!("{frac:0<2}");
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{frac_part}")
}
