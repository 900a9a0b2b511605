//! The per-field validation pipeline.
//!
//! Rules run in a fixed order and short-circuit at the first failure, so a
//! field reports at most one diagnostic per pass:
//!
//! 1. Presence -- required fields must hold a non-empty value.
//! 2. Absence -- optional empty fields skip every remaining rule.
//! 3. Type-specific shape -- EMAIL/URL/PHONE/NUMBER/CURRENCY only.
//!
//! SELECT and MULTISELECT values are deliberately not cross-checked against
//! the definition's `options`: options lists change after values are
//! recorded, and rejecting orphaned selections would invalidate saved data.

use url::Url;

use crate::definition::FieldDefinition;
use crate::error::{ErrorMap, ValidationError};
use crate::field_type::FieldType;
use crate::value::{FieldValue, ValueMap};

/// Validate every definition against the current values. The result maps
/// `apiName` to the first failing rule's diagnostic; fields with no error
/// are omitted. Runs in O(N) over the definitions.
pub fn validate(definitions: &[FieldDefinition], values: &ValueMap) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for def in definitions {
        if let Some(error) = validate_field(def, values.get(&def.api_name)) {
            errors.insert(def.api_name.clone(), error);
        }
    }
    errors
}

fn validate_field(def: &FieldDefinition, value: Option<&FieldValue>) -> Option<ValidationError> {
    let empty = value.map_or(true, FieldValue::is_empty);
    if empty {
        // Optional fields are never type-checked when empty.
        return def.is_required.then(|| ValidationError::RequiredFieldMissing {
            name: def.name.clone(),
        });
    }
    let Some(value) = value else {
        return None;
    };

    match &def.field_type {
        FieldType::Email => {
            let ok = value.as_text().map_or(false, is_email);
            (!ok).then_some(ValidationError::InvalidEmailFormat)
        }
        FieldType::Url => {
            let ok = value.as_text().map_or(false, |s| Url::parse(s).is_ok());
            (!ok).then_some(ValidationError::InvalidUrlFormat)
        }
        FieldType::Phone => {
            let ok = value.as_text().map_or(false, is_phone);
            (!ok).then_some(ValidationError::InvalidPhoneFormat)
        }
        FieldType::Number | FieldType::Currency => value
            .numeric()
            .is_none()
            .then_some(ValidationError::InvalidNumberFormat),
        // Everything else, unrecognized tags included, has no structural
        // rule beyond presence.
        _ => None,
    }
}

/// Local-part `@` domain, where the domain contains an interior dot and
/// neither side carries whitespace or a second `@`.
fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Digits, spaces, `+`, `-`, `(`, `)` only.
fn is_phone(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(api_name: &str, field_type: FieldType, required: bool) -> FieldDefinition {
        FieldDefinition {
            api_name: api_name.to_string(),
            name: api_name.to_string(),
            field_type,
            is_required: required,
            placeholder: None,
            description: None,
            options: Vec::new(),
        }
    }

    fn values(pairs: &[(&str, FieldValue)]) -> ValueMap {
        let mut map = ValueMap::new();
        for (k, v) in pairs {
            map.insert(k.to_string(), v.clone());
        }
        map
    }

    #[test]
    fn required_absent_field_reports_exactly_one_error() {
        let defs = vec![def("title", FieldType::Text, true)];
        let errors = validate(&defs, &ValueMap::new());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("title"),
            Some(&ValidationError::RequiredFieldMissing {
                name: "title".to_string()
            })
        );
    }

    #[test]
    fn required_empty_string_counts_as_absent() {
        let defs = vec![def("title", FieldType::Text, true)];
        let errors = validate(&defs, &values(&[("title", FieldValue::Text(String::new()))]));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn required_empty_multiselect_counts_as_absent() {
        // Scenario: required MULTISELECT with a zero-length selection.
        let defs = vec![def("tags", FieldType::MultiSelect, true)];
        let errors = validate(&defs, &values(&[("tags", FieldValue::List(Vec::new()))]));
        assert_eq!(errors.message("tags").as_deref(), Some("tags is required"));
    }

    #[test]
    fn optional_empty_fields_skip_every_rule() {
        // Empty values never reach the type-specific rules, whatever the type.
        let defs = vec![
            def("notes", FieldType::Textarea, false),
            def("mail", FieldType::Email, false),
            def("site", FieldType::Url, false),
            def("budget", FieldType::Currency, false),
        ];
        let errors = validate(
            &defs,
            &values(&[("mail", FieldValue::Text(String::new()))]),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn presence_wins_over_type_rules() {
        // A required empty CURRENCY reports "is required", not "valid number".
        let defs = vec![def("budget", FieldType::Currency, true)];
        let errors = validate(&defs, &ValueMap::new());
        assert_eq!(
            errors.message("budget").as_deref(),
            Some("budget is required")
        );
    }

    #[test]
    fn currency_text_must_be_numeric() {
        let defs = vec![def("budget", FieldType::Currency, true)];
        let errors = validate(&defs, &values(&[("budget", FieldValue::Text("abc".into()))]));
        assert_eq!(
            errors.message("budget").as_deref(),
            Some("Must be a valid number")
        );
    }

    #[test]
    fn numeric_text_passes_number_rule() {
        let defs = vec![def("count", FieldType::Number, true)];
        let errors = validate(&defs, &values(&[("count", FieldValue::Text("12.5".into()))]));
        assert!(errors.is_empty());
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.com", "first.last@sub.domain.org", "x@y.z"] {
            assert!(is_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "plain",
            "@b.com",
            "a@",
            "a@b",
            "a@.com",
            "a@b.",
            "a b@c.com",
            "a@b c.com",
            "a@@b.com",
        ] {
            assert!(!is_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn email_rule_reports_invalid_address() {
        let defs = vec![def("mail", FieldType::Email, true)];
        let errors = validate(&defs, &values(&[("mail", FieldValue::Text("nope".into()))]));
        assert_eq!(
            errors.message("mail").as_deref(),
            Some("Invalid email address")
        );
        let errors = validate(&defs, &values(&[("mail", FieldValue::Text("a@b.com".into()))]));
        assert!(errors.is_empty());
    }

    #[test]
    fn url_rule_requires_absolute_urls() {
        let defs = vec![def("site", FieldType::Url, false)];
        let errors = validate(
            &defs,
            &values(&[("site", FieldValue::Text("https://example.com/x".into()))]),
        );
        assert!(errors.is_empty());
        let errors = validate(&defs, &values(&[("site", FieldValue::Text("not a url".into()))]));
        assert_eq!(errors.message("site").as_deref(), Some("Invalid URL"));
    }

    #[test]
    fn phone_rule_allows_formatting_characters() {
        let defs = vec![def("tel", FieldType::Phone, false)];
        let errors = validate(
            &defs,
            &values(&[("tel", FieldValue::Text("+1 (555) 867-5309".into()))]),
        );
        assert!(errors.is_empty());
        let errors = validate(&defs, &values(&[("tel", FieldValue::Text("555-CALL".into()))]));
        assert_eq!(
            errors.message("tel").as_deref(),
            Some("Invalid phone number")
        );
    }

    #[test]
    fn select_values_are_not_checked_against_options() {
        let mut d = def("stage", FieldType::Select, false);
        d.options = vec!["Lead".into(), "Won".into()];
        let errors = validate(
            &[d],
            &values(&[("stage", FieldValue::Text("Orphaned".into()))]),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn unknown_type_gets_presence_check_only() {
        let defs = vec![def("x", FieldType::Unknown("WEIRD".into()), true)];
        assert_eq!(validate(&defs, &ValueMap::new()).len(), 1);
        let errors = validate(&defs, &values(&[("x", FieldValue::Text("anything".into()))]));
        assert!(errors.is_empty());
    }

    #[test]
    fn validate_is_idempotent() {
        let defs = vec![
            def("budget", FieldType::Currency, true),
            def("mail", FieldType::Email, true),
        ];
        let vals = values(&[("budget", FieldValue::Text("abc".into()))]);
        let first = validate(&defs, &vals);
        let second = validate(&defs, &vals);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
