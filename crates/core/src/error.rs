//! Validation diagnostics.
//!
//! Every variant is a recoverable, caller-visible diagnostic surfaced next
//! to the offending field. Nothing here is ever raised as a panic; the
//! engine has no fatal-error class.

use std::collections::BTreeMap;

/// One diagnostic per failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{name} is required")]
    RequiredFieldMissing { name: String },
    #[error("Invalid email address")]
    InvalidEmailFormat,
    #[error("Invalid URL")]
    InvalidUrlFormat,
    #[error("Invalid phone number")]
    InvalidPhoneFormat,
    #[error("Must be a valid number")]
    InvalidNumberFormat,
}

/// Validation results keyed by `apiName`. At most one error per field
/// (first failing rule wins); fields with no error are omitted, so an
/// empty map means "all valid".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorMap(pub BTreeMap<String, ValidationError>);

impl ErrorMap {
    pub fn new() -> Self {
        ErrorMap(BTreeMap::new())
    }

    pub fn get(&self, api_name: &str) -> Option<&ValidationError> {
        self.0.get(api_name)
    }

    pub fn insert(&mut self, api_name: String, error: ValidationError) {
        self.0.insert(api_name, error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ValidationError)> {
        self.0.iter()
    }

    /// The user-facing diagnostic string for one field, if it failed.
    pub fn message(&self, api_name: &str) -> Option<String> {
        self.get(api_name).map(ValidationError::to_string)
    }

    /// JSON object form: `apiName` to diagnostic string.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        for (api_name, error) in &self.0 {
            obj.insert(
                api_name.clone(),
                serde_json::Value::String(error.to_string()),
            );
        }
        serde_json::Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_wire_contract() {
        let required = ValidationError::RequiredFieldMissing {
            name: "Budget".to_string(),
        };
        assert_eq!(required.to_string(), "Budget is required");
        assert_eq!(
            ValidationError::InvalidEmailFormat.to_string(),
            "Invalid email address"
        );
        assert_eq!(ValidationError::InvalidUrlFormat.to_string(), "Invalid URL");
        assert_eq!(
            ValidationError::InvalidPhoneFormat.to_string(),
            "Invalid phone number"
        );
        assert_eq!(
            ValidationError::InvalidNumberFormat.to_string(),
            "Must be a valid number"
        );
    }

    #[test]
    fn empty_map_means_all_valid() {
        let map = ErrorMap::new();
        assert!(map.is_empty());
        assert_eq!(map.to_json(), serde_json::json!({}));
    }

    #[test]
    fn json_form_maps_api_name_to_message() {
        let mut map = ErrorMap::new();
        map.insert("budget".to_string(), ValidationError::InvalidNumberFormat);
        assert_eq!(
            map.to_json(),
            serde_json::json!({"budget": "Must be a valid number"})
        );
        assert_eq!(map.message("budget").as_deref(), Some("Must be a valid number"));
        assert_eq!(map.message("other"), None);
    }
}
