//! The field-group session aggregate.
//!
//! A [`FieldGroup`] bundles the definitions of one edit session with its
//! current values and error state. It is created fresh per form instance,
//! owned by the caller, and discarded when the session ends; it holds no
//! persistent state and no identity of its own.

use fieldset_core::{validate, ErrorMap, FieldDefinition, FieldValue, ValueMap};

/// One edit session's definitions, values, and diagnostics.
#[derive(Debug, Clone, Default)]
pub struct FieldGroup {
    definitions: Vec<FieldDefinition>,
    values: ValueMap,
    errors: ErrorMap,
}

impl FieldGroup {
    pub fn new(definitions: Vec<FieldDefinition>, values: ValueMap) -> Self {
        FieldGroup {
            definitions,
            values,
            errors: ErrorMap::new(),
        }
    }

    pub fn definitions(&self) -> &[FieldDefinition] {
        &self.definitions
    }

    pub fn values(&self) -> &ValueMap {
        &self.values
    }

    /// Diagnostics from the most recent [`validate`](Self::validate) pass.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Merge one edit into the value map. Sibling fields' values are
    /// untouched.
    pub fn set_value(&mut self, api_name: &str, value: FieldValue) {
        self.values.insert(api_name.to_string(), value);
    }

    pub fn clear_value(&mut self, api_name: &str) {
        self.values.remove(api_name);
    }

    /// Append an option to a multi-choice selection. Selection order is
    /// insertion order.
    pub fn add_choice(&mut self, api_name: &str, option: &str) {
        if let Some(FieldValue::List(items)) = self.values.get_mut(api_name) {
            items.push(option.to_string());
            return;
        }
        self.values.insert(
            api_name.to_string(),
            FieldValue::List(vec![option.to_string()]),
        );
    }

    /// Remove the first exact match from a multi-choice selection; later
    /// duplicates and the rest of the order are preserved.
    pub fn remove_choice(&mut self, api_name: &str, option: &str) {
        if let Some(FieldValue::List(items)) = self.values.get_mut(api_name) {
            if let Some(pos) = items.iter().position(|o| o == option) {
                items.remove(pos);
            }
        }
    }

    /// Run the validation pipeline over every field and store the result.
    pub fn validate(&mut self) -> &ErrorMap {
        self.errors = validate(&self.definitions, &self.values);
        &self.errors
    }

    /// True when the last validation pass found nothing.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The canonical save payload for the current values.
    pub fn payload(&self) -> serde_json::Value {
        self.values.to_payload(&self.definitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldset_core::FieldType;

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

    #[test]
    fn set_value_preserves_siblings() {
        let defs = vec![
            def("a", FieldType::Text, false),
            def("b", FieldType::Text, false),
        ];
        let mut values = ValueMap::new();
        values.insert("a".to_string(), FieldValue::Text("first".into()));
        let mut group = FieldGroup::new(defs, values);

        group.set_value("b", FieldValue::Text("second".into()));
        assert_eq!(group.values().get("a"), Some(&FieldValue::Text("first".into())));
        assert_eq!(group.values().get("b"), Some(&FieldValue::Text("second".into())));
    }

    #[test]
    fn choices_append_and_remove_first_match() {
        let mut group = FieldGroup::new(
            vec![def("tags", FieldType::MultiSelect, false)],
            ValueMap::new(),
        );
        group.add_choice("tags", "a");
        group.add_choice("tags", "b");
        group.remove_choice("tags", "a");
        assert_eq!(
            group.values().get("tags").and_then(FieldValue::as_list),
            Some(&["b".to_string()][..])
        );
    }

    #[test]
    fn remove_choice_deletes_only_the_first_duplicate() {
        let mut group = FieldGroup::new(
            vec![def("tags", FieldType::MultiSelect, false)],
            ValueMap::new(),
        );
        for opt in ["x", "y", "x"] {
            group.add_choice("tags", opt);
        }
        group.remove_choice("tags", "x");
        assert_eq!(
            group.values().get("tags").and_then(FieldValue::as_list),
            Some(&["y".to_string(), "x".to_string()][..])
        );
    }

    #[test]
    fn remove_choice_on_missing_field_is_a_no_op() {
        let mut group = FieldGroup::new(
            vec![def("tags", FieldType::MultiSelect, false)],
            ValueMap::new(),
        );
        group.remove_choice("tags", "ghost");
        assert_eq!(group.values().get("tags"), None);
    }

    #[test]
    fn validate_stores_diagnostics() {
        let mut group = FieldGroup::new(
            vec![def("budget", FieldType::Currency, true)],
            ValueMap::new(),
        );
        assert!(group.is_valid());
        group.validate();
        assert!(!group.is_valid());
        assert_eq!(
            group.errors().message("budget").as_deref(),
            Some("budget is required")
        );
        group.set_value("budget", FieldValue::Text("250".into()));
        group.validate();
        assert!(group.is_valid());
    }

    #[test]
    fn payload_covers_current_values() {
        let mut group = FieldGroup::new(
            vec![def("title", FieldType::Text, false)],
            ValueMap::new(),
        );
        group.set_value("title", FieldValue::Text("hello".into()));
        assert_eq!(group.payload(), serde_json::json!({"title": "hello"}));
    }
}
