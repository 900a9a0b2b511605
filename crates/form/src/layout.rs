//! Group layout descriptions for edit and detail views.

use serde::Serialize;

use fieldset_core::{ErrorMap, FieldDefinition, ValueMap};
use fieldset_render::{describe_editor, format_for_display, DisplayValue, EditorSpec};

/// One field's slot in a rendered group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupItem {
    pub api_name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub editor: EditorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An edit-view layout: N fields in a column grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupLayout {
    pub columns: u8,
    pub items: Vec<GroupItem>,
}

/// Lay out a group of fields, one editor per definition in order, with the
/// field's current diagnostic attached. `columns` is clamped to 1..=3.
///
/// Returns `None` when there are no definitions: an empty group renders
/// nothing, not an empty container.
pub fn render_group(
    definitions: &[FieldDefinition],
    values: &ValueMap,
    errors: &ErrorMap,
    columns: u8,
) -> Option<GroupLayout> {
    if definitions.is_empty() {
        return None;
    }
    let items = definitions
        .iter()
        .map(|def| GroupItem {
            api_name: def.api_name.clone(),
            label: def.name.clone(),
            description: def.description.clone(),
            editor: describe_editor(def, values.get(&def.api_name)),
            error: errors.message(&def.api_name),
        })
        .collect();
    Some(GroupLayout {
        columns: columns.clamp(1, 3),
        items,
    })
}

/// One field's slot in a read-only detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub api_name: String,
    pub label: String,
    pub value: DisplayValue,
}

/// The read-only counterpart to [`render_group`], one display rendering
/// per definition in order.
pub fn display_group(definitions: &[FieldDefinition], values: &ValueMap) -> Vec<DisplayItem> {
    definitions
        .iter()
        .map(|def| DisplayItem {
            api_name: def.api_name.clone(),
            label: def.name.clone(),
            value: format_for_display(def, values.get(&def.api_name)),
        })
        .collect()
}
