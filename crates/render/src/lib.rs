//! fieldset-render: editor affordance dispatch and read-only display
//! formatting.
//!
//! Both halves are pure mappings over `fieldset-core` types: the editor
//! side describes which interaction affordance to present
//! ([`describe_editor`]), the display side produces the human-readable
//! form of a stored value ([`format_for_display`]). Neither binds to a UI
//! toolkit; output is plain serializable data.

pub mod display;
pub mod editor;

/// Fixed display currency; there is no per-field currency override.
pub const CURRENCY_SYMBOL: &str = "$";

pub use display::{format_for_display, format_money, DisplayValue, LinkKind, NONE_SELECTED, NOT_SET};
pub use editor::{
    datetime_from_input, datetime_to_input, describe_editor, EditorSpec, TextInput,
};
