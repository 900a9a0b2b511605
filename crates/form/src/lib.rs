//! fieldset-form: field-group composition.
//!
//! Aggregates many field definitions plus a value map into one coherent
//! edit/validate/display unit: [`FieldGroup`] carries one session's state,
//! [`render_group`] lays the fields out for editing, [`display_group`]
//! renders them read-only. Per-field behavior is delegated to
//! `fieldset-core` and `fieldset-render`; the composer never branches on a
//! field's type itself and never fails on malformed definitions.

pub mod group;
pub mod layout;

pub use group::FieldGroup;
pub use layout::{display_group, render_group, DisplayItem, GroupItem, GroupLayout};
