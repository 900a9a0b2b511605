//! fieldset-core: field definitions, value coercion, and validation.
//!
//! The engine's data model: given a [`FieldDefinition`] (name, type tag,
//! constraints) and a runtime [`FieldValue`], decide how to coerce and
//! validate it without the caller branching on type. Every operation is a
//! pure, synchronous function of its explicit inputs.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`parse_schema()`] -- load an ordered schema document
//! - [`validate()`] -- run the per-field rule pipeline
//! - [`FieldDefinition`], [`FieldType`] -- schema-level shapes
//! - [`FieldValue`], [`ValueMap`] -- runtime values and the coercion boundary
//! - [`ValidationError`], [`ErrorMap`] -- the diagnostic taxonomy

pub mod definition;
pub mod error;
pub mod field_type;
pub mod validate;
pub mod value;

pub use definition::{parse_schema, FieldDefinition, SchemaError};
pub use error::{ErrorMap, ValidationError};
pub use field_type::FieldType;
pub use validate::validate;
pub use value::{FieldValue, ValueMap};
