#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! ## API Reference

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod date_format;
mod engine;
mod error;
mod field;
mod schema;

pub use engine::{
    is_empty_value, is_submittable, on_field_change, resolve_active_fields, serialize_payload,
    validate_for_submit, Errors, FieldChange, RawInput, ValueState, Values, REQUIRED_MESSAGE,
};
pub use error::{Result, SchemaError};
pub use field::{FieldKind, FieldSpec, RequiredCondition};
pub use schema::RequestSchema;
