//! Field-change engine.
//!
//! Every operation is a pure function of the schema and the current state:
//! the full next state is recomputed on each call, never patched in place.
//!
//! A change goes through these steps:
//!
//! 1. Coerce the raw input per the field kind (see [`RawInput`]).
//! 2. Store it, or drop it when the field is optional and the value is empty.
//! 3. Resolve the active fields against the updated values and prune every
//!    inactive entry (values and errors).
//! 4. Re-validate the changed field only.
//! 5. Serialize the surviving values as the pretty-printed JSON payload.

mod coerce;

pub use coerce::RawInput;

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::schema::RequestSchema;

/// Error message attached to required fields with an empty value.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Current field values, keyed by field name in schema order.
pub type Values = IndexMap<String, Value>;

/// Current field errors, keyed by field name. An empty string means no error.
pub type Errors = IndexMap<String, String>;

/// Values and errors of one bound form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueState {
    /// Field values. Only active fields appear here.
    pub values: Values,
    /// Field errors. Fields never touched have no entry.
    pub errors: Errors,
}

impl ValueState {
    /// Seed a state from the schema defaults.
    ///
    /// Fields without a default start absent. Defaults of fields that are
    /// inactive under the seeded values are dropped.
    #[must_use]
    pub fn bind(schema: &RequestSchema) -> Self {
        let seeded: Values = schema
            .fields()
            .filter_map(|f| f.default_value.clone().map(|v| (f.name.clone(), v)))
            .collect();
        let active = resolve_active_fields(schema, &seeded);
        Self {
            values: retain_active(schema, &seeded, &active),
            errors: Errors::new(),
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Current error of a field, if it has a non-empty one.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors
            .get(name)
            .map(String::as_str)
            .filter(|e| !e.is_empty())
    }

    /// Whether the form may be submitted. See [`is_submittable`].
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        is_submittable(&self.errors)
    }
}

/// Result of [`on_field_change`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    /// Next values and errors.
    pub state: ValueState,
    /// Pretty-printed JSON object of `state.values`.
    pub payload: String,
}

/// Names of the fields that are visible and eligible for the payload.
///
/// A field is active when it is not hidden and either has no
/// `requiredCondition`, or its guard field is itself active and currently
/// holds one of the activating values. Inactive guards behave as absent, so
/// whole chains switch off together. The result is in display order.
#[must_use]
pub fn resolve_active_fields(schema: &RequestSchema, values: &Values) -> IndexSet<String> {
    let mut active: IndexSet<&str> = IndexSet::new();

    for field in schema.in_dependency_order() {
        if field.hidden {
            continue;
        }
        let enabled = match &field.required_condition {
            None => true,
            Some(cond) => {
                let guard = cond.depends_on_field.as_str();
                active.contains(guard)
                    && values.get(guard).is_some_and(|v| cond.is_activated_by(v))
            }
        };
        if enabled {
            active.insert(field.name.as_str());
        }
    }

    schema
        .fields()
        .filter(|f| active.contains(f.name.as_str()))
        .map(|f| f.name.clone())
        .collect()
}

/// Apply one edit and recompute values, errors and payload.
///
/// Errors of fields other than `name` are left as they were, except that
/// fields which became inactive lose both their value and their error.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownField`] if `name` is not in the schema.
/// Input that does not coerce is not an error; it is stored as text.
pub fn on_field_change(
    schema: &RequestSchema,
    state: &ValueState,
    name: &str,
    raw: impl Into<RawInput>,
) -> Result<FieldChange> {
    let field = schema.get(name).ok_or_else(|| SchemaError::UnknownField {
        name: name.to_string(),
    })?;

    let value = coerce::coerce(field, raw.into());
    let empty = is_empty_value(&value);

    let mut values = state.values.clone();
    if empty && !field.required {
        values.shift_remove(name);
    } else {
        values.insert(name.to_string(), value);
    }

    let active = resolve_active_fields(schema, &values);
    let values = retain_active(schema, &values, &active);

    let mut errors = state.errors.clone();
    let message = if field.required && empty {
        REQUIRED_MESSAGE
    } else {
        ""
    };
    errors.insert(name.to_string(), message.to_string());
    errors.retain(|key, _| active.contains(key));

    let pruned: Vec<&str> = state
        .values
        .keys()
        .filter(|key| !values.contains_key(*key))
        .map(String::as_str)
        .collect();
    tracing::debug!(
        field = name,
        active = active.len(),
        ?pruned,
        "applied field change"
    );

    let payload = serialize_payload(schema, &values);
    Ok(FieldChange {
        state: ValueState { values, errors },
        payload,
    })
}

/// Whether every error entry is empty.
#[must_use]
pub fn is_submittable(errors: &Errors) -> bool {
    errors.values().all(String::is_empty)
}

/// Validate every active field before a submit.
///
/// Unlike [`on_field_change`], this checks fields the user never touched:
/// every active required field that is absent or empty gets
/// [`REQUIRED_MESSAGE`], every other active field gets an empty error, and
/// inactive fields are pruned.
#[must_use]
pub fn validate_for_submit(schema: &RequestSchema, state: &ValueState) -> ValueState {
    let active = resolve_active_fields(schema, &state.values);
    let values = retain_active(schema, &state.values, &active);

    let errors = schema
        .fields()
        .filter(|f| active.contains(f.name.as_str()))
        .map(|f| {
            let missing = values.get(&f.name).is_none_or(is_empty_value);
            let message = if f.required && missing {
                REQUIRED_MESSAGE
            } else {
                ""
            };
            (f.name.clone(), message.to_string())
        })
        .collect();

    ValueState { values, errors }
}

/// Serialize values as a pretty-printed JSON object in schema order.
///
/// Keys the schema does not define are skipped.
#[must_use]
pub fn serialize_payload(schema: &RequestSchema, values: &Values) -> String {
    let object: Map<String, Value> = schema
        .fields()
        .filter_map(|f| values.get(&f.name).map(|v| (f.name.clone(), v.clone())))
        .collect();
    format!("{:#}", Value::Object(object))
}

/// Whether a value counts as "not filled in".
///
/// Only the empty string and `null` are empty. `0`, `"0"`, `false`, `[]`
/// and `{}` are explicit values.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Rebuild `values` in schema order, keeping only active fields.
fn retain_active(schema: &RequestSchema, values: &Values, active: &IndexSet<String>) -> Values {
    schema
        .fields()
        .filter(|f| active.contains(f.name.as_str()))
        .filter_map(|f| values.get(&f.name).map(|v| (f.name.clone(), v.clone())))
        .collect()
}
