//! Field specifications: the declarative description of one request parameter.

use serde::Deserialize;
use serde_json::Value;

/// Input kind of a request field.
///
/// Drives value coercion: `number` values are parsed, `array` / `object`
/// values are parsed as JSON, and date/time kinds are reformatted when the
/// field carries a [`FieldSpec::date_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Free text.
    String,
    /// Integer or decimal number.
    Number,
    /// Checkbox / toggle.
    #[serde(alias = "checkbox")]
    Boolean,
    /// One value out of [`FieldSpec::options`].
    Select,
    /// JSON array typed as text.
    Array,
    /// JSON object typed as text.
    Object,
    /// Calendar date (`YYYY-MM-DD` input).
    Date,
    /// Time of day (`HH:MM` or `HH:MM:SS` input).
    Time,
    /// Local date and time (`YYYY-MM-DDTHH:MM` input).
    #[serde(alias = "datetime-local", alias = "datetime")]
    DatetimeLocal,
}

impl FieldKind {
    /// Whether values of this kind are reformatted through a date format.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DatetimeLocal)
    }

    /// Lowercase name as written in catalog files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Select => "select",
            Self::Array => "array",
            Self::Object => "object",
            Self::Date => "date",
            Self::Time => "time",
            Self::DatetimeLocal => "datetimeLocal",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guard that makes a field participate only while another field holds
/// one of a set of values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredCondition {
    /// Name of the guard field.
    pub depends_on_field: String,
    /// Guard values that activate the dependent field.
    pub activating_values: Vec<Value>,
}

impl RequiredCondition {
    /// Whether `value` is one of the activating values.
    ///
    /// Numbers compare by numeric value so that `1` and `1.0` match.
    #[must_use]
    pub fn is_activated_by(&self, value: &Value) -> bool {
        self.activating_values.iter().any(|candidate| match (candidate, value) {
            (Value::Number(a), Value::Number(b)) => a == b || a.as_f64() == b.as_f64(),
            _ => candidate == value,
        })
    }
}

/// Description of one request field.
///
/// Deserializes from the camelCase catalog form:
///
/// ```yaml
/// name: scheduledType
/// kind: select
/// options: [everyday, weekdays]
/// requiredCondition:
///   dependsOnField: scheduled
///   activatingValues: [scheduled]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Unique key within the schema; also the payload key.
    pub name: String,

    /// Input kind.
    #[serde(alias = "type")]
    pub kind: FieldKind,

    /// Whether an empty value is reported as an error.
    #[serde(default)]
    pub required: bool,

    /// Seed value used when a schema is first bound.
    #[serde(default, alias = "default")]
    pub default_value: Option<Value>,

    /// Allowed values for `select` fields, in display order.
    #[serde(default)]
    pub options: Vec<String>,

    /// Output format for date/time kinds (strftime or `YYYY-MM-DD` tokens).
    #[serde(default)]
    pub date_format: Option<String>,

    /// Excluded from rendering and from the payload.
    #[serde(default)]
    pub hidden: bool,

    /// Visibility guard.
    #[serde(default)]
    pub required_condition: Option<RequiredCondition>,

    /// Human-readable explanation shown next to the input.
    #[serde(default)]
    pub description: Option<String>,
}

impl FieldSpec {
    /// Create an optional, visible field with no default.
    #[must_use]
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: false,
            default_value: None,
            options: Vec::new(),
            date_format: None,
            hidden: false,
            required_condition: None,
            description: None,
        }
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the seed value.
    #[must_use]
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Set the options of a `select` field.
    #[must_use]
    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the output format for date/time kinds.
    #[must_use]
    pub fn date_format(mut self, format: &str) -> Self {
        self.date_format = Some(format.to_string());
        self
    }

    /// Hide the field.
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Make the field participate only while `field` holds one of `values`.
    #[must_use]
    pub fn required_when(
        mut self,
        field: &str,
        values: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.required_condition = Some(RequiredCondition {
            depends_on_field: field.to_string(),
            activating_values: values.into_iter().collect(),
        });
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    /// Name of the guard field, if any.
    #[must_use]
    pub fn depends_on(&self) -> Option<&str> {
        self.required_condition
            .as_ref()
            .map(|c| c.depends_on_field.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize_camel_case_field() {
        let yaml = indoc::indoc! {"
            name: scheduledType
            kind: select
            options: [everyday, weekdays]
            requiredCondition:
              dependsOnField: scheduled
              activatingValues: [scheduled]
        "};
        let field: FieldSpec = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(
            field,
            FieldSpec::new("scheduledType", FieldKind::Select)
                .options(&["everyday", "weekdays"])
                .required_when("scheduled", [json!("scheduled")]),
        );
    }

    #[test]
    fn deserialize_aliases() {
        let yaml = indoc::indoc! {"
            name: flag
            type: checkbox
            default: true
        "};
        let field: FieldSpec = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(field.kind, FieldKind::Boolean);
        assert_eq!(field.default_value, Some(json!(true)));
        assert!(!field.required);
        assert!(!field.hidden);
    }

    #[test]
    fn datetime_local_names() {
        let kind: FieldKind = serde_yaml_ng::from_str("datetimeLocal").unwrap();
        assert_eq!(kind, FieldKind::DatetimeLocal);
        let kind: FieldKind = serde_yaml_ng::from_str("datetime-local").unwrap();
        assert_eq!(kind, FieldKind::DatetimeLocal);
        assert_eq!(kind.to_string(), "datetimeLocal");
        assert!(kind.is_temporal());
        assert!(!FieldKind::Number.is_temporal());
    }

    #[test]
    fn activation_matches_numbers_by_value() {
        let cond = RequiredCondition {
            depends_on_field: "level".into(),
            activating_values: vec![json!(1), json!("on")],
        };
        assert!(cond.is_activated_by(&json!(1)));
        assert!(cond.is_activated_by(&json!(1.0)));
        assert!(cond.is_activated_by(&json!("on")));
        assert!(!cond.is_activated_by(&json!("1")));
        assert!(!cond.is_activated_by(&json!(2)));
    }
}
