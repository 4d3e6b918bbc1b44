//! Typed error enum for schema construction and field changes.
//!
//! Value-level problems (malformed numbers, JSON or dates typed into a field)
//! are never errors: the engine keeps the raw string as the value instead.

/// Errors produced by `tryit-schema` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// Two fields share the same name.
    #[error("duplicate field '{name}' in request schema")]
    DuplicateField {
        /// The repeated field name.
        name: String,
    },

    /// A `requiredCondition` names a field that is not part of the schema.
    #[error("field '{field}' depends on unknown field '{depends_on}'")]
    UnknownDependency {
        /// The field carrying the condition.
        field: String,
        /// The missing guard field.
        depends_on: String,
    },

    /// A `requiredCondition` names the field itself.
    #[error("field '{field}' cannot depend on itself")]
    SelfDependency {
        /// The offending field.
        field: String,
    },

    /// `requiredCondition` chains form a cycle.
    ///
    /// `path` lists the fields in dependency order, starting and ending
    /// with the same field (e.g., `["a", "b", "a"]`).
    #[error("dependency cycle between fields: {}", path.join(" -> "))]
    DependencyCycle {
        /// The fields forming the cycle.
        path: Vec<String>,
    },

    /// A `select` field was declared without options.
    #[error("select field '{field}' declares no options")]
    MissingOptions {
        /// The offending field.
        field: String,
    },

    /// A `dateFormat` could not be understood.
    #[error("field '{field}' has an invalid date format '{format}'")]
    InvalidDateFormat {
        /// The offending field.
        field: String,
        /// The format as written in the schema.
        format: String,
    },

    /// A change was requested for a field the schema does not define.
    #[error("field '{name}' is not part of the request schema")]
    UnknownField {
        /// The unknown field name.
        name: String,
    },
}

/// Convenience alias used throughout the library's public API.
pub type Result<T> = std::result::Result<T, SchemaError>;
