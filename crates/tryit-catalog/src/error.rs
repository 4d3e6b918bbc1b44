//! Typed error enum for the `tryit-catalog` library API.
//!
//! The CLI (`main.rs`) converts these to `anyhow::Error` at the binary
//! boundary for richer context messages.

use tryit_schema::SchemaError;

/// Errors produced by loading catalogs and assembling requests.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// File I/O failure (reading a catalog or config file).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing failure.
    #[error(transparent)]
    Yaml(#[from] serde_yaml_ng::Error),

    /// An endpoint's field schema is invalid.
    #[error("endpoint '{endpoint}': {source}")]
    Schema {
        /// Id of the offending endpoint.
        endpoint: String,
        /// What is wrong with its fields.
        source: SchemaError,
    },

    /// Two endpoints share an id.
    #[error("duplicate endpoint id '{id}'")]
    DuplicateEndpoint {
        /// The repeated id.
        id: String,
    },

    /// No endpoint has the requested id.
    #[error("endpoint '{id}' not found in catalog")]
    UnknownEndpoint {
        /// The unresolved id.
        id: String,
    },

    /// A `{param}` in the endpoint path has no value.
    #[error("endpoint '{endpoint}': path parameter '{param}' has no value")]
    MissingPathParam {
        /// Id of the endpoint being assembled.
        endpoint: String,
        /// Placeholder name from the path.
        param: String,
    },

    /// A `{param}` in the endpoint path names a hidden or conditional field,
    /// which the form can never fill in.
    #[error("endpoint '{endpoint}': path parameter '{param}' names a hidden or conditional field")]
    UnboundPathParam {
        /// Id of the offending endpoint.
        endpoint: String,
        /// Placeholder name from the path.
        param: String,
    },

    /// The endpoint method is not an HTTP method the generator knows.
    #[error("endpoint '{endpoint}': unknown HTTP method '{method}'")]
    InvalidMethod {
        /// Id of the offending endpoint.
        endpoint: String,
        /// Method as written in the catalog.
        method: String,
    },
}

/// Convenience alias used throughout the library's public API.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time assertion that `Error` is `Send + Sync`.
    const _: () = {
        const fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    };

    #[test]
    fn schema_error_names_endpoint() {
        let err = Error::Schema {
            endpoint: "create-alert".into(),
            source: SchemaError::SelfDependency {
                field: "scheduled".into(),
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with("endpoint 'create-alert': "), "{msg}");
        assert!(msg.contains("scheduled"), "{msg}");
    }
}
