//! Endpoint catalog loaded from YAML.
//!
//! # File format
//!
//! ```yaml
//! endpoints:
//!   - id: get-alert
//!     title: Fetch an alert
//!     method: GET
//!     path: /alerts/{alertId}
//!     fields:
//!       - name: alertId
//!         kind: string
//!         required: true
//!     responses:
//!       - status: 200
//!         description: The alert
//!         example: { "id": "a1", "symbol": "ACME" }
//!       - status: 404
//!         description: No such alert
//! ```

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use tryit_schema::{FieldSpec, RequestSchema, SchemaError};
use tryit_snippet::HttpMethod;

use crate::error::{Error, Result};

/// One documented response of an endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseShape {
    /// HTTP status code.
    pub status: u16,
    /// What the response means.
    #[serde(default)]
    pub description: String,
    /// Example response body.
    #[serde(default)]
    pub example: Option<serde_json::Value>,
}

/// A documented API operation with its request fields.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) method: HttpMethod,
    pub(crate) path: String,
    pub(crate) path_params: Vec<String>,
    pub(crate) schema: RequestSchema,
    pub(crate) responses: Vec<ResponseShape>,
}

impl Endpoint {
    /// Unique id within the catalog.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Short human-readable name.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Longer explanation, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Path template with `{param}` placeholders.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Placeholder names in the path, in order of appearance.
    #[must_use]
    pub fn path_params(&self) -> &[String] {
        &self.path_params
    }

    /// Request fields.
    #[must_use]
    pub const fn schema(&self) -> &RequestSchema {
        &self.schema
    }

    /// Documented responses in file order.
    #[must_use]
    pub fn responses(&self) -> &[ResponseShape] {
        &self.responses
    }
}

/// All endpoints of one documentation site, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    endpoints: IndexMap<String, Endpoint>,
}

impl Catalog {
    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    /// (see [`Catalog::from_yaml`]).
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            endpoints = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the YAML is malformed
    /// - two endpoints share an id
    /// - an endpoint method is unknown
    /// - an endpoint's fields do not form a valid schema
    /// - a `{param}` in a path does not name a field of the endpoint
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml_ng::from_str(yaml)?;
        let mut endpoints = IndexMap::new();
        for def in file.endpoints {
            let endpoint = def.into_endpoint()?;
            if endpoints.contains_key(&endpoint.id) {
                return Err(Error::DuplicateEndpoint { id: endpoint.id });
            }
            endpoints.insert(endpoint.id.clone(), endpoint);
        }
        Ok(Self { endpoints })
    }

    /// Look up an endpoint by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEndpoint`] if no endpoint has that id.
    pub fn endpoint(&self, id: &str) -> Result<&Endpoint> {
        self.endpoints
            .get(id)
            .ok_or_else(|| Error::UnknownEndpoint { id: id.to_string() })
    }

    /// Endpoints in file order.
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.values()
    }

    /// Number of endpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether the catalog has no endpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    endpoints: Vec<EndpointDef>,
}

/// Endpoint as written in the file, before validation.
#[derive(Deserialize)]
struct EndpointDef {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    method: String,
    path: String,
    #[serde(default)]
    fields: Vec<FieldSpec>,
    #[serde(default)]
    responses: Vec<ResponseShape>,
}

impl EndpointDef {
    fn into_endpoint(self) -> Result<Endpoint> {
        let method = HttpMethod::from_str(&self.method).map_err(|_| Error::InvalidMethod {
            endpoint: self.id.clone(),
            method: self.method.clone(),
        })?;
        let schema = RequestSchema::new(self.fields).map_err(|source| Error::Schema {
            endpoint: self.id.clone(),
            source,
        })?;

        let path_params = parse_path_params(&self.path);
        if let Some(param) = path_params.iter().find(|p| !schema.contains(p)) {
            return Err(Error::Schema {
                endpoint: self.id,
                source: SchemaError::UnknownField {
                    name: param.clone(),
                },
            });
        }
        let unbound = path_params.iter().find(|p| {
            schema
                .get(p)
                .is_some_and(|f| f.hidden || f.required_condition.is_some())
        });
        if let Some(param) = unbound {
            return Err(Error::UnboundPathParam {
                endpoint: self.id,
                param: param.clone(),
            });
        }

        Ok(Endpoint {
            id: self.id,
            title: self.title,
            description: self.description,
            method,
            path: self.path,
            path_params,
            schema,
            responses: self.responses,
        })
    }
}

/// Names between `{` and `}` in a path template. Unclosed braces are literal.
fn parse_path_params(path: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut rest = path;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        let name = &after[..close];
        if !name.is_empty() && !params.iter().any(|p| p == name) {
            params.push(name.to_string());
        }
        rest = &after[close + 1..];
    }
    params
}
