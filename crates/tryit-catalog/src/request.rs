//! Turning an endpoint plus form values into a concrete HTTP request.

use indexmap::IndexSet;
use serde_json::Value;
use tryit_schema::{resolve_active_fields, serialize_payload, Values};
use tryit_snippet::{generate, Language, SnippetRequest};

use crate::catalog::Endpoint;
use crate::config::ProjectConfig;
use crate::error::{Error, Result};

/// One rendered snippet tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Language name as configured.
    pub language: String,
    /// Tab label (`cURL`, `Python`, ...); the configured name for unknown
    /// languages.
    pub label: String,
    /// Generated code.
    pub code: String,
}

impl Endpoint {
    /// Build the request the form values describe.
    ///
    /// - URL: `base_url` without trailing `/`, then the path with every
    ///   `{param}` replaced by its URL-encoded value.
    /// - Methods with a body (POST, PUT, PATCH) get the pretty JSON payload
    ///   of the remaining values, plus `Content-Type: application/json`
    ///   unless the config already sets a content type.
    /// - Other methods get the remaining values as a query string.
    /// - Headers: config headers in order, then `Authorization`.
    ///
    /// Path parameter values never appear in the query or body. Values of
    /// inactive fields are ignored, path parameters included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPathParam`] if a path parameter is absent,
    /// empty or `null`.
    pub fn snippet_request(
        &self,
        config: &ProjectConfig,
        values: &Values,
    ) -> Result<SnippetRequest> {
        let active = resolve_active_fields(&self.schema, values);
        let remaining: Values = values
            .iter()
            .filter(|(name, _)| active.contains(*name) && !self.path_params.contains(*name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        let mut url = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            self.fill_path(values, &active)?
        );
        let mut headers: Vec<(String, String)> = config.request_headers().collect();

        let body = if self.method.carries_body() {
            if !headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
            }
            Some(serialize_payload(&self.schema, &remaining))
        } else {
            let query = self.query_string(&remaining);
            if !query.is_empty() {
                url.push(if url.contains('?') { '&' } else { '?' });
                url.push_str(&query);
            }
            None
        };

        let mut request = SnippetRequest::new(self.method, url).with_headers(headers);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        tracing::debug!(
            endpoint = %self.id,
            method = self.method.as_str(),
            url = request.url(),
            "assembled request"
        );
        Ok(request)
    }

    /// Render the request in every configured language, in order.
    ///
    /// # Errors
    ///
    /// Same as [`Endpoint::snippet_request`].
    pub fn snippets(&self, config: &ProjectConfig, values: &Values) -> Result<Vec<Snippet>> {
        let request = self.snippet_request(config, values)?;
        Ok(config
            .languages
            .iter()
            .map(|name| Snippet {
                language: name.clone(),
                label: Language::from_name(name)
                    .map_or_else(|| name.clone(), |lang| lang.label().to_string()),
                code: generate(name, &request),
            })
            .collect())
    }

    fn fill_path(&self, values: &Values, active: &IndexSet<String>) -> Result<String> {
        let mut path = self.path.clone();
        for param in &self.path_params {
            let text = values
                .get(param)
                .filter(|_| active.contains(param))
                .and_then(param_text)
                .ok_or_else(|| Error::MissingPathParam {
                    endpoint: self.id.clone(),
                    param: param.clone(),
                })?;
            path = path.replace(&format!("{{{param}}}"), &urlencoding::encode(&text));
        }
        Ok(path)
    }

    /// `key=value` pairs in schema order.
    fn query_string(&self, values: &Values) -> String {
        self.schema
            .fields()
            .filter_map(|f| values.get(&f.name).map(|v| (&f.name, v)))
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(&value_text(value))
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Strings as-is, everything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn param_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(value_text(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tryit_schema::{FieldKind, FieldSpec, RequestSchema};
    use tryit_snippet::HttpMethod;

    fn catalog() -> Catalog {
        Catalog::from_yaml(indoc::indoc! {"
            endpoints:
              - id: search
                method: GET
                path: /quotes
                fields:
                  - { name: symbol, kind: string }
                  - { name: limit, kind: number }
                  - { name: tags, kind: array }
              - id: update
                method: PUT
                path: /alerts/{alertId}
                fields:
                  - { name: alertId, kind: string, required: true }
                  - { name: note, kind: string }
                  - { name: scheduled, kind: boolean }
                  - name: at
                    kind: time
                    requiredCondition: { dependsOnField: scheduled, activatingValues: [true] }
        "})
        .unwrap()
    }

    fn values(pairs: &[(&str, Value)]) -> Values {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn get_builds_query_in_schema_order() {
        let catalog = catalog();
        let endpoint = catalog.endpoint("search").unwrap();
        let config = ProjectConfig::default().base_url("https://api.example.com/v1/");
        let req = endpoint
            .snippet_request(
                &config,
                &values(&[
                    ("tags", json!(["a b", "c"])),
                    ("symbol", json!("A&B")),
                    ("limit", json!(10)),
                ]),
            )
            .unwrap();
        assert_eq!(req.method(), HttpMethod::Get);
        assert_eq!(
            req.url(),
            "https://api.example.com/v1/quotes?symbol=A%26B&limit=10&tags=%5B%22a%20b%22%2C%22c%22%5D"
        );
        assert_eq!(req.body(), None);
        assert!(!req.has_headers());
    }

    #[test]
    fn get_without_values_has_no_query() {
        let catalog = catalog();
        let req = catalog
            .endpoint("search")
            .unwrap()
            .snippet_request(&ProjectConfig::default(), &Values::new())
            .unwrap();
        assert_eq!(req.url(), "http://localhost:8080/quotes");
    }

    #[test]
    fn put_fills_path_and_excludes_param_from_body() {
        let catalog = catalog();
        let endpoint = catalog.endpoint("update").unwrap();
        let mut config = ProjectConfig::default();
        config.headers.insert("X-Api-Key".into(), "k".into());
        config.bearer_token = Some("<TOKEN>".into());

        let req = endpoint
            .snippet_request(
                &config,
                &values(&[("alertId", json!("a/1")), ("note", json!("hi"))]),
            )
            .unwrap();
        assert_eq!(req.url(), "http://localhost:8080/alerts/a%2F1");
        assert_eq!(req.body(), Some("{\n  \"note\": \"hi\"\n}"));
        let headers: Vec<(&str, &str)> = req.headers().collect();
        assert_eq!(
            headers,
            vec![
                ("X-Api-Key", "k"),
                ("Authorization", "Bearer <TOKEN>"),
                ("Content-Type", "application/json"),
            ]
        );
    }

    #[test]
    fn configured_content_type_is_kept() {
        let catalog = catalog();
        let mut config = ProjectConfig::default();
        config
            .headers
            .insert("content-type".into(), "application/vnd.api+json".into());
        let req = catalog
            .endpoint("update")
            .unwrap()
            .snippet_request(&config, &values(&[("alertId", json!("a1"))]))
            .unwrap();
        let headers: Vec<(&str, &str)> = req.headers().collect();
        assert_eq!(headers, vec![("content-type", "application/vnd.api+json")]);
        assert_eq!(req.body(), Some("{}"));
    }

    #[test]
    fn inactive_values_are_ignored() {
        let catalog = catalog();
        let req = catalog
            .endpoint("update")
            .unwrap()
            .snippet_request(
                &ProjectConfig::default(),
                &values(&[
                    ("alertId", json!("a1")),
                    ("scheduled", json!(false)),
                    ("at", json!("10:00")),
                ]),
            )
            .unwrap();
        assert_eq!(req.body(), Some("{\n  \"scheduled\": false\n}"));
    }

    #[test]
    fn missing_or_empty_path_param_is_an_error() {
        let catalog = catalog();
        let endpoint = catalog.endpoint("update").unwrap();
        for vals in [Values::new(), values(&[("alertId", json!(""))])] {
            let err = endpoint
                .snippet_request(&ProjectConfig::default(), &vals)
                .unwrap_err();
            assert!(matches!(
                err,
                Error::MissingPathParam { ref param, .. } if param == "alertId"
            ));
        }
    }

    #[test]
    fn inactive_path_param_value_is_not_used() {
        let schema = RequestSchema::new([
            FieldSpec::new("byId", FieldKind::Boolean),
            FieldSpec::new("orderId", FieldKind::String).required_when("byId", [json!(true)]),
        ])
        .unwrap();
        let endpoint = Endpoint {
            id: "get-order".into(),
            title: String::new(),
            description: None,
            method: HttpMethod::Get,
            path: "/orders/{orderId}".into(),
            path_params: vec!["orderId".into()],
            schema,
            responses: Vec::new(),
        };
        let config = ProjectConfig::default();

        let err = endpoint
            .snippet_request(
                &config,
                &values(&[("byId", json!(false)), ("orderId", json!("o1"))]),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingPathParam { ref param, .. } if param == "orderId"
        ));

        let req = endpoint
            .snippet_request(
                &config,
                &values(&[("byId", json!(true)), ("orderId", json!("o1"))]),
            )
            .unwrap();
        assert_eq!(req.url(), "http://localhost:8080/orders/o1?byId=true");
    }

    #[test]
    fn numeric_path_param_uses_json_text() {
        let catalog = Catalog::from_yaml(
            "endpoints: [{ id: d, method: DELETE, path: '/items/{n}', fields: [{ name: n, kind: number }] }]",
        )
        .unwrap();
        let req = catalog
            .endpoint("d")
            .unwrap()
            .snippet_request(&ProjectConfig::default(), &values(&[("n", json!(42))]))
            .unwrap();
        assert_eq!(req.url(), "http://localhost:8080/items/42");
    }

    #[test]
    fn snippets_follow_configured_languages() {
        let catalog = catalog();
        let config = ProjectConfig::default().languages(&["curl", "cobol", "py"]);
        let snippets = catalog
            .endpoint("search")
            .unwrap()
            .snippets(&config, &values(&[("symbol", json!("ACME"))]))
            .unwrap();
        let labels: Vec<&str> = snippets.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["cURL", "cobol", "Python"]);
        assert!(snippets[0].code.contains("--url 'http://localhost:8080/quotes?symbol=ACME'"));
        assert!(snippets[1].code.contains("not supported"));
    }
}
