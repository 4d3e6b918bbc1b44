//! Project-level settings loaded from YAML.
//!
//! Holds the values every endpoint of a documentation site shares: the
//! server to call, headers sent with every request, and the snippet
//! languages to render.
//!
//! # File format
//!
//! ```yaml
//! # docs/tryit.yaml
//! base_url: https://api.example.com/v1
//!
//! # Extra headers, sent in this order.
//! headers:
//!   X-Api-Key: <API_KEY>
//!
//! # Adds `Authorization: Bearer <TOKEN>` after `headers`.
//! bearer_token: <TOKEN>
//!
//! # Snippet tabs, in order (default: every supported language).
//! languages: [shell, python, javascript]
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tryit_snippet::Language;

/// Server used when no config sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Shared settings for request assembly and snippet rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Scheme, host and optional path prefix prepended to endpoint paths.
    pub base_url: String,

    /// Headers sent with every request, in order.
    pub headers: IndexMap<String, String>,

    /// Bearer token or placeholder for the `Authorization` header.
    pub bearer_token: Option<String>,

    /// Snippet languages by name or alias. Unknown names render a
    /// placeholder instead of failing.
    pub languages: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headers: IndexMap::new(),
            bearer_token: None,
            languages: Language::ALL.iter().map(|l| l.name().to_string()).collect(),
        }
    }
}

impl ProjectConfig {
    /// Load config from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml_ng::from_str(&content)?;
        tracing::debug!(path = %path.display(), base_url = %config.base_url, "loaded project config");
        Ok(config)
    }

    /// Replace the base URL.
    #[must_use]
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Replace the snippet language list.
    #[must_use]
    pub fn languages(mut self, names: &[&str]) -> Self {
        self.languages = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Headers for every request: `headers` in order, then `Authorization`
    /// when a bearer token is set.
    pub fn request_headers(&self) -> impl Iterator<Item = (String, String)> + '_ {
        let auth = self
            .bearer_token
            .as_ref()
            .map(|token| ("Authorization".to_string(), format!("Bearer {token}")));
        self.headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .chain(auth)
    }
}
