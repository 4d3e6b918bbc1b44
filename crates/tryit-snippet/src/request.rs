//! The request value rendered by every template.

use indexmap::IndexMap;

/// HTTP methods the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

/// Error returned when parsing an unknown HTTP method name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown HTTP method '{0}'")]
pub struct UnknownMethod(pub String);

impl HttpMethod {
    /// Uppercase method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }

    /// Whether snippets include the request body for this method.
    ///
    /// Only `POST`, `PUT` and `PATCH` carry a body; for every other method
    /// the body is omitted even when the request has one.
    #[must_use]
    pub const fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = UnknownMethod;

    /// Case-insensitive parse (`"post"`, `"POST"` and `"Post"` all work).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// Method, URL, headers and optional body of one request.
///
/// Built once per render with the `with_*` methods; templates only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRequest {
    method: HttpMethod,
    url: String,
    headers: IndexMap<String, String>,
    body: Option<String>,
}

impl SnippetRequest {
    /// Create a request with no headers and no body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: IndexMap::new(),
            body: None,
        }
    }

    /// Append a header. Setting an existing name replaces its value in place.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Append several headers in iteration order.
    #[must_use]
    pub fn with_headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Attach a body. It is rendered verbatim, without re-serialization.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Fully resolved URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headers in insertion order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether any header is set.
    #[must_use]
    pub fn has_headers(&self) -> bool {
        !self.headers.is_empty()
    }

    /// Body as attached, regardless of method.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Body that snippets should include.
    ///
    /// `None` for methods that do not carry a body and for empty bodies.
    #[must_use]
    pub fn rendered_body(&self) -> Option<&str> {
        if !self.method.carries_body() {
            return None;
        }
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!("post".parse::<HttpMethod>(), Ok(HttpMethod::Post));
        assert_eq!(" Delete ".parse::<HttpMethod>(), Ok(HttpMethod::Delete));
        assert_eq!(
            "TRACE".parse::<HttpMethod>(),
            Err(UnknownMethod("TRACE".into()))
        );
        assert_eq!(HttpMethod::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn only_post_put_patch_carry_body() {
        let carrying: Vec<HttpMethod> = [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
            HttpMethod::Head,
            HttpMethod::Options,
        ]
        .into_iter()
        .filter(|m| m.carries_body())
        .collect();
        assert_eq!(
            carrying,
            vec![HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch]
        );
    }

    #[test]
    fn headers_keep_insertion_order() {
        let req = SnippetRequest::new(HttpMethod::Get, "https://x")
            .with_header("X-B", "2")
            .with_headers([("X-A", "1"), ("X-C", "3")])
            .with_header("X-B", "22");
        let headers: Vec<(&str, &str)> = req.headers().collect();
        assert_eq!(headers, vec![("X-B", "22"), ("X-A", "1"), ("X-C", "3")]);
        assert!(req.has_headers());
    }

    #[test]
    fn body_is_dropped_for_get() {
        let req = SnippetRequest::new(HttpMethod::Get, "https://x").with_body("{}");
        assert_eq!(req.body(), Some("{}"));
        assert_eq!(req.rendered_body(), None);

        let req = SnippetRequest::new(HttpMethod::Put, "https://x").with_body("{}");
        assert_eq!(req.rendered_body(), Some("{}"));

        let req = SnippetRequest::new(HttpMethod::Post, "https://x").with_body("");
        assert_eq!(req.rendered_body(), None);
    }
}
