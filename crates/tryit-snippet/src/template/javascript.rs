//! JavaScript + fetch.

use super::Template;
use crate::language::Language;
use crate::literal::{double_quoted, js_template};
use crate::request::SnippetRequest;

pub(crate) struct JavaScript;

impl Template for JavaScript {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn imports(&self, _request: &SnippetRequest) -> Vec<String> {
        vec!["// Requires a runtime with global fetch (browsers, Node.js 18+).".to_string()]
    }

    fn construct(&self, request: &SnippetRequest) -> Vec<String> {
        vec![format!("const url = {};", double_quoted(request.url()))]
    }

    fn headers(&self, request: &SnippetRequest) -> Vec<String> {
        if !request.has_headers() {
            return Vec::new();
        }
        let mut lines = vec!["const headers = {".to_string()];
        lines.extend(request.headers().map(|(name, value)| {
            format!("  {}: {},", double_quoted(name), double_quoted(value))
        }));
        lines.push("};".to_string());
        lines
    }

    fn body(&self, _request: &SnippetRequest, body: &str) -> Vec<String> {
        vec![format!("const body = {};", js_template(body))]
    }

    fn send(&self, request: &SnippetRequest) -> Vec<String> {
        let mut lines = vec![
            "const response = await fetch(url, {".to_string(),
            format!("  method: {},", double_quoted(request.method().as_str())),
        ];
        if request.has_headers() {
            lines.push("  headers,".to_string());
        }
        if request.rendered_body().is_some() {
            lines.push("  body,".to_string());
        }
        lines.extend([
            "});".to_string(),
            "console.log(response.status);".to_string(),
            "console.log(await response.text());".to_string(),
        ]);
        lines
    }
}

#[cfg(test)]
mod tests {
    use crate::request::{HttpMethod, SnippetRequest};
    use crate::{render, Language};
    use pretty_assertions::assert_eq;

    #[test]
    fn patch_with_headers_and_body() {
        let req = SnippetRequest::new(HttpMethod::Patch, "https://x/v1/alerts/7")
            .with_header("X-Api-Key", "demo")
            .with_body("{\n  \"note\": \"hi\"\n}");
        let expected = indoc::indoc! {r#"
            // Requires a runtime with global fetch (browsers, Node.js 18+).

            const url = "https://x/v1/alerts/7";

            const headers = {
              "X-Api-Key": "demo",
            };

            const body = `{
              "note": "hi"
            }`;

            const response = await fetch(url, {
              method: "PATCH",
              headers,
              body,
            });
            console.log(response.status);
            console.log(await response.text());
        "#};
        assert_eq!(render(Language::JavaScript, &req), expected);
    }

    #[test]
    fn get_has_only_method() {
        let req = SnippetRequest::new(HttpMethod::Get, "https://x");
        let text = render(Language::JavaScript, &req);
        assert!(text.contains("  method: \"GET\",\n});"));
        assert!(!text.contains("const headers"));
    }
}
