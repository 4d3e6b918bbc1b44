//! Python + requests.

use super::Template;
use crate::language::Language;
use crate::literal::{double_quoted, python_body};
use crate::request::SnippetRequest;

pub(crate) struct Python;

impl Template for Python {
    fn language(&self) -> Language {
        Language::Python
    }

    fn imports(&self, _request: &SnippetRequest) -> Vec<String> {
        vec!["import requests".to_string()]
    }

    fn construct(&self, request: &SnippetRequest) -> Vec<String> {
        vec![format!("url = {}", double_quoted(request.url()))]
    }

    fn headers(&self, request: &SnippetRequest) -> Vec<String> {
        if !request.has_headers() {
            return Vec::new();
        }
        let mut lines = vec!["headers = {".to_string()];
        lines.extend(request.headers().map(|(name, value)| {
            format!("    {}: {},", double_quoted(name), double_quoted(value))
        }));
        lines.push("}".to_string());
        lines
    }

    fn body(&self, _request: &SnippetRequest, body: &str) -> Vec<String> {
        vec![format!("payload = {}", python_body(body))]
    }

    fn send(&self, request: &SnippetRequest) -> Vec<String> {
        let mut args = format!("{}, url", double_quoted(request.method().as_str()));
        if request.has_headers() {
            args.push_str(", headers=headers");
        }
        if request.rendered_body().is_some() {
            args.push_str(", data=payload");
        }
        vec![
            format!("response = requests.request({args})"),
            "print(response.status_code)".to_string(),
            "print(response.text)".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::request::{HttpMethod, SnippetRequest};
    use crate::{render, Language};
    use pretty_assertions::assert_eq;

    #[test]
    fn put_with_headers_and_body() {
        let req = SnippetRequest::new(HttpMethod::Put, "https://x/v1/alerts/7")
            .with_header("Content-Type", "application/json")
            .with_body(r#"{"active":false}"#);
        let expected = indoc::indoc! {r#"
            import requests

            url = "https://x/v1/alerts/7"

            headers = {
                "Content-Type": "application/json",
            }

            payload = '''{"active":false}'''

            response = requests.request("PUT", url, headers=headers, data=payload)
            print(response.status_code)
            print(response.text)
        "#};
        assert_eq!(render(Language::Python, &req), expected);
    }

    #[test]
    fn delete_ignores_body() {
        let req = SnippetRequest::new(HttpMethod::Delete, "https://x/v1/alerts/7")
            .with_body(r#"{"ignored":true}"#);
        let text = render(Language::Python, &req);
        assert!(!text.contains("ignored"));
        assert!(text.contains(r#"requests.request("DELETE", url)"#));
    }
}
