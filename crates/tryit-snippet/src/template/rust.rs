//! Rust + reqwest (blocking client).

use super::Template;
use crate::language::Language;
use crate::literal::{double_quoted, rust_raw};
use crate::request::SnippetRequest;

pub(crate) struct Rust;

impl Template for Rust {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn imports(&self, _request: &SnippetRequest) -> Vec<String> {
        vec![
            r#"// Cargo.toml: reqwest = { version = "0.12", features = ["blocking"] }"#.to_string(),
            "use reqwest::blocking::Client;".to_string(),
            "use reqwest::Method;".to_string(),
        ]
    }

    fn construct(&self, request: &SnippetRequest) -> Vec<String> {
        let binding = if request.has_headers() || request.rendered_body().is_some() {
            "let mut request"
        } else {
            "let request"
        };
        vec![
            "fn main() -> Result<(), Box<dyn std::error::Error>> {".to_string(),
            "    let client = Client::new();".to_string(),
            format!(
                "    {binding} = client.request(Method::{}, {});",
                request.method().as_str(),
                double_quoted(request.url()),
            ),
        ]
    }

    fn headers(&self, request: &SnippetRequest) -> Vec<String> {
        request
            .headers()
            .map(|(name, value)| {
                format!(
                    "    request = request.header({}, {});",
                    double_quoted(name),
                    double_quoted(value)
                )
            })
            .collect()
    }

    fn body(&self, _request: &SnippetRequest, body: &str) -> Vec<String> {
        vec![format!("    request = request.body({});", rust_raw(body))]
    }

    fn send(&self, _request: &SnippetRequest) -> Vec<String> {
        vec![
            "    let response = request.send()?;".to_string(),
            r#"    println!("{}", response.status());"#.to_string(),
            r#"    println!("{}", response.text()?);"#.to_string(),
            "    Ok(())".to_string(),
            "}".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::request::{HttpMethod, SnippetRequest};
    use crate::{render, Language};
    use pretty_assertions::assert_eq;

    #[test]
    fn post_with_headers_and_body() {
        let req = SnippetRequest::new(HttpMethod::Post, "https://x/y")
            .with_header("Content-Type", "application/json")
            .with_body(r#"{"a":1}"#);
        let expected = indoc::indoc! {r##"
            // Cargo.toml: reqwest = { version = "0.12", features = ["blocking"] }
            use reqwest::blocking::Client;
            use reqwest::Method;

            fn main() -> Result<(), Box<dyn std::error::Error>> {
                let client = Client::new();
                let mut request = client.request(Method::POST, "https://x/y");

                request = request.header("Content-Type", "application/json");

                request = request.body(r#"{"a":1}"#);

                let response = request.send()?;
                println!("{}", response.status());
                println!("{}", response.text()?);
                Ok(())
            }
        "##};
        assert_eq!(render(Language::Rust, &req), expected);
    }

    #[test]
    fn bare_get_binding_is_immutable() {
        let req = SnippetRequest::new(HttpMethod::Get, "https://x/y");
        let text = render(Language::Rust, &req);
        assert!(text.contains("    let request = client.request(Method::GET, \"https://x/y\");"));
    }
}
