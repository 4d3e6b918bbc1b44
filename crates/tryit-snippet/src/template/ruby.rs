//! Ruby with net/http.

use super::Template;
use crate::language::Language;
use crate::literal::{heredoc_delimiter, ruby_double};
use crate::request::{HttpMethod, SnippetRequest};

pub(crate) struct Ruby;

const fn request_class(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "Get",
        HttpMethod::Post => "Post",
        HttpMethod::Put => "Put",
        HttpMethod::Patch => "Patch",
        HttpMethod::Delete => "Delete",
        HttpMethod::Head => "Head",
        HttpMethod::Options => "Options",
    }
}

impl Template for Ruby {
    fn language(&self) -> Language {
        Language::Ruby
    }

    fn imports(&self, _request: &SnippetRequest) -> Vec<String> {
        vec![
            r#"require "net/http""#.to_string(),
            r#"require "uri""#.to_string(),
        ]
    }

    fn construct(&self, request: &SnippetRequest) -> Vec<String> {
        vec![
            format!("uri = URI({})", ruby_double(request.url())),
            format!(
                "request = Net::HTTP::{}.new(uri)",
                request_class(request.method())
            ),
        ]
    }

    fn headers(&self, request: &SnippetRequest) -> Vec<String> {
        request
            .headers()
            .map(|(name, value)| format!("request[{}] = {}", ruby_double(name), ruby_double(value)))
            .collect()
    }

    fn body(&self, _request: &SnippetRequest, body: &str) -> Vec<String> {
        let delim = heredoc_delimiter(body);
        let mut lines = vec![format!("request.body = <<-'{delim}'.chomp")];
        lines.extend(body.split('\n').map(ToString::to_string));
        lines.push(delim);
        lines
    }

    fn send(&self, _request: &SnippetRequest) -> Vec<String> {
        [
            r#"response = Net::HTTP.start(uri.hostname, uri.port, use_ssl: uri.scheme == "https") do |http|"#,
            "  http.request(request)",
            "end",
            "",
            "puts response.code",
            "puts response.body",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::request::{HttpMethod, SnippetRequest};
    use crate::{render, Language};
    use pretty_assertions::assert_eq;

    #[test]
    fn patch_with_verbatim_heredoc() {
        let req = SnippetRequest::new(HttpMethod::Patch, "https://x/y")
            .with_header("Content-Type", "application/json")
            .with_body("{\n  \"a\": 1\n}");
        let expected = indoc::indoc! {r#"
            require "net/http"
            require "uri"

            uri = URI("https://x/y")
            request = Net::HTTP::Patch.new(uri)

            request["Content-Type"] = "application/json"

            request.body = <<-'JSON'.chomp
            {
              "a": 1
            }
            JSON

            response = Net::HTTP.start(uri.hostname, uri.port, use_ssl: uri.scheme == "https") do |http|
              http.request(request)
            end

            puts response.code
            puts response.body
        "#};
        assert_eq!(render(Language::Ruby, &req), expected);
    }

    #[test]
    fn heredoc_keeps_indentation_and_trailing_newline() {
        let req = SnippetRequest::new(HttpMethod::Post, "https://x/y").with_body("  [1,\n  2]\n");
        let text = render(Language::Ruby, &req);
        assert!(
            text.contains("request.body = <<-'JSON'.chomp\n  [1,\n  2]\n\nJSON\n"),
            "{text}"
        );
    }

    #[test]
    fn delete_has_no_body_section() {
        let req = SnippetRequest::new(HttpMethod::Delete, "https://x/y/1").with_body("{}");
        let text = render(Language::Ruby, &req);
        assert!(text.contains("Net::HTTP::Delete.new(uri)"));
        assert!(!text.contains("request.body"));
    }
}
