//! Java 15+ with java.net.http.

use super::Template;
use crate::language::Language;
use crate::literal::{double_quoted, java_text_block};
use crate::request::SnippetRequest;

const INDENT: &str = "        ";

pub(crate) struct Java;

impl Template for Java {
    fn language(&self) -> Language {
        Language::Java
    }

    fn imports(&self, _request: &SnippetRequest) -> Vec<String> {
        [
            "import java.net.URI;",
            "import java.net.http.HttpClient;",
            "import java.net.http.HttpRequest;",
            "import java.net.http.HttpResponse;",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    fn construct(&self, request: &SnippetRequest) -> Vec<String> {
        vec![
            "public class Main {".to_string(),
            "    public static void main(String[] args) throws Exception {".to_string(),
            format!("{INDENT}HttpRequest.Builder builder = HttpRequest.newBuilder()"),
            format!("{INDENT}    .uri(URI.create({}));", double_quoted(request.url())),
        ]
    }

    fn headers(&self, request: &SnippetRequest) -> Vec<String> {
        request
            .headers()
            .map(|(name, value)| {
                format!(
                    "{INDENT}builder.header({}, {});",
                    double_quoted(name),
                    double_quoted(value)
                )
            })
            .collect()
    }

    fn body(&self, request: &SnippetRequest, body: &str) -> Vec<String> {
        let mut lines = vec![format!("{INDENT}String body = \"\"\"")];
        lines.extend(java_text_block(body, &format!("{INDENT}    ")));
        if let Some(closing) = lines.last_mut() {
            closing.push(';');
        }
        lines.push(format!(
            "{INDENT}builder.method({}, HttpRequest.BodyPublishers.ofString(body));",
            double_quoted(request.method().as_str()),
        ));
        lines
    }

    fn send(&self, request: &SnippetRequest) -> Vec<String> {
        let mut lines = Vec::new();
        if request.rendered_body().is_none() {
            lines.push(format!(
                "{INDENT}builder.method({}, HttpRequest.BodyPublishers.noBody());",
                double_quoted(request.method().as_str()),
            ));
        }
        lines.extend([
            format!("{INDENT}HttpResponse<String> response = HttpClient.newHttpClient()"),
            format!("{INDENT}    .send(builder.build(), HttpResponse.BodyHandlers.ofString());"),
            format!("{INDENT}System.out.println(response.statusCode());"),
            format!("{INDENT}System.out.println(response.body());"),
            "    }".to_string(),
            "}".to_string(),
        ]);
        lines
    }
}
