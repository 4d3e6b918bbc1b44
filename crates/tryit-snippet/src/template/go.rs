//! Go + net/http.

use super::Template;
use crate::language::Language;
use crate::literal::{double_quoted, go_raw};
use crate::request::SnippetRequest;

pub(crate) struct Go;

impl Template for Go {
    fn language(&self) -> Language {
        Language::Go
    }

    fn imports(&self, request: &SnippetRequest) -> Vec<String> {
        let mut packages = vec!["fmt", "io", "log", "net/http"];
        if request.rendered_body().is_some() {
            packages.push("strings");
        }
        let mut lines = vec!["package main".to_string(), String::new(), "import (".to_string()];
        lines.extend(packages.iter().map(|p| format!("\t\"{p}\"")));
        lines.push(")".to_string());
        lines
    }

    fn construct(&self, request: &SnippetRequest) -> Vec<String> {
        vec![
            "func main() {".to_string(),
            format!(
                "\treq, err := http.NewRequest({}, {}, nil)",
                double_quoted(request.method().as_str()),
                double_quoted(request.url()),
            ),
            "\tif err != nil {".to_string(),
            "\t\tlog.Fatal(err)".to_string(),
            "\t}".to_string(),
        ]
    }

    fn headers(&self, request: &SnippetRequest) -> Vec<String> {
        request
            .headers()
            .map(|(name, value)| {
                format!(
                    "\treq.Header.Set({}, {})",
                    double_quoted(name),
                    double_quoted(value)
                )
            })
            .collect()
    }

    fn body(&self, _request: &SnippetRequest, body: &str) -> Vec<String> {
        vec![
            format!("\tpayload := {}", go_raw(body)),
            "\treq.Body = io.NopCloser(strings.NewReader(payload))".to_string(),
            "\treq.ContentLength = int64(len(payload))".to_string(),
        ]
    }

    fn send(&self, _request: &SnippetRequest) -> Vec<String> {
        [
            "\tresp, err := http.DefaultClient.Do(req)",
            "\tif err != nil {",
            "\t\tlog.Fatal(err)",
            "\t}",
            "\tdefer resp.Body.Close()",
            "",
            "\tdata, err := io.ReadAll(resp.Body)",
            "\tif err != nil {",
            "\t\tlog.Fatal(err)",
            "\t}",
            "\tfmt.Println(resp.Status)",
            "\tfmt.Println(string(data))",
            "}",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }
}
