//! POSIX shell + curl.

use super::{Sections, Template};
use crate::language::Language;
use crate::literal::shell_single;
use crate::request::{HttpMethod, SnippetRequest};

pub(crate) struct Shell;

impl Template for Shell {
    fn language(&self) -> Language {
        Language::Shell
    }

    fn imports(&self, _request: &SnippetRequest) -> Vec<String> {
        vec!["#!/bin/sh".to_string()]
    }

    fn construct(&self, request: &SnippetRequest) -> Vec<String> {
        // `--request HEAD` waits for a body that never comes.
        let method = match request.method() {
            HttpMethod::Head => "curl --head".to_string(),
            other => format!("curl --request {other}"),
        };
        vec![method, format!("--url {}", shell_single(request.url()))]
    }

    fn headers(&self, request: &SnippetRequest) -> Vec<String> {
        request
            .headers()
            .map(|(name, value)| format!("--header {}", shell_single(&format!("{name}: {value}"))))
            .collect()
    }

    fn body(&self, _request: &SnippetRequest, body: &str) -> Vec<String> {
        vec![format!("--data-raw {}", shell_single(body))]
    }

    fn send(&self, _request: &SnippetRequest) -> Vec<String> {
        vec![r"--write-out '\n%{http_code}\n'".to_string()]
    }

    /// One curl invocation: every section after the shebang is a
    /// continuation line of the same command.
    fn assemble(&self, sections: Sections) -> String {
        let command: Vec<String> = [
            sections.construct,
            sections.headers,
            sections.body,
            sections.send,
        ]
        .concat();
        format!(
            "{}\n\n{}\n",
            sections.imports.join("\n"),
            command.join(" \\\n  "),
        )
    }
}
