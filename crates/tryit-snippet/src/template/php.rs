//! PHP with ext-curl.

use super::Template;
use crate::language::Language;
use crate::literal::{heredoc_delimiter, php_single};
use crate::request::{HttpMethod, SnippetRequest};

pub(crate) struct Php;

impl Template for Php {
    fn language(&self) -> Language {
        Language::Php
    }

    fn imports(&self, _request: &SnippetRequest) -> Vec<String> {
        vec!["<?php".to_string()]
    }

    fn construct(&self, request: &SnippetRequest) -> Vec<String> {
        let method_opt = if request.method() == HttpMethod::Head {
            "curl_setopt($ch, CURLOPT_NOBODY, true);".to_string()
        } else {
            format!(
                "curl_setopt($ch, CURLOPT_CUSTOMREQUEST, {});",
                php_single(request.method().as_str())
            )
        };
        vec![
            "$ch = curl_init();".to_string(),
            format!("curl_setopt($ch, CURLOPT_URL, {});", php_single(request.url())),
            method_opt,
            "curl_setopt($ch, CURLOPT_RETURNTRANSFER, true);".to_string(),
        ]
    }

    fn headers(&self, request: &SnippetRequest) -> Vec<String> {
        if !request.has_headers() {
            return Vec::new();
        }
        let mut lines = vec!["curl_setopt($ch, CURLOPT_HTTPHEADER, [".to_string()];
        lines.extend(
            request
                .headers()
                .map(|(name, value)| format!("    {},", php_single(&format!("{name}: {value}")))),
        );
        lines.push("]);".to_string());
        lines
    }

    fn body(&self, _request: &SnippetRequest, body: &str) -> Vec<String> {
        let delim = heredoc_delimiter(body);
        let mut lines = vec![format!("$body = <<<'{delim}'")];
        lines.extend(body.split('\n').map(ToString::to_string));
        lines.push(format!("{delim};"));
        lines.push("curl_setopt($ch, CURLOPT_POSTFIELDS, $body);".to_string());
        lines
    }

    fn send(&self, _request: &SnippetRequest) -> Vec<String> {
        [
            "$response = curl_exec($ch);",
            "$status = curl_getinfo($ch, CURLINFO_HTTP_CODE);",
            "curl_close($ch);",
            "",
            r#"echo $status . "\n";"#,
            r#"echo $response . "\n";"#,
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }
}
