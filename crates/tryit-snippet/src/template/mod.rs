//! Per-language snippet templates.
//!
//! Every language is one [`Template`] implementation producing the same five
//! sections. Templates are found by lookup in [`TEMPLATES`], so adding a
//! language means adding one module and one table entry.

mod go;
mod java;
mod javascript;
mod php;
mod python;
mod ruby;
mod rust;
mod shell;

use crate::language::Language;
use crate::request::SnippetRequest;

/// Rendered sections of one snippet, in output order.
#[derive(Debug, Default)]
pub(crate) struct Sections {
    pub imports: Vec<String>,
    pub construct: Vec<String>,
    pub headers: Vec<String>,
    pub body: Vec<String>,
    pub send: Vec<String>,
}

/// One language's snippet layout.
pub(crate) trait Template: Sync {
    /// Language this template renders.
    fn language(&self) -> Language;

    /// Import / require / preamble lines.
    fn imports(&self, request: &SnippetRequest) -> Vec<String>;

    /// Lines that create the request (method and URL).
    fn construct(&self, request: &SnippetRequest) -> Vec<String>;

    /// Header lines, one per header, in request order.
    fn headers(&self, request: &SnippetRequest) -> Vec<String>;

    /// Lines that attach `body`. Only called when the method carries one.
    fn body(&self, request: &SnippetRequest, body: &str) -> Vec<String>;

    /// Lines that send the request and print the response.
    fn send(&self, request: &SnippetRequest) -> Vec<String>;

    /// Join sections into the final text.
    ///
    /// The default separates non-empty sections with a blank line.
    fn assemble(&self, sections: Sections) -> String {
        let blocks: Vec<String> = [
            sections.imports,
            sections.construct,
            sections.headers,
            sections.body,
            sections.send,
        ]
        .into_iter()
        .filter(|lines| !lines.is_empty())
        .map(|lines| lines.join("\n"))
        .collect();
        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }
}

/// Template registry, in [`Language::ALL`] order.
static TEMPLATES: &[&dyn Template] = &[
    &shell::Shell,
    &python::Python,
    &javascript::JavaScript,
    &go::Go,
    &rust::Rust,
    &java::Java,
    &php::Php,
    &ruby::Ruby,
];

fn template_for(language: Language) -> Option<&'static dyn Template> {
    TEMPLATES.iter().copied().find(|t| t.language() == language)
}

fn render_with(template: &dyn Template, request: &SnippetRequest) -> String {
    let sections = Sections {
        imports: template.imports(request),
        construct: template.construct(request),
        headers: template.headers(request),
        body: request
            .rendered_body()
            .map(|body| template.body(request, body))
            .unwrap_or_default(),
        send: template.send(request),
    };
    template.assemble(sections)
}

/// Render `request` in a known language.
///
/// Falls back to [`unsupported_placeholder`] if the language has no
/// registered template.
#[must_use]
pub fn render(language: Language, request: &SnippetRequest) -> String {
    match template_for(language) {
        Some(template) => {
            tracing::debug!(
                language = language.name(),
                method = request.method().as_str(),
                url = request.url(),
                "rendering snippet"
            );
            render_with(template, request)
        }
        None => unsupported_placeholder(language.name()),
    }
}

/// Render `request` in the language named `language`.
///
/// Names are matched case-insensitively against canonical names and aliases
/// (see [`Language::from_name`]). Unknown names never fail: they produce a
/// placeholder comment instead.
///
/// # Examples
///
/// ```
/// use tryit_snippet::{generate, HttpMethod, SnippetRequest};
///
/// let request = SnippetRequest::new(HttpMethod::Get, "https://api.example.com/v1/quotes");
/// assert!(generate("python", &request).contains("requests.request(\"GET\", url)"));
/// assert!(generate("cobol", &request).starts_with("//"));
/// ```
#[must_use]
pub fn generate(language: &str, request: &SnippetRequest) -> String {
    match Language::from_name(language) {
        Some(lang) => render(lang, request),
        None => {
            tracing::warn!(language, "no snippet template for language");
            unsupported_placeholder(language)
        }
    }
}

/// Render `request` once per language, in the given order.
#[must_use]
pub fn generate_all(request: &SnippetRequest, languages: &[Language]) -> Vec<(Language, String)> {
    languages
        .iter()
        .map(|&lang| (lang, render(lang, request)))
        .collect()
}

/// Placeholder text for languages without a template.
#[must_use]
pub fn unsupported_placeholder(language: &str) -> String {
    format!("// Code snippets are not supported for language '{language}'.\n")
}
