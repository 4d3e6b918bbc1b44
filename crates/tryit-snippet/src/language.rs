//! Supported snippet languages and their names.

/// A target language with a snippet template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// POSIX shell with curl.
    Shell,
    /// Python with `requests`.
    Python,
    /// JavaScript with `fetch`.
    JavaScript,
    /// Go with `net/http`.
    Go,
    /// Rust with `reqwest` (blocking client).
    Rust,
    /// Java 15+ with `java.net.http`.
    Java,
    /// PHP with ext-curl.
    Php,
    /// Ruby with `net/http`.
    Ruby,
}

impl Language {
    /// Every supported language, in tab order.
    pub const ALL: [Self; 8] = [
        Self::Shell,
        Self::Python,
        Self::JavaScript,
        Self::Go,
        Self::Rust,
        Self::Java,
        Self::Php,
        Self::Ruby,
    ];

    /// Look up a language by name or alias, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryit_snippet::Language;
    ///
    /// assert_eq!(Language::from_name("curl"), Some(Language::Shell));
    /// assert_eq!(Language::from_name("JS"), Some(Language::JavaScript));
    /// assert_eq!(Language::from_name("cobol"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lang = match name.trim().to_ascii_lowercase().as_str() {
            "shell" | "curl" | "bash" | "sh" => Self::Shell,
            "python" | "py" => Self::Python,
            "javascript" | "js" | "node" => Self::JavaScript,
            "go" | "golang" => Self::Go,
            "rust" | "rs" => Self::Rust,
            "java" => Self::Java,
            "php" => Self::Php,
            "ruby" | "rb" => Self::Ruby,
            _ => return None,
        };
        Some(lang)
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Java => "java",
            Self::Php => "php",
            Self::Ruby => "ruby",
        }
    }

    /// Display label for tabs and headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shell => "cURL",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Java => "Java",
            Self::Php => "PHP",
            Self::Ruby => "Ruby",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
