//! Language configuration
//!
//! A language variant is just data: a keyword list and whether `#`
//! starts a comment. Built-in variants live in `syntax::builtin`; more
//! can be loaded from a TOML file.
//!
//! Example:
//! ```toml
//! # extra languages
//! [[language]]
//! name = "Conf"
//! extensions = ["conf"]
//! keywords = ["include", "set"]
//! shell-comments = true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Settings for one C-like language variant
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LanguageConfig {
    /// Language name (e.g., "C", "Java")
    pub name: String,
    /// File extensions without the dot
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Words styled as keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Whether `#` comments to end of line
    #[serde(default)]
    pub shell_comments: bool,
}

impl LanguageConfig {
    /// Create a variant with no extensions, keywords or shell comments
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extensions: Vec::new(),
            keywords: Vec::new(),
            shell_comments: false,
        }
    }

    /// Builder: add file extensions
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions.extend(extensions.iter().map(|e| e.to_string()));
        self
    }

    /// Builder: add keywords
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.extend(keywords.iter().map(|k| k.to_string()));
        self
    }

    /// Builder: set shell comment support
    pub fn with_shell_comments(mut self, enabled: bool) -> Self {
        self.shell_comments = enabled;
        self
    }
}

/// Contents of a language file
#[derive(Debug, Default, Deserialize)]
struct LanguageFile {
    #[serde(default)]
    language: Vec<LanguageConfig>,
}

/// Parse language variants from TOML text
pub fn parse_languages(contents: &str) -> Result<Vec<LanguageConfig>> {
    let file: LanguageFile = toml::from_str(contents)?;
    Ok(file.language)
}

/// Load language variants from a TOML file
pub fn load_languages(path: &Path) -> Result<Vec<LanguageConfig>> {
    let contents = fs::read_to_string(path)?;
    parse_languages(&contents)
}
