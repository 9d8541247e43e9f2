//! Language registry
//!
//! Maps language names and file extensions to language variants and
//! builds stylers for them.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::builtin;
use super::styler::CLikeStyler;
use crate::config::{self, LanguageConfig};
use crate::error::{Result, StylerError};

/// Known language variants
pub struct LanguageRegistry {
    /// Language variants by name
    languages: HashMap<String, LanguageConfig>,
    /// Extension to language name mapping
    extension_map: HashMap<String, String>,
}

impl LanguageRegistry {
    /// Create a registry with the built-in languages
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for language in builtin::all_languages() {
            registry.add(language);
        }
        registry
    }

    /// Create a registry with no languages
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Add a language, replacing any variant with the same name
    pub fn add(&mut self, language: LanguageConfig) {
        let name = language.name.clone();
        for ext in &language.extensions {
            self.extension_map.insert(ext.to_lowercase(), name.clone());
        }
        self.languages.insert(name, language);
    }

    /// Add every language from a TOML file, returning how many were added
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let languages = config::load_languages(path)?;
        let count = languages.len();
        for language in languages {
            self.add(language);
        }
        debug!(path = %path.display(), count, "loaded language file");
        Ok(count)
    }

    /// Get a language by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages.get(name).or_else(|| {
            self.languages
                .values()
                .find(|language| language.name.eq_ignore_ascii_case(name))
        })
    }

    /// Detect language from filename
    pub fn detect(&self, filename: &Path) -> Option<&LanguageConfig> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        let name = self.extension_map.get(&ext)?;
        self.languages.get(name)
    }

    /// Build a styler for a named language
    pub fn styler(&self, name: &str) -> Result<CLikeStyler> {
        let language = self
            .get(name)
            .ok_or_else(|| StylerError::UnknownLanguage(name.to_string()))?;
        CLikeStyler::new(language)
    }

    /// List available languages
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.languages.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
