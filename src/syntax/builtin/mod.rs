//! Built-in language variants
//!
//! C, C++ and Java share one styler; they differ only in keywords.

mod c;
mod cpp;
mod java;

pub use c::c_language;
pub use cpp::cpp_language;
pub use java::java_language;

use crate::config::LanguageConfig;

/// Get all built-in language variants
pub fn all_languages() -> Vec<LanguageConfig> {
    vec![c_language(), cpp_language(), java_language()]
}
