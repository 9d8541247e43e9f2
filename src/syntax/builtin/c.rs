//! C language variant

use crate::config::LanguageConfig;

/// C keywords (C11)
pub const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

/// Create the C language variant
pub fn c_language() -> LanguageConfig {
    LanguageConfig::new("C")
        .with_extensions(&["c", "h"])
        .with_keywords(C_KEYWORDS)
}
