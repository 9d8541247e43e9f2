//! Java language variant

use crate::config::LanguageConfig;

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

/// Create the Java language variant
pub fn java_language() -> LanguageConfig {
    LanguageConfig::new("Java")
        .with_extensions(&["java"])
        .with_keywords(JAVA_KEYWORDS)
}
