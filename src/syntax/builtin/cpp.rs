//! C++ language variant

use super::c::C_KEYWORDS;
use crate::config::LanguageConfig;

/// Keywords C++ adds on top of C
const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "bitand", "bitor", "bool", "catch", "class",
    "compl", "concept", "consteval", "constexpr", "constinit", "const_cast", "co_await",
    "co_return", "co_yield", "decltype", "delete", "dynamic_cast", "explicit", "export", "false",
    "friend", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator",
    "or", "or_eq", "private", "protected", "public", "reinterpret_cast", "requires",
    "static_assert", "static_cast", "template", "this", "thread_local", "throw", "true", "try",
    "typeid", "typename", "using", "virtual", "wchar_t", "xor", "xor_eq",
];

/// Create the C++ language variant
pub fn cpp_language() -> LanguageConfig {
    LanguageConfig::new("C++")
        .with_extensions(&["cpp", "hpp", "cc", "cxx", "hh", "hxx"])
        .with_keywords(C_KEYWORDS)
        .with_keywords(CPP_KEYWORDS)
}
