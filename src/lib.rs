//! clike-styler - incremental syntax styling for C-like languages
//!
//! Classifies each line of a buffer into normal, string, comment, keyword
//! and error spans, tracking block comments across lines with a cache that
//! survives ordinary edits.

pub mod buffer;
pub mod config;
pub mod error;
pub mod syntax;

pub use buffer::TextBuffer;
pub use config::LanguageConfig;
pub use error::{Result, StylerError};
pub use syntax::{
    CLikeStyler, LanguageRegistry, LineSource, RedrawSink, Span, SpanKind, TextEvent, TextSource,
};
