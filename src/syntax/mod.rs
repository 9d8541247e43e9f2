//! Syntax styling module
//!
//! This module provides incremental lexical styling for C-like languages:
//! - Line tokenizing into normal, string, comment and error spans
//! - Keyword splitting
//! - A per-line block comment cache kept valid across edits

mod builtin;
mod cache;
mod host;
mod invalidation;
mod keywords;
mod registry;
mod span;
mod styler;
mod tokenizer;

pub use builtin::{all_languages, c_language, cpp_language, java_language};
pub use cache::CommentCache;
pub use host::{LineSource, RedrawSink, TextSource};
pub use invalidation::{has_comment_marker, touches_comment_marker, TextEvent};
pub use keywords::KeywordSplitter;
pub use registry::LanguageRegistry;
pub use span::{concat, Span, SpanKind};
pub use styler::CLikeStyler;
pub use tokenizer::{line_ends_commented, scan_line, LineScan};
