//! Keyword splitting for NORMAL spans

use std::collections::HashSet;

use regex::Regex;

use super::span::{Span, SpanKind};
use crate::error::Result;

/// Maximal runs of ASCII word characters
const WORD_PATTERN: &str = r"[A-Za-z0-9_]+";

/// Splits keywords out of plain text spans
///
/// The keyword set is fixed at construction.
#[derive(Debug, Clone)]
pub struct KeywordSplitter {
    keywords: HashSet<String>,
    word: Regex,
}

impl KeywordSplitter {
    /// Create a splitter for the given keywords
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            word: Regex::new(WORD_PATTERN)?,
        })
    }

    /// Check whether a word is a keyword
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Check if there are no keywords
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Refine a line's spans, splitting keywords out of NORMAL spans
    pub fn split(&self, spans: Vec<Span>) -> Vec<Span> {
        if self.keywords.is_empty() {
            return spans;
        }
        let mut result = Vec::with_capacity(spans.len());
        for span in spans {
            if span.kind == SpanKind::Normal {
                self.split_normal(&span, &mut result);
            } else {
                result.push(span);
            }
        }
        result
    }

    fn split_normal(&self, span: &Span, out: &mut Vec<Span>) {
        let text = span.text.as_str();
        let mut normal_start = 0;
        for word in self.word.find_iter(text) {
            if !self.is_keyword(word.as_str()) || !is_whole_word(text, word.start(), word.end()) {
                continue;
            }
            if normal_start < word.start() {
                out.push(sub_span(span, SpanKind::Normal, normal_start, word.start()));
            }
            out.push(sub_span(span, SpanKind::Keyword, word.start(), word.end()));
            normal_start = word.end();
        }
        if normal_start < text.len() {
            out.push(sub_span(span, SpanKind::Normal, normal_start, text.len()));
        }
    }
}

/// Whether `text[start..end]` is not part of a longer non-ASCII word
///
/// The word regex already stops at ASCII word characters, so only
/// letters and digits outside ASCII can extend a match.
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Piece of `span` at span-relative byte range `start..end`
fn sub_span(span: &Span, kind: SpanKind, start: usize, end: usize) -> Span {
    Span {
        kind,
        start: span.start + start,
        text: span.text[start..end].to_string(),
    }
}
