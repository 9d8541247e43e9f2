//! Span types for styled lines
//!
//! A line is styled as a sequence of typed spans which, concatenated,
//! reproduce the line exactly.

/// Lexical category of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Plain source text
    Normal,
    /// Quoted string or character literal, quotes included
    String,
    /// Line comment, shell comment or (part of) a block comment
    Comment,
    /// Word found in the language's keyword set
    Keyword,
    /// Unterminated string literal
    Error,
}

impl SpanKind {
    /// Every kind, in palette order
    pub const ALL: [SpanKind; 5] = [
        SpanKind::Normal,
        SpanKind::String,
        SpanKind::Comment,
        SpanKind::Keyword,
        SpanKind::Error,
    ];

    /// Get a human-readable name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            SpanKind::Normal => "normal",
            SpanKind::String => "string",
            SpanKind::Comment => "comment",
            SpanKind::Keyword => "keyword",
            SpanKind::Error => "error",
        }
    }

    /// Parse a kind from its name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        SpanKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Default foreground colour as 0xRRGGBB
    pub fn default_color(&self) -> u32 {
        match self {
            SpanKind::Normal => 0x000000,
            SpanKind::String => 0x0000ff,
            SpanKind::Comment => 0x227722,
            SpanKind::Keyword => 0x770022,
            SpanKind::Error => 0xff0000,
        }
    }
}

/// A typed run of text within a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Lexical category
    pub kind: SpanKind,
    /// Byte offset of the span within its line
    pub start: usize,
    /// The text covered by this span
    pub text: String,
}

impl Span {
    /// Create a span covering `line[start..end]`
    pub fn new(kind: SpanKind, line: &str, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            text: line[start..end].to_string(),
        }
    }

    /// Byte offset just past the end of this span
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Sub-span covering the byte range `from..to`, relative to the line
    ///
    /// The range is clamped to this span. An edge inside a multibyte
    /// character is widened to include the whole character.
    pub fn clip(&self, from: usize, to: usize) -> Option<Span> {
        let from = floor_char_boundary(&self.text, from.max(self.start) - self.start);
        let to = ceil_char_boundary(&self.text, to.min(self.end()).saturating_sub(self.start));
        if from >= to {
            return None;
        }
        Some(Span {
            kind: self.kind,
            start: self.start + from,
            text: self.text[from..to].to_string(),
        })
    }
}

/// Nearest char boundary at or before `pos`
fn floor_char_boundary(text: &str, pos: usize) -> usize {
    let mut p = pos.min(text.len());
    while p > 0 && !text.is_char_boundary(p) {
        p -= 1;
    }
    p
}

/// Nearest char boundary at or after `pos`
fn ceil_char_boundary(text: &str, pos: usize) -> usize {
    let mut p = pos.min(text.len());
    while p < text.len() && !text.is_char_boundary(p) {
        p += 1;
    }
    p
}

/// Rebuild a line from its spans
pub fn concat(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
