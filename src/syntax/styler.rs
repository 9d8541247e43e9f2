//! The incremental C-like styler
//!
//! Ties the tokenizer, keyword splitter and comment cache together and
//! keeps the cache in step with buffer edits.

use tracing::debug;

use super::builtin;
use super::cache::CommentCache;
use super::host::{LineSource, RedrawSink, TextSource};
use super::invalidation::{touches_comment_marker, TextEvent};
use super::keywords::KeywordSplitter;
use super::span::Span;
use super::tokenizer::scan_line;
use crate::config::LanguageConfig;
use crate::error::Result;

/// Styler for one buffer in one C-like language
#[derive(Debug, Clone)]
pub struct CLikeStyler {
    /// Language name, for display
    name: String,
    /// Whether `#` comments to end of line
    shell_comments: bool,
    keywords: KeywordSplitter,
    cache: CommentCache,
}

impl CLikeStyler {
    /// Create a styler for a language variant
    pub fn new(language: &LanguageConfig) -> Result<Self> {
        Ok(Self {
            name: language.name.clone(),
            shell_comments: language.shell_comments,
            keywords: KeywordSplitter::new(language.keywords.iter().cloned())?,
            cache: CommentCache::new(),
        })
    }

    /// Styler for C
    pub fn c() -> Result<Self> {
        Self::new(&builtin::c_language())
    }

    /// Styler for C++
    pub fn cpp() -> Result<Self> {
        Self::new(&builtin::cpp_language())
    }

    /// Styler for Java
    pub fn java() -> Result<Self> {
        Self::new(&builtin::java_language())
    }

    /// Language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `#` starts a comment in this language
    pub fn supports_shell_comments(&self) -> bool {
        self.shell_comments
    }

    /// The keyword set
    pub fn keywords(&self) -> &KeywordSplitter {
        &self.keywords
    }

    /// Highest line whose comment state is known correct
    pub fn last_good_line(&self) -> usize {
        self.cache.last_good_line()
    }

    /// Whether a line begins inside a block comment
    ///
    /// # Panics
    ///
    /// Panics if `line_index` is not a line of `lines`.
    pub fn starts_commented<L>(&mut self, line_index: usize, lines: &L) -> bool
    where
        L: LineSource + ?Sized,
    {
        self.cache.starts_commented(line_index, lines, self.shell_comments)
    }

    /// Style a whole line
    ///
    /// The returned spans concatenate to exactly the line's text.
    ///
    /// # Panics
    ///
    /// Panics if `line_index` is not a line of `lines`.
    pub fn style_line<L>(&mut self, line_index: usize, lines: &L) -> Vec<Span>
    where
        L: LineSource + ?Sized,
    {
        let starts_in_comment = self.starts_commented(line_index, lines);
        let text = lines.line(line_index).unwrap_or("");
        let scan = scan_line(text, starts_in_comment, self.shell_comments);
        self.keywords.split(scan.spans)
    }

    /// Style the characters `start..start + len` of a line
    ///
    /// Used for wrapped lines, where each screen row shows part of a
    /// logical line. Spans crossing the range edges are clipped; span
    /// offsets in the result are still byte offsets within the line.
    pub fn style_segment<L>(&mut self, line_index: usize, start: usize, len: usize, lines: &L) -> Vec<Span>
    where
        L: LineSource + ?Sized,
    {
        let text = lines.line(line_index).unwrap_or("");
        let from = char_to_byte(text, start);
        let to = char_to_byte(text, start.saturating_add(len));
        self.style_line(line_index, lines)
            .iter()
            .filter_map(|span| span.clip(from, to))
            .collect()
    }

    /// Handle text inserted at character `offset`
    ///
    /// `source` must already contain the inserted text.
    pub fn on_text_inserted<S, R>(&mut self, source: &S, offset: usize, text: &str, redraw: &mut R)
    where
        S: TextSource + ?Sized,
        R: RedrawSink + ?Sized,
    {
        self.dirty_from_offset(source, offset, text, true, redraw);
    }

    /// Handle `text` removed from character `offset`
    ///
    /// `source` must already have the text removed.
    pub fn on_text_removed<S, R>(&mut self, source: &S, offset: usize, text: &str, redraw: &mut R)
    where
        S: TextSource + ?Sized,
        R: RedrawSink + ?Sized,
    {
        self.dirty_from_offset(source, offset, text, false, redraw);
    }

    /// Handle the whole buffer being replaced
    pub fn on_text_replaced(&mut self) {
        self.cache.reset();
    }

    /// Dispatch any edit event
    pub fn on_text_event<S, R>(&mut self, event: &TextEvent, source: &S, redraw: &mut R)
    where
        S: TextSource + ?Sized,
        R: RedrawSink + ?Sized,
    {
        match event {
            TextEvent::Inserted { offset, text } => self.on_text_inserted(source, *offset, text, redraw),
            TextEvent::Removed { offset, text } => self.on_text_removed(source, *offset, text, redraw),
            TextEvent::Replaced => self.on_text_replaced(),
        }
    }

    fn dirty_from_offset<S, R>(&mut self, source: &S, offset: usize, text: &str, is_insert: bool, redraw: &mut R)
    where
        S: TextSource + ?Sized,
        R: RedrawSink + ?Sized,
    {
        if !touches_comment_marker(source, offset, text, is_insert) {
            return;
        }
        let line = source.line_index_of(offset);
        let horizon = self.cache.rewind(line);
        debug!(language = %self.name, line, horizon, "edit touched a comment marker");
        redraw.request_redraw_from(horizon);
    }
}

/// Byte index of the `chars`-th character, or the line length past the end
fn char_to_byte(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map_or(text.len(), |(i, _)| i)
}
