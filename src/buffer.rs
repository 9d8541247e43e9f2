//! Text buffer - line storage that reports its edits
//!
//! Offsets are counted in characters over the whole text, with lines
//! joined by `\n`. Every mutation returns the [`TextEvent`] a styler
//! needs to keep its comment cache valid.

use std::path::{Path, PathBuf};

use crate::error::{Result, StylerError};
use crate::syntax::{LineSource, TextEvent, TextSource};

/// A buffer containing text and metadata
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Full text, lines separated by `\n`
    content: String,
    /// Byte offset where each line starts (always at least one entry)
    line_starts: Vec<usize>,
    /// Associated file path (None for unnamed buffers)
    filename: Option<PathBuf>,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a buffer holding `text`
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self {
            content: text.to_string(),
            line_starts: Vec::new(),
            filename: None,
        };
        buffer.index_lines();
        buffer
    }

    /// Create a buffer from file contents
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut buffer = Self::from_text(&content);
        buffer.filename = Some(path.to_path_buf());
        Ok(buffer)
    }

    /// Get filename if set
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    /// The whole text
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Insert `text` at character `offset`
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<TextEvent> {
        let at = self.byte_offset(offset)?;
        self.content.insert_str(at, text);
        self.shift_lines_inserted(at, text);
        Ok(TextEvent::Inserted {
            offset,
            text: text.to_string(),
        })
    }

    /// Remove `len` characters starting at character `offset`
    pub fn remove(&mut self, offset: usize, len: usize) -> Result<TextEvent> {
        let start = self.byte_offset(offset)?;
        let end = self.byte_offset(offset + len)?;
        let removed: String = self.content.drain(start..end).collect();
        self.shift_lines_removed(start, end);
        Ok(TextEvent::Removed {
            offset,
            text: removed,
        })
    }

    /// Replace the whole text
    pub fn replace_all(&mut self, text: &str) -> TextEvent {
        self.content = text.to_string();
        self.index_lines();
        TextEvent::Replaced
    }

    /// Length of the whole text in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte index of a character offset; the end of the text is valid
    fn byte_offset(&self, offset: usize) -> Result<usize> {
        self.content
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.content.len()))
            .nth(offset)
            .ok_or_else(|| StylerError::OffsetOutOfRange {
                offset,
                len: self.char_len(),
            })
    }

    fn index_lines(&mut self) {
        self.line_starts.clear();
        self.line_starts.push(0);
        self.line_starts
            .extend(self.content.match_indices('\n').map(|(i, _)| i + 1));
    }

    /// Update line starts after `text` was inserted at byte `at`
    fn shift_lines_inserted(&mut self, at: usize, text: &str) {
        let line = self.line_starts.partition_point(|&start| start <= at);
        for start in &mut self.line_starts[line..] {
            *start += text.len();
        }
        let new_starts = text.match_indices('\n').map(|(i, _)| at + i + 1);
        self.line_starts.splice(line..line, new_starts);
    }

    /// Update line starts after bytes `start..end` were removed
    fn shift_lines_removed(&mut self, start: usize, end: usize) {
        let first = self.line_starts.partition_point(|&s| s <= start);
        let last = self.line_starts.partition_point(|&s| s <= end);
        self.line_starts.drain(first..last);
        for line_start in &mut self.line_starts[first..] {
            *line_start -= end - start;
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TextBuffer {
    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map_or(self.content.len(), |next| next - 1);
        Some(&self.content[start..end])
    }
}

impl TextSource for TextBuffer {
    fn slice_chars(&self, start: usize, end: usize) -> String {
        self.content
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    fn line_index_of(&self, offset: usize) -> usize {
        let byte = self
            .content
            .char_indices()
            .nth(offset)
            .map_or(self.content.len(), |(i, _)| i);
        self.line_starts.partition_point(|&start| start <= byte) - 1
    }
}
