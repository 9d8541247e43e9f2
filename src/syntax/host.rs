//! Collaborator traits implemented by the host editor
//!
//! The styler never owns text. It reads lines through [`LineSource`],
//! reads the characters around an edit through [`TextSource`], and asks
//! for repaints through [`RedrawSink`].

/// Line-indexed view of a text buffer
pub trait LineSource {
    /// Number of lines in the buffer
    fn line_count(&self) -> usize;

    /// Text of a line, without its terminator
    fn line(&self, index: usize) -> Option<&str>;
}

/// Character-offset view of a text buffer, with lines joined by `\n`
pub trait TextSource: LineSource {
    /// Characters `start..end`, clamped to the buffer
    fn slice_chars(&self, start: usize, end: usize) -> String;

    /// Index of the line containing a character offset
    fn line_index_of(&self, offset: usize) -> usize;
}

/// Receives repaint requests from the styler
pub trait RedrawSink {
    /// Repaint everything from `line` onwards
    fn request_redraw_from(&mut self, line: usize);
}

/// Hosts that repaint on their own schedule can pass `&mut ()`
impl RedrawSink for () {
    fn request_redraw_from(&mut self, _line: usize) {}
}

impl<T: AsRef<str>> LineSource for [T] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(|line| line.as_ref())
    }
}

impl<T: AsRef<str>> LineSource for Vec<T> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(|line| line.as_ref())
    }
}
