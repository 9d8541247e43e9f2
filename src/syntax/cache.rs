//! Per-line block comment state cache
//!
//! Entry `i` records whether line `i` begins inside a block comment.
//! Entries up to `last_good_line` are known correct; anything past it is
//! stale and recomputed on demand by scanning forward from the horizon.

use tracing::{debug, trace};

use super::host::LineSource;
use super::tokenizer::line_ends_commented;

/// Initial number of cached lines
const INITIAL_CAPACITY: usize = 100;

/// Block comment state cache for one buffer
#[derive(Debug, Clone)]
pub struct CommentCache {
    /// Per-line "starts inside a block comment" flags
    enters_comment_at: Vec<bool>,
    /// Highest line whose entry is known correct
    last_good_line: usize,
}

impl CommentCache {
    /// Create a cache for an empty or freshly loaded buffer
    pub fn new() -> Self {
        Self {
            enters_comment_at: vec![false; INITIAL_CAPACITY],
            last_good_line: 0,
        }
    }

    /// Forget everything, as after the whole buffer was replaced
    pub fn reset(&mut self) {
        debug!(from = self.last_good_line, "comment cache reset");
        self.last_good_line = 0;
        self.enters_comment_at[0] = false;
    }

    /// Highest line index known to be correct
    pub fn last_good_line(&self) -> usize {
        self.last_good_line
    }

    /// Number of entries the cache can hold without growing
    pub fn capacity(&self) -> usize {
        self.enters_comment_at.len()
    }

    /// Move the horizon back to `line` if it is currently past it
    ///
    /// Returns the new horizon. Never moves the horizon forward.
    pub fn rewind(&mut self, line: usize) -> usize {
        if line < self.last_good_line {
            debug!(from = self.last_good_line, to = line, "comment cache rewound");
            self.last_good_line = line;
        }
        self.last_good_line
    }

    /// Whether `line_index` begins inside a block comment
    ///
    /// Extends the cache from the horizon if needed.
    ///
    /// # Panics
    ///
    /// Panics if `line_index` is not a line of `lines`.
    pub fn starts_commented<L>(&mut self, line_index: usize, lines: &L, shell_comments: bool) -> bool
    where
        L: LineSource + ?Sized,
    {
        assert!(
            line_index < lines.line_count().max(1),
            "line {} out of range ({} lines)",
            line_index,
            lines.line_count()
        );

        if line_index > self.last_good_line {
            self.ensure_capacity(line_index);
            trace!(from = self.last_good_line, to = line_index, "extending comment cache");
            for i in self.last_good_line..line_index {
                let text = lines.line(i).unwrap_or("");
                self.enters_comment_at[i + 1] =
                    line_ends_commented(text, self.enters_comment_at[i], shell_comments);
            }
            self.last_good_line = line_index;
        }
        self.enters_comment_at[line_index]
    }

    /// Grow storage geometrically so `index` is addressable
    fn ensure_capacity(&mut self, index: usize) {
        let len = self.enters_comment_at.len();
        if index >= len {
            let new_len = (index + 1).max(len * 2);
            self.enters_comment_at.resize(new_len, false);
        }
    }
}

impl Default for CommentCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers_never_commented() {
        let lines = vec!["int a;", "int b;", "", "return a + b;"];
        let mut cache = CommentCache::new();
        for i in 0..lines.len() {
            assert!(!cache.starts_commented(i, &lines, false));
        }
        assert_eq!(cache.last_good_line(), 3);
    }

    #[test]
    fn test_multiline_comment() {
        let lines = vec!["a /* foo", "bar", "baz */ b", "c"];
        let mut cache = CommentCache::new();
        assert!(!cache.starts_commented(0, &lines, false));
        assert!(cache.starts_commented(1, &lines, false));
        assert!(cache.starts_commented(2, &lines, false));
        assert!(!cache.starts_commented(3, &lines, false));
    }

    #[test]
    fn test_out_of_order_queries() {
        let lines = vec!["/*", "x", "*/", "y"];
        let mut cache = CommentCache::new();
        assert!(!cache.starts_commented(3, &lines, false));
        assert!(cache.starts_commented(1, &lines, false));
        assert!(cache.starts_commented(2, &lines, false));
        assert_eq!(cache.last_good_line(), 3);
    }

    #[test]
    fn test_rewind_only_moves_back() {
        let lines = vec!["a"; 10];
        let mut cache = CommentCache::new();
        cache.starts_commented(8, &lines, false);
        assert_eq!(cache.rewind(5), 5);
        assert_eq!(cache.rewind(7), 5);
        assert_eq!(cache.last_good_line(), 5);
    }

    #[test]
    fn test_rewind_recomputes_changed_lines() {
        let mut lines = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut cache = CommentCache::new();
        assert!(!cache.starts_commented(2, &lines, false));

        lines[0] = "/* a".to_string();
        // Stale until rewound.
        assert!(!cache.starts_commented(2, &lines, false));
        cache.rewind(0);
        assert!(cache.starts_commented(2, &lines, false));
    }

    #[test]
    fn test_reset() {
        let lines = vec!["/*", "x"];
        let mut cache = CommentCache::new();
        assert!(cache.starts_commented(1, &lines, false));
        cache.reset();
        assert_eq!(cache.last_good_line(), 0);
        let replaced = vec!["x", "y"];
        assert!(!cache.starts_commented(1, &replaced, false));
    }

    #[test]
    fn test_capacity_grows_geometrically() {
        let lines: Vec<String> = (0..1000).map(|i| format!("line {}", i)).collect();
        let mut cache = CommentCache::new();
        assert_eq!(cache.capacity(), INITIAL_CAPACITY);
        cache.starts_commented(100, &lines, false);
        assert_eq!(cache.capacity(), 200);
        cache.starts_commented(999, &lines, false);
        assert_eq!(cache.capacity(), 1000);
        cache.reset();
        assert_eq!(cache.capacity(), 1000);
    }

    #[test]
    fn test_shell_comments_do_not_open_blocks() {
        let lines = vec!["# /*", "x"];
        let mut cache = CommentCache::new();
        assert!(!cache.starts_commented(1, &lines, true));
        let mut cache = CommentCache::new();
        assert!(cache.starts_commented(1, &lines, false));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_line_panics() {
        let lines = vec!["a", "b"];
        let mut cache = CommentCache::new();
        cache.starts_commented(2, &lines, false);
    }
}
