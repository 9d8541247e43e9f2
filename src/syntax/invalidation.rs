//! Edit events and the comment marker window check
//!
//! An edit can only change block comment structure if it creates or
//! destroys a `/*` or `*/`. Looking at the two characters before the edit
//! and the one after it, with and without the edited text, catches every
//! ordinary case without rescanning the buffer. Pathological edits can
//! slip past the window (and edits that only add or remove line breaks
//! shift line indices without touching a marker); those are accepted.

use super::host::TextSource;

/// Characters of context taken before an edit
const PREFIX_CHARS: usize = 2;
/// Characters of context taken after an edit
const SUFFIX_CHARS: usize = 1;

/// A buffer mutation, reported after it has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEvent {
    /// `text` was inserted at character `offset`
    Inserted { offset: usize, text: String },
    /// `text` was removed from character `offset`
    Removed { offset: usize, text: String },
    /// The whole buffer was replaced
    Replaced,
}

/// Check whether text contains a block comment marker
pub fn has_comment_marker(text: &str) -> bool {
    text.contains("/*") || text.contains("*/")
}

/// Whether an edit may have created or destroyed a block comment marker
///
/// `source` must already reflect the edit. For an insertion the window
/// is read around the inserted text; for a removal around the gap.
pub fn touches_comment_marker<S>(source: &S, offset: usize, text: &str, is_insert: bool) -> bool
where
    S: TextSource + ?Sized,
{
    let prefix = source.slice_chars(offset.saturating_sub(PREFIX_CHARS), offset);
    let end = if is_insert {
        offset + text.chars().count()
    } else {
        offset
    };
    let suffix = source.slice_chars(end, end + SUFFIX_CHARS);

    let with_text = format!("{prefix}{text}{suffix}");
    let without_text = format!("{prefix}{suffix}");
    has_comment_marker(&with_text) || has_comment_marker(&without_text)
}
