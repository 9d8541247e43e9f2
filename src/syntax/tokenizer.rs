//! Line tokenizer for C-like languages
//!
//! Splits one line into NORMAL, STRING, COMMENT and ERROR spans, given
//! whether the line starts inside a block comment. Only block comment
//! state is carried from one line to the next; strings never span lines.

use super::span::{Span, SpanKind};

/// Result of scanning a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScan {
    /// Spans covering the whole line, in order
    pub spans: Vec<Span>,
    /// Whether the next line starts inside a block comment
    pub ends_in_comment: bool,
}

/// Tokenize a line, starting in or out of a block comment
pub fn scan_line(line: &str, starts_in_comment: bool, shell_comments: bool) -> LineScan {
    let mut spans = Vec::new();
    let ends_in_comment = scan(line, starts_in_comment, shell_comments, |kind, start, end| {
        spans.push(Span::new(kind, line, start, end));
    });
    LineScan {
        spans,
        ends_in_comment,
    }
}

/// Compute only the block comment state carried out of a line
///
/// Runs exactly the transitions of [`scan_line`] without building spans,
/// so the comment cache and the styled output always agree.
pub fn line_ends_commented(line: &str, starts_in_comment: bool, shell_comments: bool) -> bool {
    scan(line, starts_in_comment, shell_comments, |_, _, _| {})
}

/// Core scanner. Calls `emit(kind, start, end)` for every span, in order,
/// and returns the comment state at end of line.
fn scan<F>(line: &str, starts_in_comment: bool, shell_comments: bool, mut emit: F) -> bool
where
    F: FnMut(SpanKind, usize, usize),
{
    let bytes = line.as_bytes();
    let len = bytes.len();
    let mut comment = starts_in_comment;
    // Start of the pending run; for a block comment opened on this line
    // it points at the `/*`.
    let mut run_start = 0;
    let mut pos = 0;

    while pos < len {
        if comment {
            match find_comment_end(bytes, pos) {
                Some(end) => {
                    emit(SpanKind::Comment, run_start, end);
                    pos = end;
                    run_start = end;
                    comment = false;
                }
                None => {
                    emit(SpanKind::Comment, run_start, len);
                    return true;
                }
            }
            continue;
        }

        match bytes[pos] {
            b'#' if shell_comments => {
                if run_start < pos {
                    emit(SpanKind::Normal, run_start, pos);
                }
                emit(SpanKind::Comment, pos, len);
                return false;
            }
            b'/' if bytes.get(pos + 1) == Some(&b'*') => {
                if run_start < pos {
                    emit(SpanKind::Normal, run_start, pos);
                }
                run_start = pos;
                pos += 2;
                comment = true;
            }
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                if run_start < pos {
                    emit(SpanKind::Normal, run_start, pos);
                }
                emit(SpanKind::Comment, pos, len);
                return false;
            }
            quote @ (b'"' | b'\'') => {
                if run_start < pos {
                    emit(SpanKind::Normal, run_start, pos);
                }
                match find_closing_quote(bytes, pos + 1, quote) {
                    Some(end) => {
                        emit(SpanKind::String, pos, end);
                        pos = end;
                        run_start = end;
                    }
                    None => {
                        emit(SpanKind::Error, pos, len);
                        return false;
                    }
                }
            }
            _ => pos += 1,
        }
    }

    if run_start < len {
        let kind = if comment { SpanKind::Comment } else { SpanKind::Normal };
        emit(kind, run_start, len);
    }
    comment
}

/// Position just past the first `*/` at or after `from`
fn find_comment_end(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .windows(2)
        .position(|w| w == b"*/")
        .map(|rel| from + rel + 2)
}

/// Position just past the first unescaped `quote` at or after `from`
///
/// A quote is escaped when preceded by an odd number of backslashes.
fn find_closing_quote(bytes: &[u8], from: usize, quote: u8) -> Option<usize> {
    let mut search = from;
    while search < bytes.len() {
        let at = search + bytes[search..].iter().position(|&b| b == quote)?;
        if backslashes_before(bytes, at) % 2 == 0 {
            return Some(at + 1);
        }
        search = at + 1;
    }
    None
}

fn backslashes_before(bytes: &[u8], index: usize) -> usize {
    bytes[..index].iter().rev().take_while(|&&b| b == b'\\').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::span::concat;

    fn kinds(scan: &LineScan) -> Vec<(SpanKind, &str)> {
        scan.spans.iter().map(|s| (s.kind, s.text.as_str())).collect()
    }

    #[test]
    fn test_plain_line() {
        let scan = scan_line("x = y + 1;", false, false);
        assert_eq!(kinds(&scan), vec![(SpanKind::Normal, "x = y + 1;")]);
        assert!(!scan.ends_in_comment);
    }

    #[test]
    fn test_empty_line() {
        let scan = scan_line("", false, false);
        assert!(scan.spans.is_empty());
        assert!(!scan.ends_in_comment);

        let scan = scan_line("", true, false);
        assert!(scan.spans.is_empty());
        assert!(scan.ends_in_comment);
    }

    #[test]
    fn test_line_comment() {
        let scan = scan_line("code // comment", false, false);
        assert_eq!(
            kinds(&scan),
            vec![(SpanKind::Normal, "code "), (SpanKind::Comment, "// comment")]
        );
        assert!(!scan.ends_in_comment);
    }

    #[test]
    fn test_block_comment_on_one_line() {
        let scan = scan_line("a /* b */ c", false, false);
        assert_eq!(
            kinds(&scan),
            vec![
                (SpanKind::Normal, "a "),
                (SpanKind::Comment, "/* b */"),
                (SpanKind::Normal, " c"),
            ]
        );
        assert!(!scan.ends_in_comment);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let scan = scan_line("/* foo", false, false);
        assert_eq!(kinds(&scan), vec![(SpanKind::Comment, "/* foo")]);
        assert!(scan.ends_in_comment);
        assert!(line_ends_commented("/* foo", false, false));
    }

    #[test]
    fn test_opener_at_end_of_line() {
        let scan = scan_line("x /*", false, false);
        assert_eq!(
            kinds(&scan),
            vec![(SpanKind::Normal, "x "), (SpanKind::Comment, "/*")]
        );
        assert!(scan.ends_in_comment);
    }

    #[test]
    fn test_comment_continues() {
        let scan = scan_line("still in comment", true, false);
        assert_eq!(kinds(&scan), vec![(SpanKind::Comment, "still in comment")]);
        assert!(scan.ends_in_comment);
    }

    #[test]
    fn test_comment_ends() {
        let scan = scan_line("end */ code", true, false);
        assert_eq!(
            kinds(&scan),
            vec![(SpanKind::Comment, "end */"), (SpanKind::Normal, " code")]
        );
        assert!(!scan.ends_in_comment);
    }

    #[test]
    fn test_comment_opener_is_not_its_own_closer() {
        // The `*` of `/*` cannot be reused to form `*/`.
        let scan = scan_line("/*/ x", false, false);
        assert_eq!(kinds(&scan), vec![(SpanKind::Comment, "/*/ x")]);
        assert!(scan.ends_in_comment);
    }

    #[test]
    fn test_trailing_slash_is_normal() {
        let scan = scan_line("a = b /", false, false);
        assert_eq!(kinds(&scan), vec![(SpanKind::Normal, "a = b /")]);
        assert!(!scan.ends_in_comment);
    }

    #[test]
    fn test_division_is_normal() {
        let scan = scan_line("a / b", false, false);
        assert_eq!(kinds(&scan), vec![(SpanKind::Normal, "a / b")]);
    }

    #[test]
    fn test_strings() {
        let scan = scan_line(r#"s = "hi"; c = 'x';"#, false, false);
        assert_eq!(
            kinds(&scan),
            vec![
                (SpanKind::Normal, "s = "),
                (SpanKind::String, "\"hi\""),
                (SpanKind::Normal, "; c = "),
                (SpanKind::String, "'x'"),
                (SpanKind::Normal, ";"),
            ]
        );
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let line = r#""abc\"def" + x"#;
        let scan = scan_line(line, false, false);
        assert_eq!(
            kinds(&scan),
            vec![(SpanKind::String, r#""abc\"def""#), (SpanKind::Normal, " + x")]
        );
    }

    #[test]
    fn test_escaped_backslash_before_quote() {
        // `\\"` : the backslash is escaped, so the quote closes the string.
        let line = r#""a\\" b"#;
        let scan = scan_line(line, false, false);
        assert_eq!(
            kinds(&scan),
            vec![(SpanKind::String, r#""a\\""#), (SpanKind::Normal, " b")]
        );

        let line = r#""a\\\" b"#;
        let scan = scan_line(line, false, false);
        assert_eq!(kinds(&scan), vec![(SpanKind::Error, line)]);
    }

    #[test]
    fn test_unterminated_string() {
        let scan = scan_line("x = \"unterminated", false, false);
        assert_eq!(
            kinds(&scan),
            vec![(SpanKind::Normal, "x = "), (SpanKind::Error, "\"unterminated")]
        );
        assert_eq!(scan.spans.iter().filter(|s| s.kind == SpanKind::Error).count(), 1);
        assert!(!scan.ends_in_comment);
    }

    #[test]
    fn test_strings_hide_comment_markers() {
        let scan = scan_line(r#"p = "/* not a comment";"#, false, false);
        assert!(!scan.ends_in_comment);
        assert!(scan.spans.iter().all(|s| s.kind != SpanKind::Comment));
    }

    #[test]
    fn test_comments_hide_quotes() {
        let scan = scan_line(r#"/* "unterminated */ x"#, false, false);
        assert_eq!(
            kinds(&scan),
            vec![(SpanKind::Comment, r#"/* "unterminated */"#), (SpanKind::Normal, " x")]
        );
    }

    #[test]
    fn test_shell_comments() {
        let scan = scan_line("x = 1 # note /*", false, true);
        assert_eq!(
            kinds(&scan),
            vec![(SpanKind::Normal, "x = 1 "), (SpanKind::Comment, "# note /*")]
        );
        assert!(!scan.ends_in_comment);

        // Without shell comment support `#` is ordinary text.
        let scan = scan_line("#include <stdio.h>", false, false);
        assert_eq!(kinds(&scan), vec![(SpanKind::Normal, "#include <stdio.h>")]);
    }

    #[test]
    fn test_non_ascii_text() {
        let line = "s = \"héllo\"; /* ünïcode */ π";
        let scan = scan_line(line, false, false);
        assert_eq!(concat(&scan.spans), line);
        assert_eq!(scan.spans[1].text, "\"héllo\"");
        assert_eq!(scan.spans[3].text, "/* ünïcode */");
    }

    #[test]
    fn test_state_only_matches_full_scan() {
        let lines = [
            "",
            "/* a",
            "a */ b /* c",
            "\"/*\" x",
            "// /*",
            "'*/' /*",
            "x /*/",
            "# /*",
        ];
        for line in lines {
            for starts in [false, true] {
                for shell in [false, true] {
                    assert_eq!(
                        line_ends_commented(line, starts, shell),
                        scan_line(line, starts, shell).ends_in_comment,
                        "line {:?} starts {} shell {}",
                        line,
                        starts,
                        shell
                    );
                }
            }
        }
    }
}
