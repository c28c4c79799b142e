//! Splitting free text into rendered lines

/// How a piece of optional text should be laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextLines<'a> {
    /// Nothing to show. Rendered as a single empty paragraph.
    Empty,
    /// One entry per `\n`-separated segment, in original order.
    Lines(Vec<&'a str>),
}

impl TextLines<'_> {
    /// Number of segments that will each be followed by a line break
    pub fn segment_count(&self) -> usize {
        match self {
            TextLines::Empty => 0,
            TextLines::Lines(lines) => lines.len(),
        }
    }
}

/// Split optional text on newlines.
///
/// Absent and empty text both yield [`TextLines::Empty`]. Anything else is
/// split verbatim: no trimming, and consecutive newlines keep their empty
/// segments, so `"\n"` yields two empty lines.
pub fn text_lines(text: Option<&str>) -> TextLines<'_> {
    match text {
        None | Some("") => TextLines::Empty,
        Some(text) => TextLines::Lines(text.split('\n').collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_text_is_empty() {
        assert_eq!(text_lines(None), TextLines::Empty);
        assert_eq!(text_lines(None).segment_count(), 0);
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert_eq!(text_lines(Some("")), TextLines::Empty);
    }

    #[test]
    fn test_splits_in_order() {
        assert_eq!(
            text_lines(Some("a\nb\nc")),
            TextLines::Lines(vec!["a", "b", "c"])
        );
    }

    #[test]
    fn test_single_line() {
        assert_eq!(
            text_lines(Some("no breaks here")),
            TextLines::Lines(vec!["no breaks here"])
        );
    }

    #[test]
    fn test_lone_newline_yields_two_empty_segments() {
        assert_eq!(text_lines(Some("\n")), TextLines::Lines(vec!["", ""]));
    }

    #[test]
    fn test_consecutive_newlines_are_not_collapsed() {
        assert_eq!(
            text_lines(Some("a\n\n\nb\n")),
            TextLines::Lines(vec!["a", "", "", "b", ""])
        );
    }

    #[test]
    fn test_segments_are_not_trimmed() {
        assert_eq!(
            text_lines(Some("  indented\ttab \r\nnext")),
            TextLines::Lines(vec!["  indented\ttab \r", "next"])
        );
    }

    #[test]
    fn test_segment_count_is_newlines_plus_one() {
        for text in ["x", "x\ny", "\n\n", "one\ntwo\nthree\nfour", " \n "] {
            let newlines = text.matches('\n').count();
            assert_eq!(text_lines(Some(text)).segment_count(), newlines + 1);
        }
    }
}
