// Marker span extraction: substring selection bounded by two literal markers.
//
// Positions are character indices, found by first occurrence. A missing marker
// is not an error in the lenient functions: its position becomes -1 and the
// slice arithmetic carries on with it, with negative positions counted from the
// end of the text and everything clamped to its bounds. The result can be an
// empty or oddly cut span. Callers that want a hard failure use the `try_`
// variants, which report `SpanError::MarkerNotFound`.

use thiserror::Error;

/// Sentinel position for a marker that does not occur in the text.
pub const NOT_FOUND: isize = -1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    #[error("marker not found in text: {marker:?}")]
    MarkerNotFound { marker: String },
}

/// Character index of the first occurrence of `marker`, or `NOT_FOUND`.
pub fn find_marker(text: &str, marker: &str) -> isize {
    match text.find(marker) {
        Some(byte_idx) => text[..byte_idx].chars().count() as isize,
        None => NOT_FOUND,
    }
}

/// Slice `text` between two character positions.
///
/// Negative positions count back from the end; out-of-range positions clamp.
/// An empty string comes back when the resolved start is not before the end.
pub fn slice_chars(text: &str, start: isize, end: isize) -> &str {
    let len = text.chars().count() as isize;
    let resolve = |i: isize| -> usize {
        if i < 0 {
            (i + len).max(0) as usize
        } else {
            i.min(len) as usize
        }
    };

    let (start, end) = (resolve(start), resolve(end));
    if start >= end {
        return "";
    }

    let byte_at = |char_idx: usize| -> usize {
        text.char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(text.len())
    };
    &text[byte_at(start)..byte_at(end)]
}

fn char_len(s: &str) -> isize {
    s.chars().count() as isize
}

/// Text after `start_marker` up to (excluding) `end_marker`.
///
/// Used for the fixed collection-body trim.
pub fn between_exclusive<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> &'a str {
    let start = find_marker(text, start_marker);
    let end = find_marker(text, end_marker);
    slice_chars(text, start + char_len(start_marker), end)
}

/// Text after `start_marker` up to and including `end_marker`.
pub fn extract_between<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> &'a str {
    let start = find_marker(text, start_marker);
    let end = find_marker(text, end_marker);
    slice_chars(text, start + char_len(start_marker), end + char_len(end_marker))
}

fn require_markers(text: &str, markers: [&str; 2]) -> Result<(), SpanError> {
    for marker in markers {
        if find_marker(text, marker) == NOT_FOUND {
            return Err(SpanError::MarkerNotFound {
                marker: marker.to_string(),
            });
        }
    }
    Ok(())
}

/// Strict form of [`between_exclusive`].
pub fn try_between_exclusive<'a>(
    text: &'a str,
    start_marker: &str,
    end_marker: &str,
) -> Result<&'a str, SpanError> {
    require_markers(text, [start_marker, end_marker])?;
    Ok(between_exclusive(text, start_marker, end_marker))
}

/// Strict form of [`extract_between`].
pub fn try_extract_between<'a>(
    text: &'a str,
    start_marker: &str,
    end_marker: &str,
) -> Result<&'a str, SpanError> {
    require_markers(text, [start_marker, end_marker])?;
    Ok(extract_between(text, start_marker, end_marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_marker_counts_chars_not_bytes() {
        assert_eq!(find_marker("é fox", "fox"), 2);
        assert_eq!(find_marker("fox", "wolf"), NOT_FOUND);
    }

    #[test]
    fn test_slice_chars_negative_and_clamped() {
        assert_eq!(slice_chars("abcdef", 1, -1), "bcde");
        assert_eq!(slice_chars("abcdef", -3, 100), "def");
        assert_eq!(slice_chars("abcdef", 4, 2), "");
        assert_eq!(slice_chars("abcdef", -100, 2), "ab");
    }

    #[test]
    fn test_extract_between_includes_end_marker() {
        let text = "intro START the fox ran END outro";
        assert_eq!(extract_between(text, "START", "END"), " the fox ran END");
    }

    #[test]
    fn test_between_exclusive_drops_end_marker() {
        let text = "intro START the fox ran END outro";
        assert_eq!(between_exclusive(text, "START", "END"), " the fox ran ");
    }

    #[test]
    fn test_missing_start_marker_degenerates() {
        // start = -1 + 5 = 4, so the slice begins at char index 4.
        let text = "abcdefgh END xyz";
        assert_eq!(extract_between(text, "START", "END"), "efgh END");
    }

    #[test]
    fn test_missing_end_marker_degenerates() {
        // end = -1 + 3 = 2, which lies before the start: empty span.
        let text = "START the fox";
        assert_eq!(extract_between(text, "START", "END"), "");
        // Exclusive variant: end = -1, i.e. everything but the last char.
        assert_eq!(between_exclusive(text, "START", "END"), " the fo");
    }

    #[test]
    fn test_try_variants_report_missing_marker() {
        let err = try_extract_between("START only", "START", "END").unwrap_err();
        assert_eq!(
            err,
            SpanError::MarkerNotFound {
                marker: "END".to_string()
            }
        );
        assert!(try_between_exclusive("a START b END", "START", "END").is_ok());
    }
}
