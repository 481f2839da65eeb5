//! Source range resolution — exact substring extraction for a diagnostic
//! span.
//!
//! Pure function of the source text and the range. Offsets are counted in
//! characters, never bytes, and any index beyond the actual text is an
//! error rather than a silent truncation: a clamped excerpt would read as
//! confidently wrong in a feedback message.

use warden_core::diagnostics::Range;
use warden_core::error::CheckError;

/// Extract the exact source text `range` refers to.
///
/// Single-line ranges return the slice of that line between the two
/// character offsets. Multi-line ranges return the start line from
/// `start.character` to end-of-line, every whole line strictly between,
/// and the end line up to `end.character`, joined by newline.
pub fn resolve_text(content: &str, range: &Range) -> std::result::Result<String, CheckError> {
    if range.is_backwards() {
        return Err(CheckError::RangeOutOfBounds {
            line: range.end.line,
            character: range.end.character,
            detail: "range end precedes range start".into(),
        });
    }

    let lines: Vec<&str> = content.lines().collect();
    let start_line = line_at(&lines, range.start.line)?;
    let end_line = line_at(&lines, range.end.line)?;

    if range.is_single_line() {
        let from = byte_offset(start_line, range.start.line, range.start.character)?;
        let to = byte_offset(start_line, range.end.line, range.end.character)?;
        return Ok(start_line[from..to].to_string());
    }

    let mut parts = Vec::with_capacity((range.end.line - range.start.line + 1) as usize);
    let from = byte_offset(start_line, range.start.line, range.start.character)?;
    parts.push(&start_line[from..]);
    for line in (range.start.line + 1)..range.end.line {
        parts.push(lines[line as usize]);
    }
    let to = byte_offset(end_line, range.end.line, range.end.character)?;
    parts.push(&end_line[..to]);
    Ok(parts.join("\n"))
}

fn line_at<'a>(lines: &[&'a str], line: u32) -> std::result::Result<&'a str, CheckError> {
    lines
        .get(line as usize)
        .copied()
        .ok_or_else(|| CheckError::RangeOutOfBounds {
            line,
            character: 0,
            detail: format!("file has only {} lines", lines.len()),
        })
}

/// Byte offset of the `character`-th char of `text`. `character` may equal
/// the line's char count (end-of-line); anything past that is an error.
fn byte_offset(text: &str, line: u32, character: u32) -> std::result::Result<usize, CheckError> {
    let want = character as usize;
    let mut seen = 0usize;
    for (offset, _) in text.char_indices() {
        if seen == want {
            return Ok(offset);
        }
        seen += 1;
    }
    if seen == want {
        return Ok(text.len());
    }
    Err(CheckError::RangeOutOfBounds {
        line,
        character,
        detail: format!("line has only {seen} characters"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_core::diagnostics::Position;

    const FIXTURE: &str = "def guard(history, api, booking_id):\n    booking = api.fetch(booking_id)\n    if booking is None:\n        raise PolicyViolation(\"unknown booking\")\n    return None\n";

    fn range(sl: u32, sc: u32, el: u32, ec: u32) -> Range {
        Range {
            start: Position { line: sl, character: sc },
            end: Position { line: el, character: ec },
        }
    }

    #[test]
    fn single_line_span() {
        let text = resolve_text(FIXTURE, &range(1, 14, 1, 35)).unwrap();
        assert_eq!(text, "api.fetch(booking_id)");
    }

    #[test]
    fn single_line_empty_span() {
        let text = resolve_text(FIXTURE, &range(0, 4, 0, 4)).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn span_to_end_of_line() {
        let text = resolve_text(FIXTURE, &range(2, 4, 2, 23)).unwrap();
        assert_eq!(text, "if booking is None:");
    }

    #[test]
    fn two_line_span() {
        let text = resolve_text(FIXTURE, &range(2, 4, 3, 8)).unwrap();
        assert_eq!(text, "if booking is None:\n        ");
    }

    #[test]
    fn three_line_span_keeps_whole_middle_line() {
        let text = resolve_text(FIXTURE, &range(1, 4, 3, 13)).unwrap();
        assert_eq!(
            text,
            "booking = api.fetch(booking_id)\n    if booking is None:\n        raise"
        );
    }

    #[test]
    fn line_past_end_of_file_rejects() {
        let err = resolve_text(FIXTURE, &range(9, 0, 9, 4)).unwrap_err();
        assert!(matches!(err, CheckError::RangeOutOfBounds { line: 9, .. }));
        assert!(err.to_string().contains("only 5 lines"));
    }

    #[test]
    fn character_past_end_of_line_rejects() {
        let err = resolve_text(FIXTURE, &range(4, 0, 4, 200)).unwrap_err();
        assert!(matches!(
            err,
            CheckError::RangeOutOfBounds { character: 200, .. }
        ));
    }

    #[test]
    fn character_at_end_of_line_is_allowed() {
        // "    return None" is 15 characters; offset 15 is end-of-line.
        let text = resolve_text(FIXTURE, &range(4, 4, 4, 15)).unwrap();
        assert_eq!(text, "return None");
    }

    #[test]
    fn backwards_range_rejects() {
        let err = resolve_text(FIXTURE, &range(1, 20, 1, 4)).unwrap_err();
        assert!(matches!(err, CheckError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        let content = "précondition = \"réservée\"\n";
        let text = resolve_text(content, &range(0, 0, 0, 12)).unwrap();
        assert_eq!(text, "précondition");
    }
}
