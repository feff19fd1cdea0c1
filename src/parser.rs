//! Line tokenizer and quote-aware field parser for CSV export text.
//!
//! Parsing is best-effort by design: malformed quoting degrades gracefully
//! (no fields lost, no line skipped) and neither function can fail.

/// Split raw export text into logical lines.
///
/// Accepts CR, LF, or CRLF line endings; a CRLF pair is a single boundary.
/// Interior empty lines are preserved as empty slices. Empty input yields
/// zero lines.
pub fn logical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        match bytes[idx] {
            b'\n' => {
                lines.push(&text[start..idx]);
                idx += 1;
                start = idx;
            }
            b'\r' => {
                lines.push(&text[start..idx]);
                idx += 1;
                if idx < bytes.len() && bytes[idx] == b'\n' {
                    idx += 1;
                }
                start = idx;
            }
            _ => idx += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Parse one logical line into an ordered list of fields.
///
/// Character-scan state machine over two states:
/// - unquoted: `"` enters the quoted state, `,` terminates the current
///   field, anything else accumulates;
/// - quoted: `""` emits one literal quote, a lone `"` returns to unquoted,
///   anything else (commas included) accumulates verbatim.
///
/// Every emitted field is trimmed of surrounding whitespace after unquoting.
/// The final accumulator is always emitted at end of line, so unterminated
/// quotes are tolerated. An empty line yields a single empty field.
pub fn parse_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(ch),
            }
        }
    }

    fields.push(current.trim().to_string());
    fields
}
