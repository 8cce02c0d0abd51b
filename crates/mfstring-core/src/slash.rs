//! Slash encoding of a single MFString element (an SFString).
//!
//! Only two characters are reserved inside an element: backslash and double
//! quote. Each is escaped by prefixing one backslash; every other character is
//! copied through unchanged.
//!
//! # Example
//! ```
//! use mfstring_core::{slash_decode, slash_encode};
//! let encoded = slash_encode(r#"say "hi" \o/"#);
//! assert_eq!(encoded, r#"say \"hi\" \\o/"#);
//! assert_eq!(slash_decode(&encoded).unwrap(), r#"say "hi" \o/"#);
//! ```

use crate::error::{SlashEncodingError, SlashErrorReason};

pub(crate) const BACKSLASH: char = '\\';
pub(crate) const QUOTE_MARK: char = '"';

/// Escape every backslash and double quote in `input` with a backslash.
pub fn encode(input: &str) -> String {
    let reserved = input
        .chars()
        .filter(|&c| c == BACKSLASH || c == QUOTE_MARK)
        .count();
    let mut out = String::with_capacity(input.len() + reserved);
    for ch in input.chars() {
        if ch == BACKSLASH || ch == QUOTE_MARK {
            out.push(BACKSLASH);
        }
        out.push(ch);
    }
    out
}

/// Reverse [`encode`].
///
/// Fails if a backslash is followed by anything other than `\` or `"`, or if
/// the input ends on an unescaped backslash.
pub fn decode(input: &str) -> Result<String, SlashEncodingError> {
    let mut out = String::with_capacity(input.len());
    let mut escaping = false;
    // Offset of the backslash that opened the current escape.
    let mut escape_at = 0;

    for (offset, ch) in input.char_indices() {
        if escaping {
            if ch != BACKSLASH && ch != QUOTE_MARK {
                return Err(SlashEncodingError {
                    input: input.to_string(),
                    offset: escape_at,
                    reason: SlashErrorReason::InvalidEscape(ch),
                });
            }
            out.push(ch);
            escaping = false;
        } else if ch == BACKSLASH {
            escaping = true;
            escape_at = offset;
        } else {
            out.push(ch);
        }
    }

    if escaping {
        return Err(SlashEncodingError {
            input: input.to_string(),
            offset: escape_at,
            reason: SlashErrorReason::TrailingBackslash,
        });
    }
    Ok(out)
}
