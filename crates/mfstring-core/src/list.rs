//! List-level MFString codec: a sequence of strings to and from one line of
//! quoted, space-separated, slash-encoded items.
//!
//! ```text
//! ["apple", "say \"hi\""]  <->  "apple" "say \"hi\""
//! ```
//!
//! # Decoding
//!
//! The decoder is a two-state scan over the input:
//!
//! - **Seeking a quote**: item separators (space, comma, newline, carriage
//!   return, tab) are skipped; a `"` opens an item; anything else is malformed.
//! - **Inside an item**: a backslash escapes the next character, so an escaped
//!   `"` does not close the item. An unescaped `"` closes it and the span is
//!   handed to [`slash::decode`]. Whether an escape is actually valid is left
//!   to that call; this scan only needs to find item boundaries.
//!
//! Malformed input is fatal under [`Strictness::Strict`]. Under
//! [`Strictness::Recoverable`] it is reported to a [`DiagnosticSink`] and the
//! offending character or item is skipped.

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::ListEncodingError;
use crate::options::{DecodeOptions, Strictness, UnterminatedPolicy};
use crate::slash::{self, BACKSLASH, QUOTE_MARK};

/// Characters tolerated between items.
pub const ITEM_SEPARATORS: &[char] = &[',', ' ', '\n', '\r', '\t'];

const SPACE: char = ' ';

/// Encode a sequence of strings as MFString text.
///
/// Each item is slash-encoded and wrapped in double quotes; items are joined by
/// a single space. An empty sequence encodes to the empty string.
pub fn encode<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(SPACE);
        }
        out.push(QUOTE_MARK);
        out.push_str(&slash::encode(item.as_ref()));
        out.push(QUOTE_MARK);
    }
    out
}

/// Decode MFString text into its items.
///
/// In recoverable mode warnings are emitted through [`TracingSink`] and
/// unterminated trailing items are dropped. Use [`decode_with`] to pick a
/// different sink or policy.
pub fn decode(text: &str, strictness: Strictness) -> Result<Vec<String>, ListEncodingError> {
    decode_with(text, &DecodeOptions::from(strictness), &mut TracingSink)
}

/// Decode MFString text with explicit options and a caller-supplied sink.
///
/// The sink is only consulted in recoverable mode. In strict mode the first
/// malformed construct is returned as the error.
pub fn decode_with<S>(
    text: &str,
    options: &DecodeOptions,
    sink: &mut S,
) -> Result<Vec<String>, ListEncodingError>
where
    S: DiagnosticSink + ?Sized,
{
    let mut reporter = Reporter { options, sink };
    let mut items = Vec::new();
    let mut state = ScanState::SeekingQuote;

    for (offset, ch) in text.char_indices() {
        state = match state {
            ScanState::SeekingQuote => {
                if ch == QUOTE_MARK {
                    ScanState::InsideItem {
                        start: offset + ch.len_utf8(),
                        escaping: false,
                    }
                } else {
                    if !is_item_separator(ch) {
                        reporter.report(ListEncodingError::UnexpectedCharacter { ch, offset })?;
                    }
                    ScanState::SeekingQuote
                }
            }
            ScanState::InsideItem {
                start,
                escaping: true,
            } => ScanState::InsideItem {
                start,
                escaping: false,
            },
            ScanState::InsideItem {
                start,
                escaping: false,
            } => match ch {
                BACKSLASH => ScanState::InsideItem {
                    start,
                    escaping: true,
                },
                QUOTE_MARK => {
                    match slash::decode(&text[start..offset]) {
                        Ok(item) => items.push(item),
                        Err(source) => reporter.report(ListEncodingError::InvalidItem {
                            offset: start,
                            source,
                        })?,
                    }
                    ScanState::SeekingQuote
                }
                _ => state,
            },
        };
    }

    if let ScanState::InsideItem { start, .. } = state {
        let remainder = &text[start..];
        reporter.report(ListEncodingError::Unterminated {
            offset: start - QUOTE_MARK.len_utf8(),
            remainder: remainder.to_string(),
        })?;
        if options.unterminated == UnterminatedPolicy::KeepPartial {
            match slash::decode(remainder) {
                Ok(item) => items.push(item),
                Err(source) => reporter.report(ListEncodingError::InvalidItem {
                    offset: start,
                    source,
                })?,
            }
        }
    }

    Ok(items)
}

/// Whether `ch` may appear between items without a warning.
pub fn is_item_separator(ch: char) -> bool {
    ITEM_SEPARATORS.contains(&ch)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingQuote,
    /// `start` is the byte offset just past the opening quote.
    InsideItem { start: usize, escaping: bool },
}

/// Applies the strictness policy to a malformed construct.
struct Reporter<'a, S: ?Sized> {
    options: &'a DecodeOptions,
    sink: &'a mut S,
}

impl<S: DiagnosticSink + ?Sized> Reporter<'_, S> {
    /// Fails in strict mode, warns and returns `Ok` in recoverable mode.
    fn report(&mut self, error: ListEncodingError) -> Result<(), ListEncodingError> {
        match self.options.strictness {
            Strictness::Strict => Err(error),
            Strictness::Recoverable => {
                self.sink.warn(&error);
                Ok(())
            }
        }
    }
}
