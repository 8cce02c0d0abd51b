//! Error types for MFString encoding and decoding operations.
//!
//! Encoding never fails. Decoding fails at two levels: inside a single element
//! ([`SlashEncodingError`]) and at the delimiter level of the whole list
//! ([`ListEncodingError`]). All offsets are byte offsets into the decoded input.

use thiserror::Error;

/// Why a slash-encoded element could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashErrorReason {
    /// A backslash was followed by something other than `\` or `"`.
    InvalidEscape(char),
    /// The input ended on an unescaped backslash.
    TrailingBackslash,
}

impl std::fmt::Display for SlashErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlashErrorReason::InvalidEscape(ch) => {
                write!(f, "backslash followed by {:?}", ch)
            }
            SlashErrorReason::TrailingBackslash => f.write_str("trailing unescaped backslash"),
        }
    }
}

/// A single element's escape sequences are malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid slash-encoded value at byte {offset}: {input:?} ({reason})")]
pub struct SlashEncodingError {
    /// The element text that failed to decode.
    pub input: String,
    /// Offset of the offending backslash within `input`.
    pub offset: usize,
    pub reason: SlashErrorReason,
}

/// The MFString text is malformed at the delimiter level.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListEncodingError {
    /// A character other than a quote or an item separator appeared between items.
    #[error("unexpected character {ch:?} between MFString items at byte {offset}")]
    UnexpectedCharacter { ch: char, offset: usize },

    /// A quoted item was delimited correctly but its content is not valid
    /// slash encoding. `offset` is where the item content starts.
    #[error("MFString item at byte {offset} is malformed: {source}")]
    InvalidItem {
        offset: usize,
        #[source]
        source: SlashEncodingError,
    },

    /// An item was opened at `offset` but never closed by an unescaped quote.
    #[error("encoded MFString not terminated by unescaped quote (item opened at byte {offset})")]
    Unterminated { offset: usize, remainder: String },
}

impl ListEncodingError {
    /// Byte offset in the decoded text where the problem was detected.
    pub fn offset(&self) -> usize {
        match self {
            ListEncodingError::UnexpectedCharacter { offset, .. }
            | ListEncodingError::InvalidItem { offset, .. }
            | ListEncodingError::Unterminated { offset, .. } => *offset,
        }
    }
}
