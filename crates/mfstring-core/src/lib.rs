//! # mfstring-core
//!
//! Encoder and decoder for the X3D **MFString** field encoding.
//!
//! An MFString is an ordered list of strings written as one line of
//! double-quoted items separated by spaces. Inside an item, backslash and
//! double quote are escaped with a backslash. The resulting text is meant to
//! be placed into an XML attribute value; XML-level escaping is the caller's
//! job.
//!
//! ## Quick start
//!
//! ```rust
//! use mfstring_core::{decode, encode, Strictness};
//!
//! let text = encode(["apple", r#"say "hi""#]);
//! assert_eq!(text, r#""apple" "say \"hi\"""#);
//!
//! let back = decode(&text, Strictness::Strict).unwrap();
//! assert_eq!(back, vec!["apple", r#"say "hi""#]);
//! ```
//!
//! ## Modules
//!
//! - [`slash`] — escaping of a single element
//! - [`list`] — list encode/decode, strict and recoverable
//! - [`options`] — `DecodeOptions`, `Strictness`, `UnterminatedPolicy`
//! - [`diagnostics`] — warning sinks for recoverable decoding
//! - [`error`] — `SlashEncodingError`, `ListEncodingError`
//! - [`types`] — `MfString` owned value

pub mod diagnostics;
pub mod error;
pub mod list;
pub mod options;
pub mod slash;
pub mod types;

pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use error::{ListEncodingError, SlashEncodingError, SlashErrorReason};
pub use list::{decode, decode_with, encode};
pub use options::{DecodeOptions, Strictness, UnterminatedPolicy};
pub use slash::{decode as slash_decode, encode as slash_encode};
pub use types::MfString;
