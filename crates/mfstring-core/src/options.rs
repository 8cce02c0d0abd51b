//! Decode configuration.
//!
//! Options are plain values passed into each decode call. They derive
//! `serde` traits so a host application can embed them in its own config:
//!
//! ```
//! use mfstring_core::{DecodeOptions, Strictness, UnterminatedPolicy};
//! let opts: DecodeOptions =
//!     serde_json::from_str(r#"{"strictness":"recoverable","unterminated":"keep_partial"}"#).unwrap();
//! assert_eq!(opts.strictness, Strictness::Recoverable);
//! assert_eq!(opts.unterminated, UnterminatedPolicy::KeepPartial);
//! ```

use serde::{Deserialize, Serialize};

/// How the list decoder reacts to malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Fail on the first malformed construct; no partial output.
    #[default]
    Strict,
    /// Report each malformed construct to the diagnostic sink and keep going,
    /// omitting only the affected item.
    Recoverable,
}

impl Strictness {
    /// `true` selects [`Strictness::Strict`], matching the `strict` flag of
    /// the bindings.
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Strictness::Strict
        } else {
            Strictness::Recoverable
        }
    }
}

/// What recoverable decoding does with a final item that is never closed.
///
/// Ignored in strict mode, where an unterminated item is always an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnterminatedPolicy {
    /// Omit the item; only the warning remains.
    #[default]
    Drop,
    /// Slash-decode everything after the opening quote and keep it if that
    /// succeeds. The warning is still emitted.
    KeepPartial,
}

/// Options for [`decode_with`](crate::list::decode_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub strictness: Strictness,
    pub unterminated: UnterminatedPolicy,
}

impl DecodeOptions {
    /// Strict decoding (the default).
    pub fn strict() -> Self {
        Self::default()
    }

    /// Recoverable decoding with the default unterminated-item policy.
    pub fn recoverable() -> Self {
        Self {
            strictness: Strictness::Recoverable,
            ..Self::default()
        }
    }

    pub fn with_unterminated(mut self, policy: UnterminatedPolicy) -> Self {
        self.unterminated = policy;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}

impl From<Strictness> for DecodeOptions {
    fn from(strictness: Strictness) -> Self {
        Self {
            strictness,
            ..Self::default()
        }
    }
}
