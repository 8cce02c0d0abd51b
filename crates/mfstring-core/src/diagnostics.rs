//! Warning sinks for recoverable decoding.
//!
//! In recoverable mode every malformed construct is downgraded to a warning
//! and handed to a [`DiagnosticSink`]. The codec itself does not choose where
//! warnings end up; [`decode`](crate::list::decode) uses [`TracingSink`], and
//! [`decode_with`](crate::list::decode_with) accepts any sink.

use crate::error::ListEncodingError;

/// Receives warnings produced by recoverable decoding.
pub trait DiagnosticSink {
    fn warn(&mut self, warning: &ListEncodingError);
}

/// Emits each warning as a `tracing` event at WARN level, target `mfstring`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&mut self, warning: &ListEncodingError) {
        tracing::warn!(target: "mfstring", offset = warning.offset(), "{}", warning);
    }
}

/// Discards warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&mut self, _warning: &ListEncodingError) {}
}

/// Collects warnings in order for later inspection.
impl DiagnosticSink for Vec<ListEncodingError> {
    fn warn(&mut self, warning: &ListEncodingError) {
        self.push(warning.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn warn(&mut self, warning: &ListEncodingError) {
        (**self).warn(warning);
    }
}
