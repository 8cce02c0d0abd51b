//! # mfstring-python
//!
//! Python bindings for the X3D MFString encoder/decoder, built with PyO3.
//!
//! Exposes the following to Python as the `x3d_mfstring` module:
//!
//! - `encode(items)` -- list of str -> MFString text
//! - `decode(text, strict=True, keep_partial=False)` -- MFString text -> list of str
//! - `slash_encode(item)` / `slash_decode(text)` -- single-item escaping
//! - `SlashEncodingError`, `ListEncodingError` -- both subclass `ValueError`
//!
//! Warnings from non-strict decoding are sent to the standard `logging`
//! logger named `x3d-toolbox.mfstring`.

use mfstring_core::{DecodeOptions, Strictness, UnterminatedPolicy};
use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

create_exception!(
    x3d_mfstring,
    SlashEncodingError,
    PyValueError,
    "Raised when a string cannot be slash-decoded."
);
create_exception!(
    x3d_mfstring,
    ListEncodingError,
    PyValueError,
    "Raised when a string cannot be decoded as an MFString list."
);

const LOGGER_NAME: &str = "x3d-toolbox.mfstring";

/// Encode a list of strings as MFString text.
///
/// Args:
///     items: A list of strings.
///
/// Returns:
///     Quoted, space-separated, slash-encoded text.
#[pyfunction]
fn encode(items: Vec<String>) -> String {
    mfstring_core::encode(&items)
}

/// Decode MFString text into a list of strings.
///
/// Args:
///     text: MFString text, after XML attribute-value normalization.
///     strict: Raise on malformed input. When False, malformed items are
///         logged as warnings and skipped.
///     keep_partial: In non-strict mode, keep an unterminated final item if
///         its content decodes.
///
/// Returns:
///     The decoded list of strings.
///
/// Raises:
///     ListEncodingError: In strict mode, if the text is malformed.
#[pyfunction]
#[pyo3(signature = (text, strict=true, keep_partial=false))]
fn decode(py: Python<'_>, text: &str, strict: bool, keep_partial: bool) -> PyResult<Vec<String>> {
    let unterminated = if keep_partial {
        UnterminatedPolicy::KeepPartial
    } else {
        UnterminatedPolicy::Drop
    };
    let options = DecodeOptions {
        strictness: Strictness::from_strict_flag(strict),
        unterminated,
    };

    let mut warnings = Vec::new();
    let items = mfstring_core::decode_with(text, &options, &mut warnings)
        .map_err(|e| ListEncodingError::new_err(e.to_string()))?;

    if !warnings.is_empty() {
        let logger = PyModule::import(py, "logging")?.call_method1("getLogger", (LOGGER_NAME,))?;
        for warning in &warnings {
            logger.call_method1("warning", (warning.to_string(),))?;
        }
    }
    Ok(items)
}

/// Escape backslashes and double quotes in a single string.
#[pyfunction]
fn slash_encode(item: &str) -> String {
    mfstring_core::slash_encode(item)
}

/// Reverse `slash_encode`.
///
/// Raises:
///     SlashEncodingError: If a backslash is followed by anything other than
///         a backslash or double quote, or the text ends on a backslash.
#[pyfunction]
fn slash_decode(text: &str) -> PyResult<String> {
    mfstring_core::slash_decode(text).map_err(|e| SlashEncodingError::new_err(e.to_string()))
}

/// The `x3d_mfstring` Python module, implemented in Rust via PyO3.
#[pymodule]
fn x3d_mfstring(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(slash_encode, m)?)?;
    m.add_function(wrap_pyfunction!(slash_decode, m)?)?;
    m.add("SlashEncodingError", m.py().get_type::<SlashEncodingError>())?;
    m.add("ListEncodingError", m.py().get_type::<ListEncodingError>())?;
    Ok(())
}
