//! WASM bindings for mfstring-core.
//!
//! Exposes `encode`, `decode`, `slashEncode`, and `slashDecode` to
//! JavaScript/TypeScript, e.g. for X3D scenes edited in the browser.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p mfstring-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/mfstring_wasm.wasm
//! ```
//!
//! Lenient-mode warnings are emitted as `tracing` events; install a
//! wasm-aware subscriber in the host crate to see them in the console.

use mfstring_core::{DecodeOptions, Strictness, TracingSink};
use wasm_bindgen::prelude::*;

/// Encode an array of strings as MFString text.
#[wasm_bindgen]
pub fn encode(items: Vec<String>) -> String {
    mfstring_core::encode(&items)
}

/// Decode MFString text into an array of strings.
///
/// With `strict` set, malformed input throws a JS error. Otherwise malformed
/// items are skipped and the remaining items are returned.
#[wasm_bindgen]
pub fn decode(text: &str, strict: bool) -> Result<Vec<String>, JsValue> {
    let options = DecodeOptions::from(Strictness::from_strict_flag(strict));
    mfstring_core::decode_with(text, &options, &mut TracingSink)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Escape backslashes and double quotes in a single item.
#[wasm_bindgen(js_name = slashEncode)]
pub fn slash_encode(item: &str) -> String {
    mfstring_core::slash_encode(item)
}

/// Reverse `slashEncode`; throws on a malformed escape.
#[wasm_bindgen(js_name = slashDecode)]
pub fn slash_decode(text: &str) -> Result<String, JsValue> {
    mfstring_core::slash_decode(text).map_err(|e| JsValue::from_str(&e.to_string()))
}
