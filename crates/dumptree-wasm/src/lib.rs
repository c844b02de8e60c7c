//! WASM bindings for dumptree-core.
//!
//! A browser viewer calls `parse` once per input panel and renders the JSON
//! it gets back.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p dumptree-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/dumptree_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Parse a dump and return the tree as compact JSON.
///
/// Empty input yields `"null"`. Throws a JS error only if rendering fails.
#[wasm_bindgen]
pub fn parse(text: &str) -> std::result::Result<String, JsValue> {
    dumptree_core::parse_to_json(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a dump and return the tree as indented JSON.
#[wasm_bindgen]
pub fn parse_pretty(text: &str) -> std::result::Result<String, JsValue> {
    let tree = dumptree_core::parse(text);
    dumptree_core::to_json_pretty(&tree).map_err(|e| JsValue::from_str(&e.to_string()))
}
