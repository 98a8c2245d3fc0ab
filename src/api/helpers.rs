//! Shared helpers for the JavaScript-facing API
//!
//! Serialization across the wasm boundary with errors logged before they
//! are handed back to JavaScript.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::PageConfig;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Page configuration from an optional JS object; missing fields keep their
/// defaults
pub fn config_from_js(value: JsValue) -> Result<PageConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(PageConfig::default());
    }
    deserialize(value, "Invalid page configuration")
}
