//! Error types for the student page
//!
//! Every failure is terminal for the user action that caused it; nothing is
//! retried automatically.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level error type for page operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    /// A DOM element the page depends on is not present
    #[error("Missing required element: {0}")]
    MissingElement(String),

    /// The logout CSRF holder (or its `data-csrf` attribute) is absent
    #[error("CSRF token container not found. Logout will fail.")]
    MissingCsrfToken,

    /// The request never completed (offline, CORS, aborted...)
    #[error("Network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Network response failed with status {0}")]
    HttpStatus(u16),

    /// The response body did not match the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Markup template failed to compile or render
    #[error("Template rendering failed: {0}")]
    Template(String),

    /// Any other JavaScript exception surfaced through web-sys
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl UiError {
    /// Wrap a thrown JavaScript value
    pub fn from_js(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(msg)
    }
}

impl From<mustache::Error> for UiError {
    fn from(err: mustache::Error) -> Self {
        UiError::Template(err.to_string())
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_csrf_message() {
        assert_eq!(
            UiError::MissingCsrfToken.to_string(),
            "CSRF token container not found. Logout will fail."
        );
    }

    #[test]
    fn test_status_message_includes_code() {
        assert!(UiError::HttpStatus(503).to_string().contains("503"));
    }
}
