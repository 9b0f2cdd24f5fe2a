//! Crate-wide error type for surface and widget operations.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

use crate::config::ConfigError;
use crate::template::TemplateError;

/// Error returned by the engine, the DOM surface, and the JS handle.
#[derive(Debug, thiserror::Error)]
pub enum BubbleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// A browser API call threw.
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
    /// The widget is already handling another event.
    #[error("bubble is busy")]
    Busy,
    /// An element had an unexpected type after rendering.
    #[error("unexpected element: {0}")]
    UnexpectedElement(&'static str),
}

impl From<JsValue> for BubbleError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<BubbleError> for JsValue {
    fn from(err: BubbleError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
