use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser capabilities the motion layer is driven by.
/// None of these reach the visitor: callers log them and fall back to a
/// static rendering.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("javascript error: {0}")]
    Js(String),
}

impl DomError {
    pub fn js(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
