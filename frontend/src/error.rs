use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from the browser APIs the page wires up at runtime.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandingError {
    #[error("no global window object available")]
    NoWindow,

    #[error("failed to register `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },

    #[error("failed to create intersection observer: {0}")]
    Observer(String),

    #[error("observed element is not mounted")]
    NotMounted,
}

/// Best-effort message for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type Result<T> = std::result::Result<T, LandingError>;
