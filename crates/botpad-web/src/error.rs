//! Errors raised by the browser layer
//!
//! Everything ends up as a thrown JS `Error` at the wasm boundary. The error's
//! `name` tells callers which kind of failure it was.

use botpad_core::WidgetError;
use wasm_bindgen::JsValue;

/// Errors from building widgets in the DOM
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Rejected by the core (bad config, missing container, bad direction)
    #[error(transparent)]
    Widget(#[from] WidgetError),

    /// The browser refused a DOM operation
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The JS config object could not be read as a joystick config
    #[error("invalid joystick config: {0}")]
    InvalidConfig(String),
}

impl WebError {
    /// Shorthand for a missing container
    pub fn missing_container(parent_id: &str) -> Self {
        WebError::Widget(WidgetError::MissingContainer(parent_id.to_string()))
    }

    /// `name` property of the thrown JS error
    pub fn js_name(&self) -> &'static str {
        match self {
            WebError::Widget(WidgetError::Configuration { .. }) => "ConfigurationError",
            WebError::Widget(WidgetError::MissingContainer(_)) => "MissingContainerError",
            WebError::Widget(WidgetError::UnknownDirection(_)) => "UnknownDirectionError",
            WebError::Dom(_) => "DomError",
            WebError::InvalidConfig(_) => "ConfigurationError",
        }
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        WebError::Dom(message)
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        let js_err = js_sys::Error::new(&err.to_string());
        js_err.set_name(err.js_name());
        js_err.into()
    }
}
