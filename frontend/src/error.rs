use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring a controller to the browser.
///
/// None of these are fatal: the caller logs them and leaves the controller
/// in its idle state.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
    #[error("failed to register global stylesheet: {0}")]
    Style(String),
}

impl PlatformError {
    pub fn observer(value: JsValue) -> Self {
        PlatformError::Observer(format!("{:?}", value))
    }
}
