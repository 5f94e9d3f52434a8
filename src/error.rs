use lightcast::config::ConfigError;
use wasm_bindgen::JsValue;

/// Setup failures reported back to the page from `start`.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a <canvas>")]
    NotACanvas(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A `web_sys` call threw.
    #[error("browser call failed: {0:?}")]
    Js(JsValue),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        match err {
            HostError::Js(value) => value,
            other => JsValue::from_str(&other.to_string()),
        }
    }
}
