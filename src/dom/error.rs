use thiserror::Error;
use wasm_bindgen::JsValue;

pub type DomResult<T> = Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window/document")]
    NoWindow,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}
