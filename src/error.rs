use thiserror::Error;

/// Failures surfaced while wiring the page or driving the native module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("no demo button at index {0}")]
    UnknownButton(usize),
    #[error("no slider at index {0}")]
    UnknownSlider(usize),
    #[error("native module does not export `{0}`")]
    MissingExport(String),
    #[error("native call `{name}` failed: {message}")]
    NativeCall { name: String, message: String },
    #[error("dom operation failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, PageError>;
