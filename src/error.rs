use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Malformed tooltip payload: {0}")]
    Payload(String),

    #[error("Tooltip markup does not match {contract}: missing {field}")]
    MarkupShape {
        contract: &'static str,
        field: &'static str,
    },

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
