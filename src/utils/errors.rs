use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider rejected request: {msg}")]
    Provider { msg: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
