use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("invalid redaction config: {0}")]
    Redaction(#[from] scrub_core::RedactError),

    #[error("failed to install logger: {0}")]
    Init(String),
}
