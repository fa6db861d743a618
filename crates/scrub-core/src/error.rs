use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedactError {
    #[error("separator must not be empty")]
    EmptySeparator,

    #[error("invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, RedactError>;
