use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("no score record to classify")]
    NoRecord,

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
