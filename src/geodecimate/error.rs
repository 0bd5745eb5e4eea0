use std::convert::From;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown command")]
    UnknownCommand,
    #[error("missing argument")]
    MissingArgument,
    #[error("invalid number format")]
    InvalidNumberFormat,
    #[error("io error")]
    IOError,
    #[error("json parse error")]
    JSONParseError,
    #[error("expected a json object")]
    InvalidJSONType,
    /// Shape payload that does not decode into the geometry model.
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    #[error("invalid partition settings: {0}")]
    InvalidSettings(String),
    #[error("partition lookup failed: {0}")]
    PartitionLookup(String),
    #[error("worker thread failed")]
    WorkerFailed,
}

impl From<io::Error> for Error {
    fn from(_: io::Error) -> Self {
        Error::IOError
    }
}

impl From<serde_json::Error> for Error {
    fn from(_: serde_json::Error) -> Self {
        Error::JSONParseError
    }
}
