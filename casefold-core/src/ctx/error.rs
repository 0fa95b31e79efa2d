use thiserror::Error as ThisError;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum RequestRejectError {
    #[error("invalid request path")]
    InvalidPath,

    #[error("request path is not valid UTF-8 once decoded")]
    InvalidPathEncoding,
}
