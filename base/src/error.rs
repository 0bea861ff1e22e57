use redis::RedisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EgovError {
    #[error("InvalidParameter({0})")]
    InvalidParameter(String),
    #[error("ParseError({0})")]
    ParseError(String),
    #[error("NotFound({0})")]
    NotFound(String),
    #[error("AlreadyExists({0})")]
    AlreadyExists(String),
    #[error("Validation({code}: {message})")]
    Validation { code: String, message: String },
    #[error("serde_json error({0:?})")]
    SerdeJsonError(serde_json::error::Error),
    #[error("RedisError({0:?})")]
    RedisError(RedisError),
    #[error("ReqwestError({0:?})")]
    ReqwestError(reqwest::Error),
    #[error("RuntimeError({0})")]
    RuntimeError(String),
    #[error("OtherError({0})")]
    OtherError(String),
}

impl EgovError {
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        EgovError::Validation {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns true for failures the caller caused (bad input, uniqueness
    /// violations), as opposed to collaborator or runtime faults.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EgovError::InvalidParameter(_)
                | EgovError::NotFound(_)
                | EgovError::AlreadyExists(_)
                | EgovError::Validation { .. }
        )
    }
}

impl From<RedisError> for EgovError {
    fn from(e: RedisError) -> Self {
        EgovError::RedisError(e)
    }
}
impl From<serde_json::Error> for EgovError {
    fn from(e: serde_json::Error) -> Self {
        EgovError::SerdeJsonError(e)
    }
}
impl From<reqwest::Error> for EgovError {
    fn from(e: reqwest::Error) -> Self {
        EgovError::ReqwestError(e)
    }
}
