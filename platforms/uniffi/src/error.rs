use nativelib_core::config::ConfigError;
use nativelib_core::{HandleError, ProxyError};
use thiserror::Error;

#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum BindingError {
    #[error("Invalid native handle: `{0}`")]
    InvalidHandle(String),
    #[error("Config validation error: `{0}`")]
    ConfigValidationError(String),
    #[error("Unknown error: `{0}`")]
    Unknown(String),
}

impl From<HandleError> for BindingError {
    fn from(error: HandleError) -> Self {
        Self::InvalidHandle(error.to_string())
    }
}

impl From<ProxyError> for BindingError {
    fn from(error: ProxyError) -> Self {
        match error {
            ProxyError::InvalidHandle(error) => error.into(),
        }
    }
}

impl From<ConfigError> for BindingError {
    fn from(error: ConfigError) -> Self {
        Self::ConfigValidationError(error.to_string())
    }
}
