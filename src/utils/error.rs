use crate::domain::model::StageResponse;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    ConfigFileError(#[from] toml::de::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("missing field '{field}'")]
    MissingField { field: String },

    #[error("Store error: {message}")]
    StoreError { message: String },
}

/// Machine-readable classification of an [`IngestError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidInput,
    MissingField,
    Store,
    Config,
    Internal,
}

impl IngestError {
    pub fn code(&self) -> ErrorCode {
        match self {
            IngestError::InvalidInput { .. } => ErrorCode::InvalidInput,
            IngestError::MissingField { .. } => ErrorCode::MissingField,
            IngestError::StoreError { .. } => ErrorCode::Store,
            IngestError::MissingConfigError { .. }
            | IngestError::InvalidConfigValueError { .. }
            | IngestError::ConfigFileError(_) => ErrorCode::Config,
            IngestError::IoError(_) | IngestError::SerializationError(_) => ErrorCode::Internal,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        IngestError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        IngestError::MissingField {
            field: field.into(),
        }
    }

    /// Renders the error as the wire response a stage hands back to its caller.
    ///
    /// Malformed input maps to the `{"result": "invalid"}` sentinel, everything
    /// else to a 500 status carrying the error text.
    pub fn into_response(self) -> StageResponse {
        match self.code() {
            ErrorCode::InvalidInput => StageResponse::Invalid,
            _ => StageResponse::failure(&self),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
