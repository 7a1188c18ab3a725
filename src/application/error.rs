use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    domain::{error::DomainError, slug::SlugError},
    infra::error::InfraError,
};

/// Error message chain collected for CLI reporting.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self { source, messages }
    }

    pub fn from_message(source: &'static str, message: impl Into<String>) -> Self {
        Self {
            source,
            messages: vec![message.into()],
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Domain(_) | AppError::Validation(_) => 65,
            AppError::Infra(InfraError::Io { .. }) => 74,
            AppError::Infra(InfraError::Serialization { .. }) => 65,
            AppError::Infra(InfraError::Configuration { .. }) => 78,
            AppError::Infra(InfraError::Telemetry(_)) => 70,
            AppError::Unexpected(_) => 70,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::from_error("application::error::AppError", self)
    }
}

impl From<SlugError> for AppError {
    fn from(error: SlugError) -> Self {
        AppError::Domain(DomainError::validation(error.to_string()))
    }
}
