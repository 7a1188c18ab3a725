use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("failed to access `{path}`")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse `{path}`")]
    Serialization {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl InfraError {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serialization(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry(message.into())
    }
}
