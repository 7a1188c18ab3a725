use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("slug `{slug}` is not URL-safe: {reason}")]
    InvalidSlug { slug: String, reason: &'static str },
    #[error("domain validation failed: {message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn invalid_slug(slug: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidSlug {
            slug: slug.into(),
            reason,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
