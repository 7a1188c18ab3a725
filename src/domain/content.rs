//! Invariants for content records entering the pipeline.

use aviators_seo_types::ContentRecord;

use crate::domain::{error::DomainError, slug::check_url_safe};

/// Reject slugs that cannot be used verbatim in a canonical URL.
pub fn ensure_valid_slug(slug: &str) -> Result<(), DomainError> {
    check_url_safe(slug).map_err(|reason| DomainError::invalid_slug(slug, reason))
}

/// Check the ingestion invariants of a record. All other fields degrade to
/// fallbacks inside the pipeline and are not checked here.
pub fn ensure_valid_record(record: &ContentRecord) -> Result<(), DomainError> {
    ensure_valid_slug(&record.slug)
}
