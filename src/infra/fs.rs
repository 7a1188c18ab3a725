//! Filesystem adapters for JSON inputs and generated markdown posts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use aviators_seo_types::ContentRecord;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::application::{
    drafts::{DraftPost, PopulatedPost, render_front_matter},
    error::AppError,
};
use crate::domain::content::{ensure_valid_record, ensure_valid_slug};

use super::error::InfraError;

pub const POST_EXTENSION: &str = "md";

/// Read one content record and check its ingestion invariants.
pub fn read_record(path: &Path) -> Result<ContentRecord, AppError> {
    let record: ContentRecord = read_json(path)?;
    ensure_valid_record(&record)?;
    Ok(record)
}

/// Read a JSON array of content records; a single object is accepted too.
pub fn read_records(path: &Path) -> Result<Vec<ContentRecord>, AppError> {
    let value: serde_json::Value = read_json(path)?;
    let records = if value.is_array() {
        serde_json::from_value::<Vec<ContentRecord>>(value)
    } else {
        serde_json::from_value::<ContentRecord>(value).map(|record| vec![record])
    }
    .map_err(|err| InfraError::serialization(path.display().to_string(), err))?;

    for record in &records {
        ensure_valid_record(record)?;
    }
    debug!(path = %path.display(), count = records.len(), "loaded content records");
    Ok(records)
}

pub fn read_draft(path: &Path) -> Result<DraftPost, AppError> {
    Ok(read_json(path)?)
}

/// Path the post for `slug` is written to inside `dir`.
pub fn post_path(dir: &Path, slug: &str) -> PathBuf {
    dir.join(format!("{slug}.{POST_EXTENSION}"))
}

/// Whether `dir` has no post for `slug` yet.
pub fn slug_available(dir: &Path, slug: &str) -> bool {
    !post_path(dir, slug).exists()
}

/// Render `post` with front matter and write it to `{dir}/{slug}.md`,
/// creating `dir` when needed. Slugs that are not URL-safe are refused so
/// the file always lands inside `dir`.
pub fn write_post(dir: &Path, post: &PopulatedPost) -> Result<PathBuf, AppError> {
    ensure_valid_slug(&post.slug)?;
    let document = render_front_matter(post)?;

    fs::create_dir_all(dir).map_err(|err| InfraError::io(dir.display().to_string(), err))?;
    let path = post_path(dir, &post.slug);
    fs::write(&path, document).map_err(|err| InfraError::io(path.display().to_string(), err))?;

    info!(path = %path.display(), slug = %post.slug, "wrote post");
    Ok(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InfraError> {
    let raw =
        fs::read_to_string(path).map_err(|err| InfraError::io(path.display().to_string(), err))?;
    serde_json::from_str(&raw)
        .map_err(|err| InfraError::serialization(path.display().to_string(), err))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::domain::error::DomainError;

    #[test]
    fn read_records_accepts_single_object() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("record.json");
        fs::write(
            &path,
            r#"{ "title": "CPL", "slug": "cpl", "publishedAt": "2025-01-01T00:00:00Z" }"#,
        )
        .expect("write");

        let records = read_records(&path).expect("records");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "cpl");
    }

    #[test]
    fn invalid_slug_is_rejected_on_read() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("record.json");
        fs::write(
            &path,
            r#"{ "title": "CPL", "slug": "CPL Guide", "publishedAt": "2025-01-01T00:00:00Z" }"#,
        )
        .expect("write");

        let err = read_record(&path).expect_err("invalid slug");
        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write");

        let err = read_draft(&path).expect_err("malformed");
        assert!(matches!(
            err,
            AppError::Infra(InfraError::Serialization { .. })
        ));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn write_post_stays_inside_the_output_dir() {
        let root = tempdir().expect("tempdir");
        let output_dir = root.path().join("content").join("blog");
        let draft = DraftPost {
            title: "Night Rating".into(),
            body: "Body about safety.".into(),
            ..DraftPost::default()
        };
        let mut post = crate::application::drafts::populate_draft(
            &crate::application::site::SiteProfile::default(),
            draft,
            time::macros::datetime!(2025-06-01 09:00 UTC),
            |_| true,
        )
        .expect("populated");
        post.slug = "../../escaped Slug".into();

        let err = write_post(&output_dir, &post).expect_err("unsafe slug");
        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidSlug { .. })
        ));
        assert!(!root.path().join("escaped Slug.md").exists());
        assert!(!output_dir.exists());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("tempdir");
        let err = read_record(&dir.path().join("absent.json")).expect_err("missing");
        assert!(matches!(err, AppError::Infra(InfraError::Io { .. })));
    }
}
