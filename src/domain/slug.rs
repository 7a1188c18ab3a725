//! Utilities for generating and checking URL slugs.
//!
//! Slugs are derived with the `slug` crate, which transliterates non-ASCII
//! input before lowercasing and hyphenating. Callers that persist files or
//! documents provide a uniqueness predicate so the derivation stays pure.

use slug::slugify;
use thiserror::Error;

const MAX_SUFFIX_ATTEMPTS: usize = 32;

/// Errors that can occur while generating a slug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
    #[error("exhausted attempts to find a unique slug for `{base}`")]
    Exhausted { base: String },
}

/// Derive a base slug from the provided human-readable text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(input);
    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Produce a slug that does not collide according to the supplied predicate.
///
/// The `is_unique` closure must return `true` when the provided slug is free.
/// Collisions are retried with a monotonic suffix (`-2`, `-3`, …).
pub fn generate_unique_slug<F>(input: &str, is_unique: F) -> Result<String, SlugError>
where
    F: FnMut(&str) -> bool,
{
    let base = derive_slug(input)?;
    unique_from_base(base, is_unique)
}

/// Like [`generate_unique_slug`] but starting from an existing slug.
pub fn unique_from_base<F>(base: String, mut is_unique: F) -> Result<String, SlugError>
where
    F: FnMut(&str) -> bool,
{
    if is_unique(&base) {
        return Ok(base);
    }

    for attempt in 2..=MAX_SUFFIX_ATTEMPTS + 1 {
        let candidate = format!("{base}-{attempt}");
        if is_unique(&candidate) {
            return Ok(candidate);
        }
    }

    Err(SlugError::Exhausted { base })
}

/// Check the URL-safety invariant: lowercase ASCII letters, digits and single
/// interior hyphens. Returns the reason the slug is rejected.
pub fn check_url_safe(slug: &str) -> Result<(), &'static str> {
    if slug.is_empty() {
        return Err("slug is empty");
    }
    if !slug
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
    {
        return Err("only lowercase ASCII letters, digits and hyphens are allowed");
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err("slug must not start or end with a hyphen");
    }
    if slug.contains("--") {
        return Err("slug must not contain consecutive hyphens");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_slug_drops_punctuation() {
        let slug = derive_slug("DGCA Exams: What's New in 2025?").expect("slug");
        assert_eq!(slug, "dgca-exams-what-s-new-in-2025");
    }

    #[test]
    fn derive_slug_rejects_blank_input() {
        assert_eq!(derive_slug("   "), Err(SlugError::EmptyInput));
        assert!(matches!(
            derive_slug("!!!"),
            Err(SlugError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn generate_unique_slug_appends_counter() {
        let mut existing = vec!["pilot-training".to_string()];
        let slug = generate_unique_slug("Pilot Training", |candidate| {
            if existing.contains(&candidate.to_string()) {
                false
            } else {
                existing.push(candidate.to_string());
                true
            }
        })
        .expect("unique slug");

        assert_eq!(slug, "pilot-training-2");
        assert!(existing.contains(&slug));
    }

    #[test]
    fn generate_unique_slug_exhausted() {
        let result =
            generate_unique_slug("Example", |_| false).expect_err("should exhaust attempts");
        assert_eq!(
            result,
            SlugError::Exhausted {
                base: "example".to_string()
            }
        );
    }

    #[test]
    fn url_safety_checks() {
        assert!(check_url_safe("cpl-ground-school-2025").is_ok());
        assert!(check_url_safe("").is_err());
        assert!(check_url_safe("CPL").is_err());
        assert!(check_url_safe("cpl guide").is_err());
        assert!(check_url_safe("-cpl").is_err());
        assert!(check_url_safe("cpl--guide").is_err());
    }
}
