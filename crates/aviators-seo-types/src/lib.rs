//! Wire types shared between the SEO pipeline and its collaborators.
//!
//! The CMS produces [`ContentRecord`] values; the page renderer consumes
//! [`SeoMetadata`], the editorial dashboard consumes [`SeoReport`] and the
//! sitemap route consumes [`SitemapEntry`]. Field names follow the camelCase
//! convention of the CMS documents.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Content record as fetched from the CMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub slug: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
    /// Courses the article promotes. The CMS stores a single reference under
    /// `primaryCourseTarget`; lists are accepted as well.
    #[serde(
        default,
        alias = "primaryCourseTarget",
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub primary_course_targets: Vec<CourseTarget>,
    #[serde(default)]
    pub featured: bool,
    /// Full article body (HTML or markdown) when the CMS projection includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ContentRecord {
    /// Minimal record with every optional field absent.
    pub fn new(
        title: impl Into<String>,
        excerpt: impl Into<String>,
        slug: impl Into<String>,
        published_at: OffsetDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            excerpt: excerpt.into(),
            slug: slug.into(),
            tags: Vec::new(),
            focus_keyword: None,
            category: None,
            author: None,
            image: None,
            published_at,
            updated_at: None,
            primary_course_targets: Vec::new(),
            featured: false,
            body: None,
        }
    }

    /// The focus keyword when it carries any non-whitespace text.
    pub fn focus_keyword(&self) -> Option<&str> {
        self.focus_keyword
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
    }

    /// Last modification time, falling back to the publication time.
    pub fn last_modified(&self) -> OffsetDateTime {
        self.updated_at.unwrap_or(self.published_at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub asset_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseTarget {
    pub name: String,
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
        OneOrMany::Null(()) => Vec::new(),
    })
}

/// Complete page metadata for a post or listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    /// schema.org JSON-LD, embedded verbatim by the page renderer.
    pub structured_data: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenGraphType {
    Article,
    Website,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: OpenGraphType,
    pub url: String,
    pub images: Vec<OpenGraphImage>,
    pub site_name: String,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub published_time: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_time: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardType {
    Summary,
    SummaryLargeImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCard {
    pub card: TwitterCardType,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

/// Field a validation finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueField {
    Title,
    Description,
    Keywords,
    OpenGraphImage,
}

/// Classification of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    TooLong,
    TooShort,
    NoKeywords,
    TooManyKeywords,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: IssueField,
    pub kind: IssueKind,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
        }
    }
}

/// Editorial score for a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub score: u8,
    pub metadata: SeoMetadata,
    pub validation: ValidationResult,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_course_target_under_cms_name() {
        let json = r#"{
            "title": "CPL Ground School",
            "slug": "cpl-ground-school",
            "publishedAt": "2025-07-25T03:49:16Z",
            "primaryCourseTarget": { "name": "CPL Ground Classes" }
        }"#;

        let record: ContentRecord = serde_json::from_str(json).expect("record parses");
        assert_eq!(
            record.primary_course_targets,
            vec![CourseTarget {
                name: "CPL Ground Classes".into()
            }]
        );
        assert!(record.excerpt.is_empty());
        assert!(!record.featured);
    }

    #[test]
    fn accepts_course_target_lists_and_null() {
        let json = r#"{
            "slug": "atpl",
            "publishedAt": "2025-07-25T03:49:16Z",
            "primaryCourseTargets": [{ "name": "ATPL Theory" }, { "name": "Type Rating" }]
        }"#;
        let record: ContentRecord = serde_json::from_str(json).expect("record parses");
        assert_eq!(record.primary_course_targets.len(), 2);

        let json = r#"{
            "slug": "atpl",
            "publishedAt": "2025-07-25T03:49:16Z",
            "primaryCourseTarget": null
        }"#;
        let record: ContentRecord = serde_json::from_str(json).expect("record parses");
        assert!(record.primary_course_targets.is_empty());
    }

    #[test]
    fn blank_focus_keyword_is_treated_as_absent() {
        let mut record = ContentRecord::new(
            "Title",
            "Excerpt",
            "title",
            time::macros::datetime!(2025-01-01 00:00 UTC),
        );
        record.focus_keyword = Some("   ".into());
        assert_eq!(record.focus_keyword(), None);

        record.focus_keyword = Some(" DGCA exam ".into());
        assert_eq!(record.focus_keyword(), Some("DGCA exam"));
    }
}
