//! Metadata validation and editorial scoring.

use aviators_seo_types::{
    ContentRecord, IssueField, IssueKind, SeoMetadata, SeoReport, ValidationIssue,
    ValidationResult,
};
use metrics::{counter, histogram};
use tracing::{debug, instrument};

use crate::application::{
    keywords::MAX_KEYWORDS,
    metadata::generate_post_metadata,
    site::SiteProfile,
    text::{
        DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS, char_len,
    },
};

pub const METRIC_REPORTS_TOTAL: &str = "aviators_seo_reports_total";
pub const METRIC_REPORT_SCORE: &str = "aviators_seo_report_score";
pub const METRIC_VALIDATION_ISSUES_TOTAL: &str = "aviators_seo_validation_issues_total";

pub const MAX_SCORE: i32 = 100;
pub const MISSING_FOCUS_KEYWORD_PENALTY: i32 = 15;
pub const MISSING_TAGS_PENALTY: i32 = 10;
pub const MISSING_ALT_TEXT_PENALTY: i32 = 5;

/// Score deduction and recommendation prefix per issue kind.
pub trait IssueWeight {
    fn deduction(&self) -> i32;
    fn recommendation_prefix(&self) -> &'static str;
    fn metric_label(&self) -> &'static str;
}

impl IssueWeight for IssueKind {
    fn deduction(&self) -> i32 {
        match self {
            IssueKind::Missing => 20,
            IssueKind::TooLong | IssueKind::TooShort => 10,
            IssueKind::NoKeywords | IssueKind::TooManyKeywords => 5,
        }
    }

    fn recommendation_prefix(&self) -> &'static str {
        match self {
            IssueKind::Missing => "Fix",
            IssueKind::TooLong | IssueKind::TooShort => "Optimize",
            IssueKind::NoKeywords | IssueKind::TooManyKeywords => "Improve",
        }
    }

    fn metric_label(&self) -> &'static str {
        match self {
            IssueKind::Missing => "missing",
            IssueKind::TooLong => "too_long",
            IssueKind::TooShort => "too_short",
            IssueKind::NoKeywords => "no_keywords",
            IssueKind::TooManyKeywords => "too_many_keywords",
        }
    }
}

/// Run every check against `metadata`; checks never short-circuit.
pub fn validate(metadata: &SeoMetadata) -> ValidationResult {
    let mut issues = Vec::new();

    check_length(
        &mut issues,
        IssueField::Title,
        "Title",
        &metadata.title,
        TITLE_MIN_CHARS,
        TITLE_MAX_CHARS,
    );
    check_length(
        &mut issues,
        IssueField::Description,
        "Description",
        &metadata.description,
        DESCRIPTION_MIN_CHARS,
        DESCRIPTION_MAX_CHARS,
    );

    let keyword_count = metadata.keywords.len();
    if keyword_count == 0 {
        issues.push(issue(
            IssueField::Keywords,
            IssueKind::NoKeywords,
            "No keywords specified".to_string(),
        ));
    } else if keyword_count > MAX_KEYWORDS {
        issues.push(issue(
            IssueField::Keywords,
            IssueKind::TooManyKeywords,
            format!("Too many keywords ({keyword_count} > {MAX_KEYWORDS})"),
        ));
    }

    let has_image = metadata
        .open_graph
        .images
        .first()
        .is_some_and(|image| !image.url.trim().is_empty());
    if !has_image {
        issues.push(issue(
            IssueField::OpenGraphImage,
            IssueKind::Missing,
            "Open Graph image is missing".to_string(),
        ));
    }

    ValidationResult::from_issues(issues)
}

/// Generate, validate and score the metadata for `record`.
#[instrument(skip_all, fields(slug = %record.slug))]
pub fn score(site: &SiteProfile, record: &ContentRecord) -> SeoReport {
    let metadata = generate_post_metadata(site, record);
    let validation = validate(&metadata);

    let mut score = MAX_SCORE;
    let mut recommendations = Vec::new();

    for issue in &validation.issues {
        score -= issue.kind.deduction();
        recommendations.push(format!(
            "{}: {}",
            issue.kind.recommendation_prefix(),
            issue.message
        ));
        counter!(METRIC_VALIDATION_ISSUES_TOTAL, "kind" => issue.kind.metric_label()).increment(1);
    }

    if record.focus_keyword().is_none() {
        score -= MISSING_FOCUS_KEYWORD_PENALTY;
        recommendations.push("Add a focus keyword to target a primary search term".to_string());
    }
    if !record.tags.iter().any(|tag| !tag.trim().is_empty()) {
        score -= MISSING_TAGS_PENALTY;
        recommendations.push("Add tags to improve content categorization".to_string());
    }
    let has_alt_text = record
        .image
        .as_ref()
        .and_then(|image| image.alt.as_deref())
        .is_some_and(|alt| !alt.trim().is_empty());
    if !has_alt_text {
        score -= MISSING_ALT_TEXT_PENALTY;
        recommendations.push("Add alt text to the featured image for accessibility".to_string());
    }

    let score = u8::try_from(score.clamp(0, MAX_SCORE)).unwrap_or_default();
    debug!(score, issues = validation.issues.len(), "scored record");

    counter!(METRIC_REPORTS_TOTAL).increment(1);
    histogram!(METRIC_REPORT_SCORE).record(f64::from(score));

    SeoReport {
        score,
        metadata,
        validation,
        recommendations,
    }
}

fn check_length(
    issues: &mut Vec<ValidationIssue>,
    field: IssueField,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let length = char_len(value.trim());
    if length == 0 {
        issues.push(issue(field, IssueKind::Missing, format!("{label} is missing")));
    } else if length > max {
        issues.push(issue(
            field,
            IssueKind::TooLong,
            format!("{label} is too long ({length} > {max} characters)"),
        ));
    } else if length < min {
        issues.push(issue(
            field,
            IssueKind::TooShort,
            format!("{label} is too short ({length} < {min} characters)"),
        ));
    }
}

fn issue(field: IssueField, kind: IssueKind, message: String) -> ValidationIssue {
    ValidationIssue {
        field,
        kind,
        message,
    }
}
