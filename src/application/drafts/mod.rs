//! Draft auto-population: derive every missing editorial field from a
//! title and body before the post enters the SEO pipeline.

pub mod analysis;
pub mod frontmatter;

use aviators_seo_types::{AuthorRef, CategoryRef, ContentRecord, ImageRef};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::{debug, instrument};

use crate::application::{
    error::AppError,
    site::SiteProfile,
    text::{DESCRIPTION_MAX_CHARS, char_len, optimize_title, truncate_with_ellipsis},
};
use crate::domain::{content::ensure_valid_slug, slug::generate_unique_slug};

use self::analysis::{
    EducationalProfile, MAX_ADDITIONAL_KEYWORDS, MAX_TAGS, categorize, clean_body,
    extract_excerpt, extract_focus_keyword, extract_tags, plain_text, select_instructor,
    word_count,
};

pub use self::frontmatter::render_front_matter;

pub const UNTITLED: &str = "Untitled Blog Post";

/// Editorial input: a title and body plus any fields the author already set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPost {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content")]
    pub body: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: Option<DraftAuthor>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub focus_keyword: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub additional_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DraftAuthor {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A draft with every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub body: String,
    pub author: DraftAuthor,
    pub category: String,
    pub tags: Vec<String>,
    pub featured_image: String,
    pub alt_text: String,
    pub featured: bool,
    pub published_at: OffsetDateTime,
    pub seo_title: String,
    pub seo_description: String,
    pub focus_keyword: String,
    pub additional_keywords: Vec<String>,
    pub reading_time: u32,
    pub word_count: u32,
    pub profile: EducationalProfile,
}

impl PopulatedPost {
    /// Project the post into the record shape the SEO pipeline consumes.
    pub fn to_content_record(&self) -> ContentRecord {
        let mut record = ContentRecord::new(
            self.title.clone(),
            self.excerpt.clone(),
            self.slug.clone(),
            self.published_at,
        );
        record.tags = self.tags.clone();
        record.focus_keyword = Some(self.focus_keyword.clone());
        record.category = Some(CategoryRef {
            title: self.category.clone(),
        });
        record.author = Some(AuthorRef {
            name: self.author.name.clone(),
            bio: None,
        });
        record.image = Some(ImageRef {
            asset_url: self.featured_image.clone(),
            alt: Some(self.alt_text.clone()),
        });
        record.featured = self.featured;
        record.body = Some(self.body.clone());
        record
    }
}

/// Fill every missing field of `draft`. Fields the author provided are kept
/// verbatim; `now` stands in for a missing publication time.
///
/// A derived slug is suffixed until `slug_available` accepts it; a slug the
/// author provided is used as is once it passes the URL-safety check.
#[instrument(skip_all, fields(title = %draft.title))]
pub fn populate_draft<F>(
    site: &SiteProfile,
    draft: DraftPost,
    now: OffsetDateTime,
    slug_available: F,
) -> Result<PopulatedPost, AppError>
where
    F: FnMut(&str) -> bool,
{
    let title = provided(Some(draft.title)).unwrap_or_else(|| {
        debug!("draft has no title; using placeholder");
        UNTITLED.to_string()
    });
    let plain = plain_text(&draft.body);

    let slug = match provided(draft.slug) {
        Some(slug) => {
            ensure_valid_slug(&slug)?;
            slug
        }
        None => generate_unique_slug(&title, slug_available)?,
    };

    let provided_excerpt = provided(draft.excerpt);
    let excerpt = provided_excerpt
        .clone()
        .unwrap_or_else(|| extract_excerpt(&plain));

    let author = draft
        .author
        .filter(|author| !author.name.trim().is_empty())
        .unwrap_or_else(|| {
            let instructor = select_instructor(&plain);
            DraftAuthor {
                name: instructor.name.to_string(),
                image: Some(instructor.image.to_string()),
            }
        });

    let category =
        provided(draft.category).unwrap_or_else(|| categorize(&title, &plain).to_string());

    let tags = non_empty(draft.tags).unwrap_or_else(|| extract_tags(&title, &plain, MAX_TAGS));

    let featured_image =
        provided(draft.featured_image).unwrap_or_else(|| format!("/blog/{slug}-featured.jpg"));
    let alt_text =
        provided(draft.alt_text).unwrap_or_else(|| format!("Featured image for {title}"));

    let focus_keyword =
        provided(draft.focus_keyword).unwrap_or_else(|| extract_focus_keyword(&title, &plain));

    let seo_title = provided(draft.seo_title)
        .unwrap_or_else(|| optimize_title(site, &title, Some(&focus_keyword)));
    let seo_description = provided(draft.seo_description)
        .unwrap_or_else(|| seo_description(site, provided_excerpt.as_deref(), &title));

    let additional_keywords = non_empty(draft.additional_keywords)
        .unwrap_or_else(|| extract_tags(&title, &plain, MAX_ADDITIONAL_KEYWORDS));

    let profile = EducationalProfile::analyze(&plain);
    let words = u32::try_from(word_count(&plain)).unwrap_or(u32::MAX);

    Ok(PopulatedPost {
        title,
        slug,
        excerpt,
        body: clean_body(&draft.body),
        author,
        category,
        tags,
        featured_image,
        alt_text,
        featured: draft.featured,
        published_at: draft.published_at.unwrap_or(now),
        seo_title,
        seo_description,
        focus_keyword,
        additional_keywords,
        reading_time: profile.reading_minutes,
        word_count: words,
        profile,
    })
}

/// The author's own excerpt when it fits, otherwise a templated sentence.
fn seo_description(site: &SiteProfile, excerpt: Option<&str>, title: &str) -> String {
    if let Some(excerpt) = excerpt
        && char_len(excerpt) <= DESCRIPTION_MAX_CHARS
    {
        return excerpt.to_string();
    }
    let templated = format!(
        "Learn about {}. Expert guidance from {} for aspiring pilots and aviation professionals.",
        title.to_lowercase(),
        site.site_name()
    );
    truncate_with_ellipsis(&templated, DESCRIPTION_MAX_CHARS)
}

fn provided(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    let values: Vec<String> = values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    (!values.is_empty()).then_some(values)
}
