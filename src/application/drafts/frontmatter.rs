//! TOML front matter for populated posts.

use serde::Serialize;
use time::OffsetDateTime;

use crate::application::error::AppError;

use super::PopulatedPost;

pub const DELIMITER: &str = "+++";
const WORKFLOW_STATUS: &str = "Draft";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter<'a> {
    title: &'a str,
    slug: &'a str,
    #[serde(with = "time::serde::rfc3339")]
    date: OffsetDateTime,
    excerpt: &'a str,
    category: &'a str,
    cover_image: &'a str,
    cover_image_alt: &'a str,
    featured: bool,
    tags: &'a [String],
    seo_title: &'a str,
    seo_description: &'a str,
    focus_keyword: &'a str,
    additional_keywords: &'a [String],
    reading_time: u32,
    word_count: u32,
    workflow_status: &'static str,
    // Tables follow plain values.
    author: AuthorTable<'a>,
    structured_data: StructuredDataTable,
}

#[derive(Debug, Serialize)]
struct AuthorTable<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StructuredDataTable {
    article_type: &'static str,
    learning_resource_type: &'static str,
    educational_level: &'static str,
    time_required: String,
}

impl<'a> From<&'a PopulatedPost> for FrontMatter<'a> {
    fn from(post: &'a PopulatedPost) -> Self {
        Self {
            title: &post.title,
            slug: &post.slug,
            date: post.published_at,
            excerpt: &post.excerpt,
            category: &post.category,
            cover_image: &post.featured_image,
            cover_image_alt: &post.alt_text,
            featured: post.featured,
            tags: &post.tags,
            seo_title: &post.seo_title,
            seo_description: &post.seo_description,
            focus_keyword: &post.focus_keyword,
            additional_keywords: &post.additional_keywords,
            reading_time: post.reading_time,
            word_count: post.word_count,
            workflow_status: WORKFLOW_STATUS,
            author: AuthorTable {
                name: &post.author.name,
                image: post.author.image.as_deref(),
            },
            structured_data: StructuredDataTable {
                article_type: post.profile.article_type.as_str(),
                learning_resource_type: post.profile.resource_type.as_str(),
                educational_level: post.profile.level.as_str(),
                time_required: post.profile.time_required(),
            },
        }
    }
}

/// Render `+++`-delimited TOML front matter followed by the cleaned body.
pub fn render_front_matter(post: &PopulatedPost) -> Result<String, AppError> {
    let front_matter = toml::to_string(&FrontMatter::from(post))
        .map_err(|err| AppError::unexpected(format!("failed to serialize front matter: {err}")))?;

    let mut document = String::with_capacity(front_matter.len() + post.body.len() + 16);
    document.push_str(DELIMITER);
    document.push('\n');
    document.push_str(&front_matter);
    if !front_matter.ends_with('\n') {
        document.push('\n');
    }
    document.push_str(DELIMITER);
    document.push_str("\n\n");
    document.push_str(&post.body);
    document.push('\n');
    Ok(document)
}
