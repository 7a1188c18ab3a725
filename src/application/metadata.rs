//! Assembles complete page metadata for posts and blog listings.

use std::num::NonZeroU32;

use aviators_seo_types::{
    ContentRecord, OpenGraph, OpenGraphImage, OpenGraphType, SeoMetadata, TwitterCard,
    TwitterCardType,
};
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::application::{
    keywords::extract_keywords,
    site::SiteProfile,
    structured_data::{
        IMAGE_HEIGHT, IMAGE_WIDTH, build_article_schema, build_blog_listing_schema,
    },
    text::{optimize_description, optimize_title, truncate_with_ellipsis},
};
use crate::domain::{schema::SchemaNode, vocabulary::DEFAULT_AUTHOR_NAME};

pub const TWITTER_TITLE_MAX_CHARS: usize = 70;
pub const TWITTER_DESCRIPTION_MAX_CHARS: usize = 200;
const IMAGE_SIZE_PARAMS: &str = "w=1200&h=630&fit=crop";

const LISTING_KEYWORDS: [&str; 5] = [
    "aviation training",
    "pilot training",
    "dgca exam",
    "commercial pilot",
    "aviation career",
];

/// Metadata for a single blog post.
#[instrument(skip_all, fields(slug = %record.slug))]
pub fn generate_post_metadata(site: &SiteProfile, record: &ContentRecord) -> SeoMetadata {
    let canonical_url = site.post_url(&record.slug);
    let image_url = resolve_image_url(site, record);
    let focus_keyword = record.focus_keyword();

    if record.title.trim().is_empty() {
        debug!("record has no title; using fallback");
    }
    let title = optimize_title(site, &record.title, focus_keyword);
    let description = optimize_description(site, &record.excerpt, focus_keyword);
    let keywords = extract_keywords(record);

    let schema = build_article_schema(site, record, &canonical_url, &image_url);

    let image_alt = record
        .image
        .as_ref()
        .and_then(|image| image.alt.as_deref())
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| title.clone());

    let author_name = record
        .author
        .as_ref()
        .map(|author| author.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_AUTHOR_NAME)
        .to_string();

    let tags: Vec<String> = record
        .tags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    let open_graph = OpenGraph {
        title: title.clone(),
        description: description.clone(),
        kind: OpenGraphType::Article,
        url: canonical_url.clone(),
        images: vec![OpenGraphImage {
            url: image_url.clone(),
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            alt: image_alt,
        }],
        site_name: site.site_name().to_string(),
        published_time: Some(record.published_at),
        modified_time: Some(record.last_modified()),
        authors: Some(vec![author_name]),
        tags: (!tags.is_empty()).then_some(tags),
    };

    let twitter = twitter_card(site, &title, &description, image_url);

    SeoMetadata {
        title,
        description,
        keywords,
        canonical_url,
        open_graph,
        twitter,
        structured_data: json_ld(&schema),
    }
}

/// Metadata for the blog index, optionally filtered by category and paged.
#[instrument(skip_all, fields(category = ?category, page = ?page))]
pub fn generate_listing_metadata(
    site: &SiteProfile,
    category: Option<&str>,
    page: Option<NonZeroU32>,
) -> SeoMetadata {
    let category = category.map(str::trim).filter(|c| !c.is_empty());
    let page_suffix = match page.map(NonZeroU32::get) {
        Some(n) if n > 1 => format!(" - Page {n}"),
        _ => String::new(),
    };

    let (title, description) = match category {
        Some(category) => (
            format!("{category} Articles | {}", site.site_name()),
            format!(
                "{category} articles from {}: aviation training insights, DGCA exam guidance and pilot career advice.",
                site.site_name()
            ),
        ),
        None => (
            format!("Aviation Training Blog | {}", site.site_name()),
            format!(
                "Expert aviation training insights, DGCA exam preparation tips and pilot career guidance from the experienced instructors at {}.",
                site.site_name()
            ),
        ),
    };
    let title = format!("{title}{page_suffix}");
    let description = format!("{description}{page_suffix}");

    let url = listing_url(site, category, page);

    let mut keywords: Vec<String> = Vec::with_capacity(LISTING_KEYWORDS.len() + 1);
    if let Some(category) = category {
        keywords.push(category.to_lowercase());
    }
    for keyword in LISTING_KEYWORDS {
        if !keywords.iter().any(|existing| existing == keyword) {
            keywords.push(keyword.to_string());
        }
    }

    let image_url = site.placeholder_image_url().to_string();
    let open_graph = OpenGraph {
        title: title.clone(),
        description: description.clone(),
        kind: OpenGraphType::Website,
        url: url.clone(),
        images: vec![OpenGraphImage {
            url: image_url.clone(),
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            alt: site.blog_name(),
        }],
        site_name: site.site_name().to_string(),
        published_time: None,
        modified_time: None,
        authors: None,
        tags: None,
    };

    let twitter = twitter_card(site, &title, &description, image_url);
    let schema = build_blog_listing_schema(site, &url);

    SeoMetadata {
        title,
        description,
        keywords,
        canonical_url: url,
        open_graph,
        twitter,
        structured_data: json_ld(&schema),
    }
}

/// Sized asset URL for the record image, or the site placeholder.
pub fn resolve_image_url(site: &SiteProfile, record: &ContentRecord) -> String {
    match record
        .image
        .as_ref()
        .map(|image| image.asset_url.trim())
        .filter(|url| !url.is_empty())
    {
        Some(asset_url) => with_size_params(&site.absolute(asset_url)),
        None => {
            debug!("record has no image; using placeholder");
            site.placeholder_image_url().to_string()
        }
    }
}

fn with_size_params(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{IMAGE_SIZE_PARAMS}")
}

fn listing_url(site: &SiteProfile, category: Option<&str>, page: Option<NonZeroU32>) -> String {
    let blog_url = site.blog_url();
    let page = page.map(NonZeroU32::get).filter(|n| *n > 1);
    if category.is_none() && page.is_none() {
        return blog_url;
    }

    match Url::parse(&blog_url) {
        Ok(mut url) => {
            {
                let mut query = url.query_pairs_mut();
                if let Some(category) = category {
                    query.append_pair("category", category);
                }
                if let Some(page) = page {
                    query.append_pair("page", &page.to_string());
                }
            }
            url.to_string()
        }
        Err(err) => {
            warn!(error = %err, url = %blog_url, "blog url cannot carry query parameters");
            blog_url
        }
    }
}

fn twitter_card(site: &SiteProfile, title: &str, description: &str, image: String) -> TwitterCard {
    TwitterCard {
        card: TwitterCardType::SummaryLargeImage,
        title: truncate_with_ellipsis(title, TWITTER_TITLE_MAX_CHARS),
        description: truncate_with_ellipsis(description, TWITTER_DESCRIPTION_MAX_CHARS),
        images: vec![image],
        creator: Some(site.twitter_handle().to_string()),
        site: Some(site.twitter_handle().to_string()),
    }
}

fn json_ld(schema: &SchemaNode) -> Value {
    schema.to_json_ld().unwrap_or_else(|err| {
        warn!(error = %err, schema = schema.type_name(), "failed to serialize structured data");
        Value::Null
    })
}

#[cfg(test)]
mod tests {
    use aviators_seo_types::ImageRef;
    use time::macros::datetime;

    use super::*;

    fn record() -> ContentRecord {
        ContentRecord::new(
            "Flight Training Basics",
            "Everything a cadet needs before the first lesson.",
            "flight-training-basics",
            datetime!(2025-05-05 06:00 UTC),
        )
    }

    #[test]
    fn image_params_are_appended_with_the_right_separator() {
        let site = SiteProfile::default();
        let mut record = record();
        record.image = Some(ImageRef {
            asset_url: "https://cdn.sanity.io/images/p/d/abc.png?auto=format".into(),
            alt: None,
        });
        assert_eq!(
            resolve_image_url(&site, &record),
            "https://cdn.sanity.io/images/p/d/abc.png?auto=format&w=1200&h=630&fit=crop"
        );

        record.image = Some(ImageRef {
            asset_url: "/blog/cover.jpg".into(),
            alt: None,
        });
        assert_eq!(
            resolve_image_url(&site, &record),
            "https://www.aviatorstrainingcentre.in/blog/cover.jpg?w=1200&h=630&fit=crop"
        );
    }

    #[test]
    fn missing_image_uses_placeholder_without_params() {
        let site = SiteProfile::default();
        assert_eq!(
            resolve_image_url(&site, &record()),
            "https://www.aviatorstrainingcentre.in/Blogs/Blog_Header.webp"
        );
    }

    #[test]
    fn post_metadata_fills_social_blocks() {
        let site = SiteProfile::default();
        let metadata = generate_post_metadata(&site, &record());

        assert_eq!(
            metadata.canonical_url,
            "https://www.aviatorstrainingcentre.in/blog/flight-training-basics"
        );
        assert_eq!(metadata.open_graph.kind, OpenGraphType::Article);
        assert_eq!(metadata.open_graph.url, metadata.canonical_url);
        assert_eq!(metadata.open_graph.images[0].alt, metadata.title);
        assert_eq!(
            metadata.open_graph.authors.as_deref(),
            Some(&["Aviation Expert".to_string()][..])
        );
        assert!(metadata.open_graph.tags.is_none());
        assert_eq!(
            metadata.open_graph.modified_time,
            metadata.open_graph.published_time
        );
        assert_eq!(metadata.twitter.card, TwitterCardType::SummaryLargeImage);
        assert_eq!(metadata.twitter.site.as_deref(), Some("@aviatorstrainingcentre"));
        assert_eq!(metadata.structured_data["@type"], "Article");
    }

    #[test]
    fn listing_without_filters_points_at_the_blog() {
        let site = SiteProfile::default();
        let metadata = generate_listing_metadata(&site, None, None);

        assert_eq!(metadata.title, "Aviation Training Blog | Aviators Training Centre");
        assert_eq!(
            metadata.canonical_url,
            "https://www.aviatorstrainingcentre.in/blog"
        );
        assert_eq!(metadata.open_graph.kind, OpenGraphType::Website);
        assert_eq!(metadata.structured_data["@type"], "Blog");
    }

    #[test]
    fn listing_category_and_page_extend_title_and_url() {
        let site = SiteProfile::default();
        let metadata = generate_listing_metadata(&site, Some("DGCA Exams"), NonZeroU32::new(2));

        assert_eq!(
            metadata.title,
            "DGCA Exams Articles | Aviators Training Centre - Page 2"
        );
        assert!(metadata.description.ends_with(" - Page 2"));
        assert_eq!(
            metadata.canonical_url,
            "https://www.aviatorstrainingcentre.in/blog?category=DGCA+Exams&page=2"
        );
        assert_eq!(metadata.keywords[0], "dgca exams");
    }

    #[test]
    fn listing_page_alone_uses_question_mark() {
        let site = SiteProfile::default();
        let metadata = generate_listing_metadata(&site, None, NonZeroU32::new(3));
        assert_eq!(
            metadata.canonical_url,
            "https://www.aviatorstrainingcentre.in/blog?page=3"
        );
        assert_eq!(
            metadata.title,
            "Aviation Training Blog | Aviators Training Centre - Page 3"
        );
    }

    #[test]
    fn first_page_adds_no_suffix() {
        let site = SiteProfile::default();
        let metadata = generate_listing_metadata(&site, Some("Navigation"), NonZeroU32::new(1));
        assert_eq!(metadata.title, "Navigation Articles | Aviators Training Centre");
        assert_eq!(
            metadata.canonical_url,
            "https://www.aviatorstrainingcentre.in/blog?category=Navigation"
        );
    }
}
