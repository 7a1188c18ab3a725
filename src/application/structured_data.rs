//! schema.org graph construction for articles and blog listings.

use aviators_seo_types::ContentRecord;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::debug;

use crate::application::{
    drafts::analysis::{EducationalProfile, plain_text},
    keywords::extract_keywords,
    site::SiteProfile,
    text::optimize_description,
};
use crate::domain::schema::{
    ArticleNode, BlogNode, CourseNode, CreativeWorkNode, CredentialNode,
    GovernmentOrganizationNode, ImageObjectNode, MentionNode, PersonNode, SchemaNode, ThingNode,
    WebPageNode,
};
use crate::domain::vocabulary::{
    CREDENTIAL_ENTITIES, CredentialKind, DEFAULT_AUTHOR_NAME, DEFAULT_CATEGORY,
};

pub const MAX_MENTIONS: usize = 5;
pub const IMAGE_WIDTH: u32 = 1200;
pub const IMAGE_HEIGHT: u32 = 630;

/// Multiplier applied to the title and excerpt word count to estimate the
/// article length when the body is not part of the projection.
pub const WORD_COUNT_MULTIPLIER: u32 = 10;

/// Build the `Article` graph for a post.
pub fn build_article_schema(
    site: &SiteProfile,
    record: &ContentRecord,
    canonical_url: &str,
    image_url: &str,
) -> SchemaNode {
    let author = match record.author.as_ref() {
        Some(author) if !author.name.trim().is_empty() => PersonNode {
            name: author.name.trim().to_string(),
            description: author
                .bio
                .as_ref()
                .map(|bio| bio.trim().to_string())
                .filter(|bio| !bio.is_empty()),
        },
        _ => {
            debug!(slug = %record.slug, "record has no author; using default");
            PersonNode {
                name: DEFAULT_AUTHOR_NAME.to_string(),
                description: None,
            }
        }
    };

    let headline = if record.title.trim().is_empty() {
        crate::application::text::fallback_title(site)
    } else {
        record.title.trim().to_string()
    };

    let image = ImageObjectNode {
        url: image_url.to_string(),
        width: Some(IMAGE_WIDTH),
        height: Some(IMAGE_HEIGHT),
        caption: record
            .image
            .as_ref()
            .and_then(|image| image.alt.clone())
            .filter(|alt| !alt.trim().is_empty()),
        encoding_format: encoding_format(image_url),
    };

    let date_published = iso8601(record.published_at);
    let date_modified = iso8601(record.last_modified());

    let article_section = record
        .category
        .as_ref()
        .map(|category| category.title.trim())
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();

    let profile = record
        .body
        .as_deref()
        .filter(|body| !body.trim().is_empty())
        .map(|body| EducationalProfile::analyze(&plain_text(body)));

    let article = ArticleNode {
        headline,
        description: optimize_description(site, &record.excerpt, record.focus_keyword()),
        image,
        author,
        publisher: site.publisher(),
        date_published,
        date_modified,
        main_entity_of_page: WebPageNode {
            id: canonical_url.to_string(),
        },
        url: canonical_url.to_string(),
        is_part_of: CreativeWorkNode {
            name: site.blog_name(),
            url: site.blog_url(),
        },
        article_section,
        in_language: site.locale().to_string(),
        word_count: estimated_word_count(record),
        keywords: extract_keywords(record).join(", "),
        mentions: build_mentions(site, record),
        educational_level: profile.map(|p| p.level.as_str().to_string()),
        learning_resource_type: profile.map(|p| p.resource_type.as_str().to_string()),
        time_required: profile.map(|p| p.time_required()),
    };

    SchemaNode::Article(Box::new(article))
}

/// Build the `Blog` graph for listing pages.
pub fn build_blog_listing_schema(site: &SiteProfile, url: &str) -> SchemaNode {
    SchemaNode::Blog(Box::new(BlogNode {
        name: site.blog_name(),
        description: format!(
            "Aviation training articles, DGCA exam guidance and pilot career advice from {}.",
            site.site_name()
        ),
        url: url.to_string(),
        publisher: site.publisher(),
        in_language: site.locale().to_string(),
        about: ThingNode {
            name: DEFAULT_CATEGORY.to_string(),
            description: "Commercial pilot training, DGCA examinations and aviation careers in India."
                .to_string(),
        },
    }))
}

/// Course targets first, then credential entities found in the title and
/// excerpt, capped at [`MAX_MENTIONS`].
pub fn build_mentions(site: &SiteProfile, record: &ContentRecord) -> Vec<MentionNode> {
    let mut mentions: Vec<MentionNode> = record
        .primary_course_targets
        .iter()
        .filter(|course| !course.name.trim().is_empty())
        .map(|course| {
            MentionNode::Course(CourseNode {
                name: course.name.trim().to_string(),
                provider: site.publisher(),
            })
        })
        .collect();

    let haystack = format!("{} {}", record.title, record.excerpt).to_lowercase();
    for entity in CREDENTIAL_ENTITIES.iter().filter(|e| e.matches(&haystack)) {
        let mention = match entity.kind {
            CredentialKind::Regulator => MentionNode::Regulator(GovernmentOrganizationNode {
                name: entity.name.to_string(),
                alternate_name: entity.full_name.to_string(),
            }),
            CredentialKind::License => MentionNode::Credential(CredentialNode {
                name: entity.name.to_string(),
                alternate_name: entity.full_name.to_string(),
                credential_category: "license".to_string(),
            }),
        };
        mentions.push(mention);
    }

    mentions.truncate(MAX_MENTIONS);
    mentions
}

pub fn estimated_word_count(record: &ContentRecord) -> u32 {
    let words = format!("{} {}", record.title, record.excerpt)
        .split_whitespace()
        .count();
    u32::try_from(words)
        .unwrap_or(u32::MAX)
        .saturating_mul(WORD_COUNT_MULTIPLIER)
}

pub fn iso8601(timestamp: OffsetDateTime) -> String {
    timestamp.format(&Rfc3339).unwrap_or_else(|err| {
        debug!(error = %err, "timestamp cannot be formatted as RFC 3339");
        timestamp.to_string()
    })
}

fn encoding_format(image_url: &str) -> Option<String> {
    let path = url::Url::parse(image_url)
        .map(|url| url.path().to_string())
        .unwrap_or_else(|_| image_url.split('?').next().unwrap_or_default().to_string());
    mime_guess::from_path(path)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .map(|mime| mime.essence_str().to_string())
}

#[cfg(test)]
mod tests {
    use aviators_seo_types::{AuthorRef, CourseTarget, ImageRef};
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    fn record() -> ContentRecord {
        ContentRecord::new(
            "DGCA CPL and ATPL roadmap",
            "From Commercial Pilot License ground papers to airline interviews.",
            "dgca-cpl-atpl-roadmap",
            datetime!(2025-04-01 10:30 UTC),
        )
    }

    fn article(node: SchemaNode) -> ArticleNode {
        match node {
            SchemaNode::Article(article) => *article,
            other => panic!("expected article, got {}", other.type_name()),
        }
    }

    #[test]
    fn mentions_are_capped_with_courses_first() {
        let site = SiteProfile::default();
        let mut record = record();
        record.primary_course_targets = vec![
            CourseTarget {
                name: "CPL Ground Classes".into(),
            },
            CourseTarget {
                name: "ATPL Theory".into(),
            },
        ];

        let mentions = build_mentions(&site, &record);
        let names: Vec<&str> = mentions.iter().map(MentionNode::name).collect();
        assert_eq!(
            names,
            vec!["CPL Ground Classes", "ATPL Theory", "DGCA", "CPL", "ATPL"]
        );
        assert!(mentions[0].is_course() && mentions[1].is_course());
    }

    #[test]
    fn author_falls_back_and_modified_date_defaults_to_published() {
        let site = SiteProfile::default();
        let record = record();
        let node = article(build_article_schema(
            &site,
            &record,
            "https://example.test/blog/x",
            "https://example.test/img.webp",
        ));

        assert_eq!(node.author.name, DEFAULT_AUTHOR_NAME);
        assert_eq!(node.date_published, "2025-04-01T10:30:00Z");
        assert_eq!(node.date_modified, node.date_published);
        assert_eq!(node.article_section, DEFAULT_CATEGORY);
        assert_eq!(node.image.encoding_format.as_deref(), Some("image/webp"));
        assert!(node.educational_level.is_none());
    }

    #[test]
    fn word_count_uses_title_and_excerpt_heuristic() {
        let record = ContentRecord::new(
            "Four words in title",
            "and three more",
            "x",
            datetime!(2025-04-01 10:30 UTC),
        );
        assert_eq!(estimated_word_count(&record), 70);
    }

    #[test]
    fn article_serializes_as_json_ld() {
        let site = SiteProfile::default();
        let mut record = record();
        record.author = Some(AuthorRef {
            name: "Ankit Kumar".into(),
            bio: Some("Ground instructor".into()),
        });
        record.image = Some(ImageRef {
            asset_url: "https://cdn.example.test/cover.jpg".into(),
            alt: Some("Cockpit at dawn".into()),
        });
        record.updated_at = Some(datetime!(2025-04-03 12:00 UTC));

        let value = build_article_schema(
            &site,
            &record,
            "https://www.aviatorstrainingcentre.in/blog/dgca-cpl-atpl-roadmap",
            "https://cdn.example.test/cover.jpg?w=1200&h=630&fit=crop",
        )
        .to_json_ld()
        .expect("json-ld");

        assert_eq!(value["@context"], json!("https://schema.org"));
        assert_eq!(value["@type"], json!("Article"));
        assert_eq!(value["author"], json!({
            "@type": "Person",
            "name": "Ankit Kumar",
            "description": "Ground instructor",
        }));
        assert_eq!(value["image"]["caption"], json!("Cockpit at dawn"));
        assert_eq!(value["image"]["encodingFormat"], json!("image/jpeg"));
        assert_eq!(value["dateModified"], json!("2025-04-03T12:00:00Z"));
        assert_eq!(
            value["mainEntityOfPage"]["@id"],
            json!("https://www.aviatorstrainingcentre.in/blog/dgca-cpl-atpl-roadmap")
        );
        assert_eq!(value["publisher"]["name"], json!("Aviators Training Centre"));
        assert_eq!(value["mentions"][0]["@type"], json!("GovernmentOrganization"));
        assert_eq!(
            value["mentions"][1]["@type"],
            json!("EducationalOccupationalCredential")
        );
    }

    #[test]
    fn body_adds_educational_fields() {
        let site = SiteProfile::default();
        let mut record = record();
        record.body = Some("<p>A beginner guide to your first solo.</p>".into());

        let node = article(build_article_schema(&site, &record, "u", "i"));
        assert_eq!(node.educational_level.as_deref(), Some("Beginner"));
        assert_eq!(node.learning_resource_type.as_deref(), Some("Guide"));
        assert_eq!(node.time_required.as_deref(), Some("PT1M"));
    }

    #[test]
    fn blog_listing_has_fixed_about_block() {
        let site = SiteProfile::default();
        let value = build_blog_listing_schema(&site, "https://example.test/blog")
            .to_json_ld()
            .expect("json-ld");
        assert_eq!(value["@type"], json!("Blog"));
        assert_eq!(value["about"]["name"], json!("Aviation Training"));
        assert_eq!(value["publisher"]["@type"], json!("Organization"));
        assert!(value.get("datePublished").is_none());
    }
}
