//! Typed schema.org nodes for JSON-LD output.
//!
//! Each node struct serializes its own `@type`, so nested positions are type
//! checked at construction while the emitted JSON stays plain schema.org.
//! Positions that accept several node kinds use the untagged unions
//! [`SchemaNode`] and [`MentionNode`].

use serde::Serialize;
use serde_json::Value;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Root node of a JSON-LD document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Article(Box<ArticleNode>),
    Blog(Box<BlogNode>),
    Organization(OrganizationNode),
    Person(PersonNode),
    ImageObject(ImageObjectNode),
    Course(CourseNode),
    CreativeWork(CreativeWorkNode),
    WebPage(WebPageNode),
    Thing(ThingNode),
}

impl SchemaNode {
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::Article(_) => "Article",
            SchemaNode::Blog(_) => "Blog",
            SchemaNode::Organization(_) => "Organization",
            SchemaNode::Person(_) => "Person",
            SchemaNode::ImageObject(_) => "ImageObject",
            SchemaNode::Course(_) => "Course",
            SchemaNode::CreativeWork(_) => "CreativeWork",
            SchemaNode::WebPage(_) => "WebPage",
            SchemaNode::Thing(_) => "Thing",
        }
    }

    /// Serialize into a JSON-LD document with the schema.org `@context`.
    pub fn to_json_ld(&self) -> Result<Value, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            map.insert(
                "@context".to_string(),
                Value::String(SCHEMA_CONTEXT.to_string()),
            );
        }
        Ok(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Article", rename_all = "camelCase")]
pub struct ArticleNode {
    pub headline: String,
    pub description: String,
    pub image: ImageObjectNode,
    pub author: PersonNode,
    pub publisher: OrganizationNode,
    pub date_published: String,
    pub date_modified: String,
    pub main_entity_of_page: WebPageNode,
    pub url: String,
    pub is_part_of: CreativeWorkNode,
    pub article_section: String,
    pub in_language: String,
    pub word_count: u32,
    pub keywords: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<MentionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_required: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Blog", rename_all = "camelCase")]
pub struct BlogNode {
    pub name: String,
    pub description: String,
    pub url: String,
    pub publisher: OrganizationNode,
    pub in_language: String,
    pub about: ThingNode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Organization", rename_all = "camelCase")]
pub struct OrganizationNode {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObjectNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Person", rename_all = "camelCase")]
pub struct PersonNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "ImageObject", rename_all = "camelCase")]
pub struct ImageObjectNode {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Course", rename_all = "camelCase")]
pub struct CourseNode {
    pub name: String,
    pub provider: OrganizationNode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "CreativeWork", rename_all = "camelCase")]
pub struct CreativeWorkNode {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "WebPage")]
pub struct WebPageNode {
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "Thing", rename_all = "camelCase")]
pub struct ThingNode {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type", rename = "GovernmentOrganization", rename_all = "camelCase")]
pub struct GovernmentOrganizationNode {
    pub name: String,
    pub alternate_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "@type",
    rename = "EducationalOccupationalCredential",
    rename_all = "camelCase"
)]
pub struct CredentialNode {
    pub name: String,
    pub alternate_name: String,
    pub credential_category: String,
}

/// Entities an article mentions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MentionNode {
    Course(CourseNode),
    Regulator(GovernmentOrganizationNode),
    Credential(CredentialNode),
}

impl MentionNode {
    pub fn name(&self) -> &str {
        match self {
            MentionNode::Course(node) => &node.name,
            MentionNode::Regulator(node) => &node.name,
            MentionNode::Credential(node) => &node.name,
        }
    }

    pub fn is_course(&self) -> bool {
        matches!(self, MentionNode::Course(_))
    }
}
