//! SEO pipeline: pure functions over content records and a site profile.

pub mod drafts;
pub mod error;
pub mod keywords;
pub mod metadata;
pub mod site;
pub mod sitemap;
pub mod structured_data;
pub mod text;
pub mod validation;

pub use drafts::{DraftPost, PopulatedPost, populate_draft, render_front_matter};
pub use keywords::extract_keywords;
pub use metadata::{generate_listing_metadata, generate_post_metadata};
pub use site::SiteProfile;
pub use sitemap::{
    RobotsDirective, generate_sitemap_entries, render_robots_txt, render_sitemap_xml,
    robots_directives,
};
pub use structured_data::{build_article_schema, build_blog_listing_schema};
pub use text::{optimize_description, optimize_title};
pub use validation::{IssueWeight, score, validate};
