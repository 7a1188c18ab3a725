//! Sitemap entries, sitemap.xml and robots.txt generation.
//!
//! Entries are produced as data for the sitemap route; the XML and robots
//! renderers are used by the CLI and by static exports.

use aviators_seo_types::{ChangeFrequency, ContentRecord, SitemapEntry};
use tracing::debug;

use crate::application::{site::SiteProfile, structured_data::iso8601};

pub const FEATURED_PRIORITY: f32 = 0.9;
pub const DEFAULT_PRIORITY: f32 = 0.7;

const DISALLOWED_PATHS: [&str; 3] = ["/admin/", "/studio/", "/api/"];

/// One entry per record, in input order.
pub fn generate_sitemap_entries(site: &SiteProfile, records: &[ContentRecord]) -> Vec<SitemapEntry> {
    debug!(records = records.len(), "generating sitemap entries");
    records
        .iter()
        .map(|record| SitemapEntry {
            url: site.post_url(&record.slug),
            last_modified: iso8601(record.last_modified()),
            change_frequency: ChangeFrequency::Weekly,
            priority: if record.featured {
                FEATURED_PRIORITY
            } else {
                DEFAULT_PRIORITY
            },
        })
        .collect()
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&url_element(entry));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn url_element(entry: &SitemapEntry) -> String {
    format!(
        "  <url><loc>{}</loc><lastmod>{}</lastmod><changefreq>{}</changefreq><priority>{:.1}</priority></url>\n",
        escape_xml(&entry.url),
        escape_xml(&entry.last_modified),
        entry.change_frequency.as_str(),
        entry.priority,
    )
}

/// A single robots.txt rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsDirective {
    UserAgent(String),
    Allow(String),
    Disallow(String),
    Sitemap(String),
}

impl RobotsDirective {
    fn render(&self) -> String {
        match self {
            RobotsDirective::UserAgent(agent) => format!("User-agent: {agent}"),
            RobotsDirective::Allow(path) => format!("Allow: {path}"),
            RobotsDirective::Disallow(path) => format!("Disallow: {path}"),
            RobotsDirective::Sitemap(url) => format!("Sitemap: {url}"),
        }
    }
}

pub fn robots_directives(site: &SiteProfile) -> Vec<RobotsDirective> {
    let mut directives = vec![
        RobotsDirective::UserAgent("*".to_string()),
        RobotsDirective::Allow("/".to_string()),
    ];
    directives.extend(
        DISALLOWED_PATHS
            .iter()
            .map(|path| RobotsDirective::Disallow(path.to_string())),
    );
    directives.push(RobotsDirective::Sitemap(format!(
        "{}/sitemap.xml",
        site.base_url()
    )));
    directives
}

pub fn render_robots_txt(directives: &[RobotsDirective]) -> String {
    let mut body = String::new();
    for directive in directives {
        if matches!(directive, RobotsDirective::Sitemap(_)) && !body.is_empty() {
            body.push('\n');
        }
        body.push_str(&directive.render());
        body.push('\n');
    }
    body
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
