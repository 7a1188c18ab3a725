//! Keyword extraction for meta keywords and JSON-LD.

use aviators_seo_types::ContentRecord;

use crate::domain::vocabulary::KEYWORD_TERMS;

pub const MAX_KEYWORDS: usize = 10;

/// Collect lowercase keywords from tags, focus keyword, category and the
/// aviation dictionary, keeping the first [`MAX_KEYWORDS`] in insertion order.
pub fn extract_keywords(record: &ContentRecord) -> Vec<String> {
    let mut keywords = KeywordSet::default();

    for tag in &record.tags {
        keywords.insert(tag);
    }
    if let Some(keyword) = record.focus_keyword() {
        keywords.insert(keyword);
    }
    if let Some(category) = record.category.as_ref() {
        keywords.insert(&category.title);
    }

    let haystack = format!("{} {}", record.title, record.excerpt).to_lowercase();
    for term in KEYWORD_TERMS {
        if haystack.contains(term) {
            keywords.insert(term);
        }
    }

    keywords.into_limited(MAX_KEYWORDS)
}

/// Insertion-ordered set of normalized keywords.
#[derive(Debug, Default)]
struct KeywordSet {
    items: Vec<String>,
}

impl KeywordSet {
    fn insert(&mut self, raw: &str) {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || self.items.contains(&normalized) {
            return;
        }
        self.items.push(normalized);
    }

    fn into_limited(mut self, limit: usize) -> Vec<String> {
        self.items.truncate(limit);
        self.items
    }
}
