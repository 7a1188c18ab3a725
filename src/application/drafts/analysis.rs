//! Heuristics that derive editorial fields from an article body.

use std::collections::HashSet;

use ammonia::Builder as AmmoniaBuilder;
use once_cell::sync::Lazy;

use crate::application::text::{DESCRIPTION_MAX_CHARS, char_len, truncate_with_ellipsis};
use crate::domain::vocabulary::{
    AVIATION_WORDS, CATEGORY_RULES, CUED_INSTRUCTORS, DEFAULT_FOCUS_KEYWORD, DEFAULT_INSTRUCTOR,
    FALLBACK_CATEGORY, FOCUS_KEYWORD_PRIORITY, Instructor, TAG_VOCABULARY,
};

pub const WORDS_PER_MINUTE: usize = 225;
pub const MAX_TAGS: usize = 5;
pub const MAX_ADDITIONAL_KEYWORDS: usize = 3;

const MARKDOWN_PUNCTUATION: [char; 7] = ['#', '*', '`', '[', ']', '(', ')'];
const CTA_PLACEHOLDER_OPEN: &str = "<!-- CTA_";
const CTA_PLACEHOLDER_CLOSE: &str = "_INTEGRATION -->";

static TEXT_EXTRACTOR: Lazy<AmmoniaBuilder<'static>> = Lazy::new(|| {
    let mut builder = AmmoniaBuilder::empty();
    builder.clean_content_tags(HashSet::from(["script", "style"]));
    builder
});

/// Strip markup from `body` and collapse whitespace.
pub fn plain_text(body: &str) -> String {
    // Leading spaces keep adjacent block elements from gluing words together.
    let spaced = body.replace('<', " <");
    let cleaned = TEXT_EXTRACTOR.clean(&spaced).to_string();
    let decoded = cleaned
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&");

    decoded
        .chars()
        .filter(|ch| !MARKDOWN_PUNCTUATION.contains(ch))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn word_count(plain: &str) -> usize {
    plain.split_whitespace().count()
}

/// Minutes at [`WORDS_PER_MINUTE`], rounded up, never below one.
pub fn reading_time_minutes(words: usize) -> u32 {
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Accumulate whole sentences while the excerpt stays under the meta
/// description limit. A first sentence that is already too long is truncated.
pub fn extract_excerpt(plain: &str) -> String {
    let mut excerpt = String::new();
    for sentence in plain.split('.').map(str::trim).filter(|s| !s.is_empty()) {
        let candidate = if excerpt.is_empty() {
            format!("{sentence}.")
        } else {
            format!("{excerpt} {sentence}.")
        };
        if char_len(&candidate) >= DESCRIPTION_MAX_CHARS {
            break;
        }
        excerpt = candidate;
    }

    if excerpt.is_empty() {
        return truncate_with_ellipsis(plain.trim(), DESCRIPTION_MAX_CHARS);
    }
    excerpt
}

/// First category rule with a cue in the lowercased title and body.
pub fn categorize(title: &str, plain: &str) -> &'static str {
    let text = format!("{title} {plain}").to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.cues.iter().any(|cue| text.contains(cue)))
        .map(|rule| rule.category)
        .unwrap_or(FALLBACK_CATEGORY)
}

/// Tag vocabulary matches in priority order, topped up with whole aviation
/// words in the order they appear.
pub fn extract_tags(title: &str, plain: &str, limit: usize) -> Vec<String> {
    let text = format!("{title} {plain}").to_lowercase();
    let mut tags: Vec<String> = TAG_VOCABULARY
        .iter()
        .filter(|tag| text.contains(*tag))
        .take(limit)
        .map(|tag| tag.to_string())
        .collect();

    for word in words(&text) {
        if tags.len() >= limit {
            break;
        }
        if AVIATION_WORDS.contains(&word) && !tags.iter().any(|tag| tag == word) {
            tags.push(word.to_string());
        }
    }

    tags
}

/// Highest-priority focus phrase present, else the first aviation word,
/// else the default phrase.
pub fn extract_focus_keyword(title: &str, plain: &str) -> String {
    let text = format!("{title} {plain}").to_lowercase();
    if let Some(phrase) = FOCUS_KEYWORD_PRIORITY
        .iter()
        .find(|phrase| text.contains(*phrase))
    {
        return phrase.to_string();
    }

    words(&text)
        .find(|word| AVIATION_WORDS.contains(word) || *word == "training")
        .unwrap_or(DEFAULT_FOCUS_KEYWORD)
        .to_string()
}

pub fn select_instructor(plain: &str) -> Instructor {
    let text = plain.to_lowercase();
    CUED_INSTRUCTORS
        .iter()
        .find(|(_, cues)| cues.iter().any(|cue| text.contains(cue)))
        .map(|(instructor, _)| *instructor)
        .unwrap_or(DEFAULT_INSTRUCTOR)
}

/// Remove CTA placeholder comments, normalise line endings and collapse
/// runs of blank lines.
pub fn clean_body(body: &str) -> String {
    let mut without_cta = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(start) = rest.find(CTA_PLACEHOLDER_OPEN) {
        let after_open = &rest[start + CTA_PLACEHOLDER_OPEN.len()..];
        let Some(end) = after_open.find(CTA_PLACEHOLDER_CLOSE) else {
            break;
        };
        let name = &after_open[..end];
        if name.is_empty() || !name.chars().all(|ch| ch.is_alphanumeric() || ch == '_') {
            without_cta.push_str(&rest[..start + CTA_PLACEHOLDER_OPEN.len()]);
            rest = after_open;
            continue;
        }
        without_cta.push_str(&rest[..start]);
        rest = &after_open[end + CTA_PLACEHOLDER_CLOSE.len()..];
    }
    without_cta.push_str(rest);

    let normalized = without_cta.replace("\r\n", "\n");
    let mut collapsed = String::with_capacity(normalized.len());
    let mut newlines = 0usize;
    for ch in normalized.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                collapsed.push(ch);
            }
        } else {
            newlines = 0;
            collapsed.push(ch);
        }
    }

    collapsed.trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleType {
    HowTo,
    Educational,
}

impl ArticleType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HowTo => "HowTo",
            Self::Educational => "Educational",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningResourceType {
    Guide,
    Article,
}

impl LearningResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guide => "Guide",
            Self::Article => "Article",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationalLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl EducationalLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Educational classification of an article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationalProfile {
    pub article_type: ArticleType,
    pub resource_type: LearningResourceType,
    pub level: EducationalLevel,
    pub reading_minutes: u32,
}

impl EducationalProfile {
    pub fn analyze(plain: &str) -> Self {
        let text = plain.to_lowercase();
        let has_any = |cues: &[&str]| cues.iter().any(|cue| text.contains(cue));

        let (article_type, resource_type) = if has_any(&["guide", "how to", "steps", "tutorial"])
        {
            (ArticleType::HowTo, LearningResourceType::Guide)
        } else {
            (ArticleType::Educational, LearningResourceType::Article)
        };

        let level = if has_any(&["beginner", "basic", "introduction", "getting started"]) {
            EducationalLevel::Beginner
        } else if has_any(&["advanced", "expert", "professional", "complex"]) {
            EducationalLevel::Advanced
        } else {
            EducationalLevel::Intermediate
        };

        Self {
            article_type,
            resource_type,
            level,
            reading_minutes: reading_time_minutes(word_count(plain)),
        }
    }

    /// ISO 8601 duration, e.g. `PT4M`.
    pub fn time_required(&self) -> String {
        format!("PT{}M", self.reading_minutes)
    }
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
}
