//! Length-bounded title and description optimization.
//!
//! Lengths are counted in characters, never bytes, and truncation always
//! lands on a character boundary.

use tracing::trace;

use crate::application::site::SiteProfile;

pub const TITLE_MAX_CHARS: usize = 60;
pub const TITLE_MIN_CHARS: usize = 30;
pub const DESCRIPTION_MAX_CHARS: usize = 160;
pub const DESCRIPTION_MIN_CHARS: usize = 120;
pub const ELLIPSIS: &str = "...";

/// Optimize a page title for search results.
///
/// The branded form (`"{title} | {site}"`) is preferred whenever it fits;
/// otherwise the bare title is kept, and only a bare title longer than the
/// limit is truncated.
pub fn optimize_title(site: &SiteProfile, original: &str, focus_keyword: Option<&str>) -> String {
    let original = original.trim();
    if original.is_empty() {
        return fallback_title(site);
    }

    let mut candidate = original.to_string();
    if let Some(keyword) = non_blank(focus_keyword)
        && !contains_ignore_case(original, keyword)
    {
        let with_keyword = format!("{keyword}: {original}");
        if char_len(&with_keyword) <= TITLE_MAX_CHARS {
            candidate = with_keyword;
        }
    }

    let branded = format!("{candidate}{}", site.brand_suffix());
    if char_len(&branded) <= TITLE_MAX_CHARS {
        return branded;
    }

    if char_len(&candidate) > TITLE_MAX_CHARS {
        trace!(length = char_len(&candidate), "truncating title");
        return truncate_with_ellipsis(&candidate, TITLE_MAX_CHARS);
    }

    candidate
}

/// Optimize a meta description. Short descriptions are left alone; the
/// minimum length is a validation concern.
pub fn optimize_description(
    site: &SiteProfile,
    original: &str,
    focus_keyword: Option<&str>,
) -> String {
    let original = original.trim();
    if original.is_empty() {
        return fallback_description(site);
    }

    let mut description = match non_blank(focus_keyword) {
        Some(keyword) if !contains_ignore_case(original, keyword) => {
            format!("{keyword}: {original}")
        }
        _ => original.to_string(),
    };

    if char_len(&description) > DESCRIPTION_MAX_CHARS {
        trace!(length = char_len(&description), "truncating description");
        description = truncate_with_ellipsis(&description, DESCRIPTION_MAX_CHARS);
    }

    description
}

pub fn fallback_title(site: &SiteProfile) -> String {
    format!("Aviation Training Article | {}", site.site_name())
}

pub fn fallback_description(site: &SiteProfile) -> String {
    format!(
        "Expert aviation training insights and guidance from {}. Learn from experienced pilots and aviation professionals.",
        site.site_name()
    )
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` so that, with the ellipsis appended, it fits in `max_chars`.
/// Text that already fits is returned unchanged.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteProfile {
        SiteProfile::default()
    }

    #[test]
    fn empty_title_uses_fallback() {
        assert_eq!(
            optimize_title(&site(), "   ", Some("dgca")),
            "Aviation Training Article | Aviators Training Centre"
        );
    }

    #[test]
    fn short_title_is_branded() {
        let title = optimize_title(&site(), "Flight Training Basics", None);
        assert_eq!(title, "Flight Training Basics | Aviators Training Centre");
    }

    #[test]
    fn focus_keyword_is_prefixed_when_absent_and_it_fits() {
        let title = optimize_title(&site(), "Night Flying", Some("CPL"));
        assert_eq!(title, "CPL: Night Flying | Aviators Training Centre");
    }

    #[test]
    fn focus_keyword_is_not_repeated() {
        let title = optimize_title(&site(), "Your CPL Checklist", Some("cpl"));
        assert_eq!(title, "Your CPL Checklist | Aviators Training Centre");
    }

    #[test]
    fn keyword_prefix_is_dropped_when_too_long() {
        let original = "How Cadets Prepare For Their First Solo Cross Country Trip";
        assert_eq!(char_len(original), 58);
        let title = optimize_title(&site(), original, Some("pilot training"));
        assert_eq!(title, original);
    }

    #[test]
    fn title_fitting_only_unbranded_is_kept_verbatim() {
        let original = "Understanding Weight And Balance For Student Pilots";
        assert!(char_len(original) <= TITLE_MAX_CHARS);
        assert!(char_len(original) + site().brand_suffix().len() > TITLE_MAX_CHARS);

        let title = optimize_title(&site(), original, None);
        assert_eq!(title, original);
        assert!(!title.ends_with(ELLIPSIS));
    }

    #[test]
    fn long_title_is_truncated_to_limit() {
        let original =
            "The Complete And Unabridged Guide To Passing Every Single DGCA Ground Paper";
        let title = optimize_title(&site(), original, None);
        assert_eq!(char_len(&title), TITLE_MAX_CHARS);
        assert!(title.ends_with(ELLIPSIS));
        assert!(title.starts_with("The Complete And Unabridged Guide"));
    }

    #[test]
    fn title_never_exceeds_limit() {
        let samples = [
            "A",
            "Pilot",
            "ATPL Theory Explained",
            "Navigation Sectors And Radio Aids For Commercial Pilots In India Today",
            "✈️ Vol de nuit: préparer sa licence de pilote professionnel en Inde ✈️",
        ];
        for original in samples {
            for keyword in [None, Some("dgca exam"), Some("commercial pilot license")] {
                let title = optimize_title(&site(), original, keyword);
                assert!(
                    char_len(&title) <= TITLE_MAX_CHARS,
                    "`{title}` exceeds the limit"
                );
            }
        }
    }

    #[test]
    fn empty_description_uses_fallback() {
        let description = optimize_description(&site(), "", None);
        assert_eq!(description, fallback_description(&site()));
        assert!(char_len(&description) <= DESCRIPTION_MAX_CHARS);
    }

    #[test]
    fn description_gets_keyword_prefix() {
        let description = optimize_description(&site(), "Study plan for ground school.", Some("DGCA"));
        assert_eq!(description, "DGCA: Study plan for ground school.");
    }

    #[test]
    fn long_description_is_truncated() {
        let original = "Pilot ".repeat(40);
        let description = optimize_description(&site(), &original, None);
        assert_eq!(char_len(&description), DESCRIPTION_MAX_CHARS);
        assert!(description.ends_with(ELLIPSIS));
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let text = "é".repeat(200);
        let truncated = truncate_with_ellipsis(&text, DESCRIPTION_MAX_CHARS);
        assert_eq!(char_len(&truncated), DESCRIPTION_MAX_CHARS);
    }
}
