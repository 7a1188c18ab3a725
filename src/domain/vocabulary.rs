//! Fixed aviation vocabularies used for keyword, entity and category matching.
//!
//! Every term is stored lowercase unless it is a display name; matching is
//! always done against lowercased text.

/// Author name used when a record carries no author.
pub const DEFAULT_AUTHOR_NAME: &str = "Aviation Expert";

/// Section name used when a record carries no category.
pub const DEFAULT_CATEGORY: &str = "Aviation Training";

/// Terms matched as substrings of the title and excerpt during keyword extraction.
pub const KEYWORD_TERMS: [&str; 14] = [
    "aviation",
    "pilot training",
    "flight training",
    "dgca",
    "commercial pilot",
    "cpl",
    "atpl",
    "airline pilot",
    "flight school",
    "pilot license",
    "aviation career",
    "ground school",
    "type rating",
    "flight instructor",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Regulator,
    License,
}

/// Credential or regulator surfaced as a structured-data mention.
#[derive(Debug, Clone, Copy)]
pub struct CredentialEntity {
    pub name: &'static str,
    pub full_name: &'static str,
    pub kind: CredentialKind,
}

impl CredentialEntity {
    pub fn matches(&self, lowercase_text: &str) -> bool {
        lowercase_text.contains(&self.name.to_lowercase())
    }
}

/// Scan order is significant: earlier entries win when mentions are capped.
pub const CREDENTIAL_ENTITIES: [CredentialEntity; 4] = [
    CredentialEntity {
        name: "DGCA",
        full_name: "Directorate General of Civil Aviation",
        kind: CredentialKind::Regulator,
    },
    CredentialEntity {
        name: "CPL",
        full_name: "Commercial Pilot License",
        kind: CredentialKind::License,
    },
    CredentialEntity {
        name: "ATPL",
        full_name: "Airline Transport Pilot License",
        kind: CredentialKind::License,
    },
    CredentialEntity {
        name: "Commercial Pilot License",
        full_name: "Commercial Pilot License",
        kind: CredentialKind::License,
    },
];

/// Candidate tags for drafts, in priority order.
pub const TAG_VOCABULARY: [&str; 20] = [
    "pilot training",
    "cpl",
    "atpl",
    "dgca",
    "flight school",
    "aviation career",
    "commercial pilot",
    "airline pilot",
    "flight instructor",
    "aircraft systems",
    "navigation",
    "meteorology",
    "safety",
    "regulations",
    "exam preparation",
    "pilot license",
    "flying",
    "aviation industry",
    "pilot job",
    "flight training",
];

/// Whole words that may top up tags or stand in for a focus keyword.
pub const AVIATION_WORDS: [&str; 7] = [
    "pilot", "aviation", "aircraft", "flight", "dgca", "cpl", "atpl",
];

/// Focus keyword candidates, highest priority first.
pub const FOCUS_KEYWORD_PRIORITY: [&str; 12] = [
    "pilot training",
    "dgca exam",
    "commercial pilot",
    "flight training",
    "aviation career",
    "pilot license",
    "cpl training",
    "atpl training",
    "aviation safety",
    "pilot job",
    "flight instructor",
    "aircraft systems",
];

pub const DEFAULT_FOCUS_KEYWORD: &str = "pilot training";

pub struct CategoryRule {
    pub category: &'static str,
    pub cues: &'static [&'static str],
}

/// First rule with a matching cue decides the category.
pub const CATEGORY_RULES: [CategoryRule; 8] = [
    CategoryRule {
        category: "DGCA Exams",
        cues: &["dgca", "exam", "test", "preparation"],
    },
    CategoryRule {
        category: "Safety & Regulations",
        cues: &["safety", "regulation", "procedure"],
    },
    CategoryRule {
        category: "Aviation Careers",
        cues: &["career", "job", "salary", "opportunity"],
    },
    CategoryRule {
        category: "Flight Training",
        cues: &["training", "course", "lesson", "instructor"],
    },
    CategoryRule {
        category: "Pilot Licensing",
        cues: &["license", "cpl", "atpl", "rating"],
    },
    CategoryRule {
        category: "Aircraft Systems",
        cues: &["system", "aircraft", "engine", "avionics"],
    },
    CategoryRule {
        category: "Navigation",
        cues: &["navigation", "gps", "ils", "approach"],
    },
    CategoryRule {
        category: "Weather & Meteorology",
        cues: &["weather", "meteorology", "turbulence", "wind"],
    },
];

pub const FALLBACK_CATEGORY: &str = "Aviation Industry";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instructor {
    pub name: &'static str,
    pub image: &'static str,
}

pub const DEFAULT_INSTRUCTOR: Instructor = Instructor {
    name: "Aman Suryavanshi",
    image: "/instructors/aman-suryavanshi.jpg",
};

/// Instructors picked when one of their cues appears in the body, in order.
pub const CUED_INSTRUCTORS: [(Instructor, &[&str]); 3] = [
    (
        Instructor {
            name: "Ankit Kumar",
            image: "/instructors/ankit-kumar.jpg",
        },
        &["ankit kumar", "ground school"],
    ),
    (
        Instructor {
            name: "Dhruv Shirkoli",
            image: "/instructors/dhruv-shirkoli.jpg",
        },
        &["dhruv shirkoli", "safety"],
    ),
    (
        Instructor {
            name: "Saksham Khandelwal",
            image: "/instructors/saksham-khandelwal.jpg",
        },
        &["saksham khandelwal", "exam"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_terms_are_lowercase() {
        for term in KEYWORD_TERMS.iter().chain(TAG_VOCABULARY.iter()) {
            assert_eq!(*term, term.to_lowercase(), "`{term}` must be lowercase");
        }
    }

    #[test]
    fn credential_matching_is_case_insensitive() {
        let text = "preparing for the dgca commercial pilot license written exams";
        let matched: Vec<&str> = CREDENTIAL_ENTITIES
            .iter()
            .filter(|entity| entity.matches(text))
            .map(|entity| entity.name)
            .collect();
        assert_eq!(matched, vec!["DGCA", "Commercial Pilot License"]);
    }
}
