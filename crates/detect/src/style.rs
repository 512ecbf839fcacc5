//! Reference writing-style classification.
//!
//! Each style in [`STYLE_TABLE`] accumulates one point per signature-phrase
//! occurrence and two per structural-pattern match in the lowercased text.
//! The style with the highest score is reported.
//!
//! Tie-break is pinned: the table is scanned in declaration order and a later
//! style only wins with a strictly higher score, so ties resolve to the
//! earlier entry. Reordering the table is a behavioral change.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Dominant writing style detected in the text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AiStyle {
    Academic,
    Technical,
    Conversational,
    Marketing,
    Unknown,
}

impl AiStyle {
    pub fn label(&self) -> &'static str {
        match self {
            AiStyle::Academic => "academic",
            AiStyle::Technical => "technical",
            AiStyle::Conversational => "conversational",
            AiStyle::Marketing => "marketing",
            AiStyle::Unknown => "unknown",
        }
    }
}

struct StyleProfile {
    style: AiStyle,
    phrases: &'static [&'static str],
    patterns: &'static [&'static str],
}

/// Declaration order is the tie-break priority order.
static STYLE_TABLE: &[StyleProfile] = &[
    StyleProfile {
        style: AiStyle::Academic,
        phrases: &[
            "in this paper",
            "this study",
            "the results show",
            "previous research",
            "the literature",
            "dans ce mémoire",
            "cette étude",
            "les résultats montrent",
            "la littérature",
            "selon les auteurs",
        ],
        patterns: &[r"\(\d{4}\)", r"\bet al\.?", r"\b(figure|tableau|table) \d+\b"],
    },
    StyleProfile {
        style: AiStyle::Technical,
        phrases: &[
            "the system",
            "the implementation",
            "the algorithm",
            "the architecture",
            "le système",
            "la mise en œuvre",
            "l'algorithme",
            "l'architecture",
            "la base de données",
        ],
        patterns: &[r"\b[a-z_]+\(\)", r"\bapi\b", r"\bhttps?://"],
    },
    StyleProfile {
        style: AiStyle::Conversational,
        phrases: &[
            "you might",
            "let's",
            "you know",
            "i think",
            "as you can see",
            "vous pouvez",
            "on peut dire",
            "n'est-ce pas",
            "voyons voir",
        ],
        patterns: &[r"\b(you|your)\b", r"\?"],
    },
    StyleProfile {
        style: AiStyle::Marketing,
        phrases: &[
            "cutting-edge",
            "game-changing",
            "revolutionary",
            "seamless",
            "unlock",
            "best-in-class",
            "innovant",
            "révolutionnaire",
            "incontournable",
        ],
        patterns: &[r"!{2,}", r"\b100\s?%", r"\bgarantie?s?\b"],
    },
];

static STYLE_PATTERNS: Lazy<Vec<Vec<Regex>>> = Lazy::new(|| {
    STYLE_TABLE
        .iter()
        .map(|profile| {
            profile
                .patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect()
        })
        .collect()
});

/// Classify the dominant style of the text, or [`AiStyle::Unknown`] when no
/// style scores at all.
pub fn classify_style(text: &str) -> AiStyle {
    let lower = text.to_lowercase();

    let mut best_style = AiStyle::Unknown;
    let mut best_score = 0usize;
    for (profile, patterns) in STYLE_TABLE.iter().zip(STYLE_PATTERNS.iter()) {
        let phrase_score: usize = profile
            .phrases
            .iter()
            .map(|phrase| lower.matches(phrase).count())
            .sum();
        let pattern_score: usize = patterns.iter().map(|re| re.find_iter(&lower).count()).sum();
        let score = phrase_score + 2 * pattern_score;
        // Strictly greater: ties keep the earlier table entry.
        if score > best_score {
            best_score = score;
            best_style = profile.style;
        }
    }
    best_style
}
