//! The four writing-pattern signals.
//!
//! Each signal is an isolated pure function over the prepared text, returning
//! a bounded score in [0, 100]. The weighting that combines them lives in
//! the detector, so individual signals can be tuned or replaced without
//! touching the others. Lexicons carry French and English entries: the
//! submission corpus is francophone-first, but extracted theses routinely mix
//! in English sections.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::{sentence_opening, words};

static TEMPLATE_PHRASE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bil est (important|essentiel|crucial|nécessaire) de\b",
        r"(?i)\bit is (important|essential|crucial|necessary) to\b",
        r"(?i)\bthis is (important|essential) because\b",
        r"(?i)\bnous (pouvons|devons) (voir|noter|constater) que\b",
        r"(?i)\bwe can (see|note|observe) that\b",
        r"(?i)\bcela (montre|signifie|implique) que\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Duplicate sentence openings plus templated phrasings.
///
/// Score rises stepwise as the repeat count of the most common opening
/// crosses 2 and 3, with smaller bumps for each additional repeated opening
/// and each templated-phrase hit.
pub fn repetition_score(sentences: &[String], opening_prefix_chars: usize) -> u8 {
    if sentences.is_empty() {
        return 0;
    }

    let mut openings: HashMap<String, usize> = HashMap::new();
    for sentence in sentences {
        let opening = sentence_opening(sentence, opening_prefix_chars);
        if !opening.is_empty() {
            *openings.entry(opening).or_insert(0) += 1;
        }
    }

    let max_repeat = openings.values().copied().max().unwrap_or(0);
    let mut score: u32 = match max_repeat {
        0 | 1 => 0,
        2 => 20,
        3 => 45,
        _ => 70,
    };

    // Every repeated opening beyond the most common one is its own tell.
    let repeated_openings = openings.values().filter(|&&c| c >= 2).count();
    if repeated_openings > 1 {
        score += 10 * (repeated_openings as u32 - 1).min(3);
    }

    let full_text = sentences.join(". ");
    let template_hits: usize = TEMPLATE_PHRASE_RES
        .iter()
        .map(|re| re.find_iter(&full_text).count())
        .sum();
    score += 8 * (template_hits as u32).min(5);

    score.min(100) as u8
}

static SIMPLE_CONSTRUCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(c'est|ce sont|il y a|il s'agit|this is|these are|there (is|are)|it is)\b")
        .unwrap()
});

/// Sentence-length uniformity.
///
/// Low variance of word counts raises the score, as does a mean length
/// outside the normal prose band and a high share of simple
/// copula/demonstrative constructions.
pub fn structure_score(sentences: &[String]) -> u8 {
    if sentences.is_empty() {
        return 0;
    }

    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| s.split_whitespace().count() as f64)
        .collect();
    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    if mean <= 0.0 {
        return 0;
    }

    let mut score: u32 = 0;

    // Variance needs enough sentences to mean anything.
    if sentences.len() >= 4 {
        let variance =
            lengths.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
        let cv = variance.sqrt() / mean;
        if cv < 0.2 {
            score += 45;
        } else if cv < 0.35 {
            score += 25;
        } else if cv < 0.5 {
            score += 10;
        }
    }

    if !(8.0..=30.0).contains(&mean) {
        score += 30;
    } else if !(10.0..=25.0).contains(&mean) {
        score += 15;
    }

    let simple = sentences
        .iter()
        .filter(|s| SIMPLE_CONSTRUCTION_RE.is_match(s))
        .count();
    let simple_ratio = simple as f64 / sentences.len() as f64;
    if simple_ratio > 0.5 {
        score += 25;
    } else if simple_ratio > 0.3 {
        score += 12;
    }

    score.min(100) as u8
}

static FORMAL_CONNECTORS: Lazy<std::collections::HashSet<&'static str>> = Lazy::new(|| {
    [
        // English
        "moreover",
        "furthermore",
        "consequently",
        "nevertheless",
        "notwithstanding",
        "additionally",
        "henceforth",
        "thereby",
        // French
        "ainsi",
        "cependant",
        "néanmoins",
        "toutefois",
        "dorénavant",
        "conséquemment",
        "nonobstant",
    ]
    .into_iter()
    .collect()
});

/// Vocabulary diversity.
///
/// A low ratio of unique substantive words (length > 3) raises the score;
/// over-represented formal connectors and heavily repeated words add to it.
pub fn vocabulary_score(text: &str) -> u8 {
    let all_words = words(text);
    if all_words.is_empty() {
        return 0;
    }

    let substantive: Vec<&String> = all_words.iter().filter(|w| w.chars().count() > 3).collect();
    if substantive.is_empty() {
        return 0;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for w in &substantive {
        *counts.entry(w.as_str()).or_insert(0) += 1;
    }

    let unique_ratio = counts.len() as f64 / substantive.len() as f64;
    let mut score: u32 = if unique_ratio < 0.3 {
        50
    } else if unique_ratio < 0.45 {
        30
    } else if unique_ratio < 0.6 {
        15
    } else {
        0
    };

    let connector_hits = all_words
        .iter()
        .filter(|w| FORMAL_CONNECTORS.contains(w.as_str()))
        .count();
    let connector_ratio = connector_hits as f64 / all_words.len() as f64;
    if connector_ratio > 0.02 {
        score += 25;
    } else if connector_ratio > 0.01 {
        score += 12;
    }

    let max_word_count = counts
        .iter()
        .filter(|(w, _)| !FORMAL_CONNECTORS.contains(*w))
        .map(|(_, c)| *c)
        .max()
        .unwrap_or(0);
    if max_word_count >= 10 {
        score += 25;
    } else if max_word_count >= 6 {
        score += 10;
    }

    score.min(100) as u8
}

static TRANSITION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // English
        r"(?i)\bhowever\b",
        r"(?i)\btherefore\b",
        r"(?i)\bmoreover\b",
        r"(?i)\bfurthermore\b",
        r"(?i)\bconsequently\b",
        r"(?i)\bin addition\b",
        r"(?i)\bon the other hand\b",
        r"(?i)\bin conclusion\b",
        r"(?i)\bfirstly\b",
        r"(?i)\bsecondly\b",
        r"(?i)\bfinally\b",
        // French
        r"(?i)\bdonc\b",
        r"(?i)\bcependant\b",
        r"(?i)\bnéanmoins\b",
        r"(?i)\btoutefois\b",
        r"(?i)\ben outre\b",
        r"(?i)\bpar conséquent\b",
        r"(?i)\bde plus\b",
        r"(?i)\bd'abord\b",
        r"(?i)\bensuite\b",
        r"(?i)\benfin\b",
        r"(?i)\ben conclusion\b",
        r"(?i)\bpar ailleurs\b",
        r"(?i)\ben effet\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Transition-word density per sentence, scored in steps.
pub fn transition_score(text: &str, sentence_count: usize) -> u8 {
    if sentence_count == 0 {
        return 0;
    }

    let hits: usize = TRANSITION_RES
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();
    let density = hits as f64 / sentence_count as f64;

    if density >= 1.0 {
        80
    } else if density >= 0.6 {
        55
    } else if density >= 0.3 {
        30
    } else if density > 0.0 {
        10
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::split_sentences;

    #[test]
    fn repeated_openings_cross_fifty() {
        let text = "Il est important de noter la méthode. \
                    Il est important de noter les résultats. \
                    Il est important de noter les limites. \
                    Il est important de noter la portée. \
                    Il est important de noter la suite.";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 5);
        let score = repetition_score(&sentences, 20);
        assert!(score > 50, "expected > 50, got {score}");
    }

    #[test]
    fn varied_openings_score_low() {
        let text = "La première partie décrit le contexte historique du sujet traité. \
                    Ensuite vient une analyse critique des sources disponibles aujourd'hui. \
                    Notre méthode repose sur un corpus annoté manuellement. \
                    Les résultats contredisent partiellement la littérature existante.";
        let score = repetition_score(&split_sentences(text), 20);
        assert!(score < 30, "expected < 30, got {score}");
    }

    #[test]
    fn repetition_bounded() {
        let sentences: Vec<String> = (0..50)
            .map(|_| "Il est important de noter ce point précis".to_string())
            .collect();
        let score = repetition_score(&sentences, 20);
        assert!(score <= 100);
    }

    #[test]
    fn uniform_sentence_lengths_raise_structure() {
        let sentences: Vec<String> = (0..8)
            .map(|i| format!("Cette phrase numéro {i} contient exactement sept mots"))
            .collect();
        let score = structure_score(&sentences);
        assert!(score >= 45, "expected >= 45, got {score}");
    }

    #[test]
    fn varied_sentence_lengths_score_lower() {
        let sentences = vec![
            "Court.".to_string(),
            "Une phrase de longueur moyenne avec quelques mots de plus pour varier le rythme."
                .to_string(),
            "Celle-ci est franchement très longue car elle accumule des propositions, des \
             incises et des détails qui allongent considérablement son compte de mots au-delà \
             du raisonnable."
                .to_string(),
            "Puis une autre courte.".to_string(),
            "Enfin une phrase de taille intermédiaire qui conclut ce paragraphe d'essai."
                .to_string(),
        ];
        let uniform: Vec<String> = (0..5)
            .map(|i| format!("Cette phrase numéro {i} contient exactement sept mots"))
            .collect();
        assert!(structure_score(&sentences) < structure_score(&uniform));
    }

    #[test]
    fn empty_sentences_score_zero() {
        assert_eq!(structure_score(&[]), 0);
        assert_eq!(repetition_score(&[], 20), 0);
    }

    #[test]
    fn poor_vocabulary_raises_score() {
        let text = "analyse analyse analyse analyse analyse analyse analyse analyse \
                    analyse analyse analyse analyse résultat résultat résultat résultat";
        let score = vocabulary_score(text);
        assert!(score >= 50, "expected >= 50, got {score}");
    }

    #[test]
    fn rich_vocabulary_scores_low() {
        let text = "hydrologie sédiment estuaire turbidité salinité marée courant \
                    bathymétrie modélisation calibration incertitude prélèvement";
        let score = vocabulary_score(text);
        assert!(score <= 15, "expected <= 15, got {score}");
    }

    #[test]
    fn vocabulary_empty_text_scores_zero() {
        assert_eq!(vocabulary_score(""), 0);
        assert_eq!(vocabulary_score("a b c"), 0);
    }

    #[test]
    fn dense_transitions_score_high() {
        let text = "Donc la méthode fonctionne. Cependant des limites existent. \
                    Par conséquent nous ajustons le modèle. Enfin nous concluons.";
        let score = transition_score(text, 4);
        assert_eq!(score, 80);
    }

    #[test]
    fn no_transitions_score_zero() {
        let text = "Le corpus contient trois cents documents annotés manuellement.";
        assert_eq!(transition_score(text, 1), 0);
    }

    #[test]
    fn all_signals_bounded() {
        let text = "Il est important de noter. Il est important de noter. Donc voilà. \
                    Cependant non. De plus oui. Enfin bref. Par conséquent fin.";
        let sentences = split_sentences(text);
        for score in [
            repetition_score(&sentences, 20),
            structure_score(&sentences),
            vocabulary_score(text),
            transition_score(text, sentences.len()),
        ] {
            assert!(score <= 100);
        }
    }
}
