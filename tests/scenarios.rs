//! End-to-end screening scenarios exercising the documented behavior of the
//! detector, scorer, policy, and gate together.

use chrono::{TimeZone, Utc};
use thesis_screen::{
    analyze, derive_status, ConfigError, CorpusDocument, DetectConfig, InMemoryCorpus,
    NormalizeConfig, RiskLevel, ScreeningPipeline, SimilarityConfig, SimilarityMatch,
    SimilarityScorer, ThresholdStore, Thresholds,
};

fn corpus_doc(id: &str, text: &str) -> CorpusDocument {
    CorpusDocument {
        id: id.to_string(),
        title: format!("Mémoire {id}"),
        author: "D. Martin".to_string(),
        submitted_at: Utc.with_ymd_and_hms(2023, 6, 30, 16, 45, 0).unwrap(),
        text: text.to_string(),
    }
}

/// Five sentences sharing a near-duplicate opening phrase, every other
/// signal left neutral: the repetition sub-score alone must cross 50 and,
/// under the default weights, push the final percentage above 15.
#[test]
fn repeated_openings_alone_raise_the_final_score() {
    let text = "Il est important de souligner le cadre théorique retenu. \
        Il est important de souligner la taille de l'échantillon. \
        Il est important de souligner le choix des variables. \
        Il est important de souligner les biais possibles. \
        Il est important de souligner la portée des résultats.";

    let result = analyze(text, &DetectConfig::default()).unwrap();

    assert!(
        result.patterns.repetition > 50,
        "repetition sub-score {} must exceed 50",
        result.patterns.repetition
    );
    assert!(
        result.ai_percentage > 15,
        "final score {} must exceed 15",
        result.ai_percentage
    );
}

/// A candidate identical to one of three corpus documents: exactly one
/// match at 100%, the other two below, and an overall danger status under
/// the default thresholds.
#[test]
fn identical_candidate_among_three_corpus_documents() {
    let candidate = "Cette thèse analyse les réseaux de chaleur urbains et propose un \
        schéma directeur pour leur extension dans les villes moyennes.";
    let corpus = vec![
        corpus_doc("one", "Méthodes spectrales pour les équations de transport."),
        corpus_doc("two", candidate),
        corpus_doc("three", "Impact des politiques tarifaires sur la mobilité douce."),
    ];

    let scorer = SimilarityScorer::new(
        SimilarityConfig::default(),
        NormalizeConfig::default(),
    );
    let matches = scorer.score(candidate, &corpus).unwrap();

    assert_eq!(matches.len(), 3);
    let perfect: Vec<&SimilarityMatch> =
        matches.iter().filter(|m| m.percentage == 100.0).collect();
    assert_eq!(perfect.len(), 1);
    assert_eq!(perfect[0].doc_id, "two");
    assert!(matches.iter().filter(|m| m.doc_id != "two").all(|m| m.percentage < 100.0));

    let status = derive_status(&matches, &Thresholds::default());
    assert_eq!(status.level, RiskLevel::Danger);
}

/// warning=40, danger=70, maximum similarity 55 → warning.
#[test]
fn mid_band_similarity_classifies_as_warning() {
    let thresholds = Thresholds::new(40.0, 70.0).unwrap();
    let matches = vec![SimilarityMatch {
        doc_id: "mid".into(),
        title: "Mémoire mid".into(),
        author: "D. Martin".into(),
        submitted_at: Utc.with_ymd_and_hms(2023, 6, 30, 16, 45, 0).unwrap(),
        percentage: 55.0,
    }];

    let status = derive_status(&matches, &thresholds);

    assert_eq!(status.level, RiskLevel::Warning);
    assert_eq!(status.percentage, 55.0);
}

/// An empty corpus is not an error: no matches, 0%, success.
#[test]
fn empty_corpus_screens_clean() {
    let pipeline = ScreeningPipeline::with_defaults();
    let verdict = pipeline
        .screen_text(
            "Un texte original sans aucun document de comparaison disponible pour l'instant.",
            &InMemoryCorpus::default(),
        )
        .unwrap();

    assert!(verdict.allowed);
    let report = verdict.similarity.expect("similarity ran");
    assert!(report.matches.is_empty());
    assert_eq!(report.status.percentage, 0.0);
    assert_eq!(report.status.level, RiskLevel::Success);
}

/// warning=80 / danger=50 is rejected, and a subsequent read returns the
/// previous valid pair unchanged.
#[test]
fn inverted_threshold_update_is_rejected_atomically() {
    let store = ThresholdStore::default();
    let before = store.get();

    let res = store.update(Thresholds {
        warning: 80.0,
        danger: 50.0,
    });

    assert!(matches!(res, Err(ConfigError::InvertedPair { .. })));
    assert_eq!(store.get(), before);
}
