use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use normalize::{normalize, NormalizeConfig, NormalizeError};

use crate::config::SimilarityConfig;
use crate::corpus::CorpusDocument;
use crate::error::ScoringError;
use crate::score::jaccard_percentage;
use crate::shingles::shingle_set;

/// One comparison result per corpus document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatch {
    pub doc_id: String,
    pub title: String,
    pub author: String,
    pub submitted_at: DateTime<Utc>,
    /// Jaccard percentage in [0, 100].
    pub percentage: f64,
}

/// Highest percentage in a match list; 0 when the list is empty.
pub fn max_similarity(matches: &[SimilarityMatch]) -> f64 {
    matches
        .iter()
        .map(|m| m.percentage)
        .fold(0.0f64, f64::max)
}

/// Scorer holding the stage configurations.
///
/// Scoring is a pure function of `(candidate_text, corpus, configs)`; the
/// scorer itself carries no mutable state, so one instance can serve
/// concurrent screenings.
pub struct SimilarityScorer {
    cfg: SimilarityConfig,
    normalize_cfg: NormalizeConfig,
}

impl SimilarityScorer {
    pub fn new(cfg: SimilarityConfig, normalize_cfg: NormalizeConfig) -> Self {
        Self { cfg, normalize_cfg }
    }

    /// Score the candidate against every corpus document.
    ///
    /// Returns the complete match list sorted by percentage descending
    /// (ties keep corpus order). An empty corpus produces an empty list.
    pub fn score(
        &self,
        candidate_text: &str,
        corpus: &[CorpusDocument],
    ) -> Result<Vec<SimilarityMatch>, ScoringError> {
        self.cfg.validate()?;

        let candidate = normalize("candidate", candidate_text, &self.normalize_cfg)
            .map_err(candidate_error)?;
        let candidate_set = shingle_set(&candidate.tokens, self.cfg.shingle_k, self.cfg.seed);

        let score_one = |doc: &CorpusDocument| -> Option<SimilarityMatch> {
            // A corpus entry that normalizes to nothing carries no words to
            // compare; it scores zero rather than failing the screening.
            let percentage = match normalize(doc.id.as_str(), &doc.text, &self.normalize_cfg) {
                Ok(other) => {
                    if self.cfg.skip_identical_hash && other.sha256_hex == candidate.sha256_hex {
                        return None;
                    }
                    let other_set =
                        shingle_set(&other.tokens, self.cfg.shingle_k, self.cfg.seed);
                    jaccard_percentage(&candidate_set, &other_set)
                }
                Err(_) => 0.0,
            };
            Some(SimilarityMatch {
                doc_id: doc.id.clone(),
                title: doc.title.clone(),
                author: doc.author.clone(),
                submitted_at: doc.submitted_at,
                percentage,
            })
        };

        let mut matches: Vec<SimilarityMatch> = if self.cfg.use_parallel {
            // Indexed collect keeps corpus order before the final sort, so
            // the parallel path is bit-identical to the sequential one.
            let mut indexed: Vec<(usize, SimilarityMatch)> = corpus
                .par_iter()
                .enumerate()
                .filter_map(|(idx, doc)| score_one(doc).map(|m| (idx, m)))
                .collect();
            indexed.sort_by_key(|(idx, _)| *idx);
            indexed.into_iter().map(|(_, m)| m).collect()
        } else {
            corpus.iter().filter_map(score_one).collect()
        };

        // Stable sort: equal percentages keep corpus order.
        matches.sort_by(|a, b| {
            b.percentage
                .partial_cmp(&a.percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(matches)
    }

    /// Similarity of one text pair. Symmetric and bounded to [0, 100].
    pub fn pair_similarity(&self, a: &str, b: &str) -> Result<f64, ScoringError> {
        self.cfg.validate()?;
        let doc_a = normalize("pair-a", a, &self.normalize_cfg).map_err(candidate_error)?;
        let doc_b = normalize("pair-b", b, &self.normalize_cfg).map_err(candidate_error)?;
        let set_a = shingle_set(&doc_a.tokens, self.cfg.shingle_k, self.cfg.seed);
        let set_b = shingle_set(&doc_b.tokens, self.cfg.shingle_k, self.cfg.seed);
        Ok(jaccard_percentage(&set_a, &set_b))
    }
}

fn candidate_error(err: NormalizeError) -> ScoringError {
    match err {
        NormalizeError::EmptyInput => ScoringError::EmptyCandidate,
        other => ScoringError::InvalidConfig(other.to_string()),
    }
}
