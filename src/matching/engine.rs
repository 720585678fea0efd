use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::weights::{WeightConfig, WeightError};
use crate::distance::engine::DistanceEngine;
use crate::matching::scoring::{
    normalized_similarity, tokenize, CandidateScore, PairScore, ScoreAccumulator, ScoringMode,
    Token,
};

/// Result of matching the query against one candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub query: String,
    pub candidate: String,
    pub score: f64,

    /// Smallest raw distance over the compared pairs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_distance: Option<f64>,
}

/// Default multiplier applied to every candidate score
pub const DEFAULT_SCORE_SCALE: f64 = 1.0;

/// Configuration for the fuzzy matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Edit weights used for every pair comparison
    pub weights: WeightConfig,

    /// Distance cutoff: candidates whose closest pair is farther than this are dropped
    pub min_distance: Option<f64>,

    pub mode: ScoringMode,

    /// Similarity contributions below this count as 0
    pub similarity_threshold: Option<f64>,

    /// Multiplier applied to every candidate score
    pub score_scale: f64,

    /// Leave candidates scoring exactly 0 out of the results
    pub drop_zero_scores: bool,

    /// Lower-case query and candidates before scoring; results keep the original text
    #[serde(default)]
    pub ignore_case: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            weights: WeightConfig::default(),
            min_distance: None,
            mode: ScoringMode::default(),
            similarity_threshold: None,
            score_scale: DEFAULT_SCORE_SCALE,
            drop_zero_scores: false,
            ignore_case: false,
        }
    }
}

impl MatcherConfig {
    #[must_use]
    pub fn with_weights(weights: WeightConfig) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }
}

/// Rank `candidates` against `query` with the default best-token scoring.
///
/// # Errors
///
/// Returns [`WeightError::InvalidWeight`] if any weight is negative or not finite.
pub fn run<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    weights: &WeightConfig,
    min_distance: Option<f64>,
) -> Result<Vec<Match>, WeightError> {
    let config = MatcherConfig {
        min_distance,
        ..MatcherConfig::with_weights(*weights)
    };
    Ok(FuzzyMatcher::new(config)?.run(query, candidates))
}

/// Multi-token fuzzy matcher built on [`DistanceEngine`]
pub struct FuzzyMatcher {
    engine: DistanceEngine,
    config: MatcherConfig,
}

impl FuzzyMatcher {
    /// # Errors
    ///
    /// Returns [`WeightError::InvalidWeight`] if any weight is negative or not finite.
    pub fn new(config: MatcherConfig) -> Result<Self, WeightError> {
        let engine = DistanceEngine::new(config.weights)?;
        Ok(Self { engine, config })
    }

    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Score every candidate, filter, and sort by descending score.
    ///
    /// Ties keep the input order.
    pub fn run<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<Match> {
        let folded = self.fold(query);
        let query_tokens = tokenize(&folded);

        let mut results: Vec<Match> = candidates
            .iter()
            .map(AsRef::as_ref)
            .filter_map(|candidate| {
                let scored = self.score_tokens(&folded, &query_tokens, &self.fold(candidate));
                self.keep(&scored).then(|| Match {
                    query: query.to_string(),
                    candidate: candidate.to_string(),
                    score: scored.score,
                    best_distance: scored.best_distance,
                })
            })
            .collect();

        // Sort by score descending; sort_by is stable
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            candidates = candidates.len(),
            kept = results.len(),
            mode = ?self.config.mode,
            "Fuzzy match complete"
        );

        results
    }

    /// Score a single candidate without filtering
    #[must_use]
    pub fn score(&self, query: &str, candidate: &str) -> CandidateScore {
        let folded = self.fold(query);
        self.score_tokens(&folded, &tokenize(&folded), &self.fold(candidate))
    }

    fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.ignore_case {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        }
    }

    fn score_tokens(
        &self,
        query: &str,
        query_tokens: &[Token<'_>],
        candidate: &str,
    ) -> CandidateScore {
        let mut acc = ScoreAccumulator::new(self.config.similarity_threshold);

        match self.config.mode {
            ScoringMode::BestToken => {
                let candidate_tokens = tokenize(candidate);
                for q in query_tokens {
                    // Cheapest candidate token wins; the first one on ties
                    let closest = candidate_tokens
                        .iter()
                        .map(|c| PairScore::calculate(&self.engine, q, c))
                        .inspect(|pair| acc.observe(pair.distance))
                        .reduce(|best, pair| {
                            if pair.distance < best.distance {
                                pair
                            } else {
                                best
                            }
                        });
                    if let Some(pair) = closest {
                        acc.add(pair.similarity);
                    }
                }
            }
            ScoringMode::AllPairs => {
                let candidate_tokens = tokenize(candidate);
                for q in query_tokens {
                    for c in &candidate_tokens {
                        let pair = PairScore::calculate_with_shortcuts(&self.engine, q, c);
                        acc.observe(pair.distance);
                        acc.add(pair.similarity);
                    }
                }
            }
            ScoringMode::WholeString => {
                let source: Vec<char> = join_tokens(query).chars().collect();
                let target: Vec<char> = join_tokens(candidate).chars().collect();
                let distance = self.engine.distance(&source, &target);
                acc.observe(distance);
                acc.add(normalized_similarity(distance, source.len(), target.len()));
            }
        }

        acc.finish(self.config.score_scale)
    }

    fn keep(&self, scored: &CandidateScore) -> bool {
        if let Some(cutoff) = self.config.min_distance {
            if !scored.best_distance.is_some_and(|d| d <= cutoff) {
                return false;
            }
        }
        !(self.config.drop_zero_scores && scored.score == 0.0)
    }
}

/// Collapse runs of whitespace so whole-string comparison ignores spacing
fn join_tokens(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
