use serde::{Deserialize, Serialize};

use crate::distance::engine::DistanceEngine;

/// Safely convert usize to f64 for similarity normalization
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// How a query is compared against a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Each query token is scored against its cheapest candidate token; scores are summed
    #[default]
    BestToken,
    /// Every query token is scored against every candidate token; scores are summed.
    /// Tokens with no unit in common score 0 and tokens contained in one another score 1.
    AllPairs,
    /// Query and candidate are compared as single sequences
    WholeString,
}

/// A whitespace-delimited token and its characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub units: Vec<char>,
}

impl<'a> Token<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            units: text.chars().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn shares_unit_with(&self, other: &Token<'_>) -> bool {
        self.units.iter().any(|unit| other.units.contains(unit))
    }

    fn contains_or_within(&self, other: &Token<'_>) -> bool {
        self.text.contains(other.text) || other.text.contains(self.text)
    }
}

/// Split on whitespace; empty tokens never appear.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace().map(Token::new).collect()
}

/// `1 - distance / max(source_len, target_len)`, or 1 when both are empty.
///
/// Not clamped: weights above 1 can make the result negative.
#[must_use]
pub fn normalized_similarity(distance: f64, source_len: usize, target_len: usize) -> f64 {
    let longest = source_len.max(target_len);
    if longest == 0 {
        1.0
    } else {
        1.0 - distance / count_to_f64(longest)
    }
}

/// Raw distance and normalized similarity of one token pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    pub distance: f64,
    pub similarity: f64,
}

impl PairScore {
    /// Score a pair by edit distance alone
    #[must_use]
    pub fn calculate(engine: &DistanceEngine, source: &Token<'_>, target: &Token<'_>) -> Self {
        let distance = engine.distance(&source.units, &target.units);
        Self {
            distance,
            similarity: normalized_similarity(distance, source.len(), target.len()),
        }
    }

    /// Score a pair with the disjoint/containment shortcuts of [`ScoringMode::AllPairs`]
    #[must_use]
    pub fn calculate_with_shortcuts(
        engine: &DistanceEngine,
        source: &Token<'_>,
        target: &Token<'_>,
    ) -> Self {
        let mut score = Self::calculate(engine, source, target);
        if !source.shares_unit_with(target) {
            score.similarity = 0.0;
        } else if source.contains_or_within(target) {
            score.similarity = 1.0;
        }
        score
    }
}

/// Aggregated score of one candidate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    /// Summed (and scaled) similarity
    pub score: f64,

    /// Smallest raw distance over every scored pair; `None` when nothing was compared
    pub best_distance: Option<f64>,
}

/// Accumulates pair scores into a [`CandidateScore`]
#[derive(Debug, Default)]
pub(crate) struct ScoreAccumulator {
    sum: f64,
    best_distance: Option<f64>,
    threshold: Option<f64>,
}

impl ScoreAccumulator {
    pub(crate) fn new(threshold: Option<f64>) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Track a compared pair's distance without adding to the score
    pub(crate) fn observe(&mut self, distance: f64) {
        self.best_distance = Some(self.best_distance.map_or(distance, |d| d.min(distance)));
    }

    /// Add one contribution; contributions below the threshold count as 0
    pub(crate) fn add(&mut self, similarity: f64) {
        match self.threshold {
            Some(threshold) if similarity < threshold => {}
            _ => self.sum += similarity,
        }
    }

    pub(crate) fn finish(self, scale: f64) -> CandidateScore {
        CandidateScore {
            score: self.sum * scale,
            best_distance: self.best_distance,
        }
    }
}
