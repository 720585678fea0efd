//! Fuzzy multi-token matching on top of the distance engine.
//!
//! - [`FuzzyMatcher`]: Scores a query against candidate strings and ranks them
//! - [`MatcherConfig`]: Weights, scoring mode, cutoff, threshold and scale
//! - [`Match`]: One ranked query/candidate pair
//!
//! ## Scoring
//!
//! Query and candidates are split on whitespace. Each compared token pair gets
//! a normalized similarity `1 - d / max(len_a, len_b)`, where `d` is the
//! weighted edit distance. In the default [`ScoringMode::BestToken`] mode a
//! query token is paired with the candidate token it costs least to edit into
//! (the first such token on ties) and contributes that pair's similarity. A
//! candidate's score is the sum of those contributions, so a candidate
//! containing every query token scores the number of query tokens.
//!
//! ## Example
//!
//! ```rust
//! use edit_solver::core::WeightConfig;
//! use edit_solver::matching::run;
//!
//! let matches = run("abc", &["acb", "xxx"], &WeightConfig::default(), None).unwrap();
//! assert_eq!(matches[0].candidate, "acb");
//! ```

pub mod engine;
pub mod scoring;

pub use engine::{run, FuzzyMatcher, Match, MatcherConfig, DEFAULT_SCORE_SCALE};
pub use scoring::{
    normalized_similarity, tokenize, CandidateScore, PairScore, ScoringMode, Token,
};
