//! # edit-solver
//!
//! A library for weighted edit distance with reconstructable alignments, and
//! fuzzy multi-token matching built on top of it.
//!
//! Comparing two texts usually needs more than a number: which characters were
//! substituted, which were inserted or dropped, and whether two neighbours were
//! simply swapped. `edit-solver` computes the minimum-cost transformation under
//! configurable per-operation weights and can hand back the exact operations
//! that achieve it.
//!
//! ## Features
//!
//! - **Weighted costs**: Independent substitution, deletion, insertion and transposition weights
//! - **Damerau-Levenshtein**: Adjacent transpositions count as one edit when a weight is given
//! - **Deterministic traces**: Fixed tie-break order, so the same inputs always give the same alignment
//! - **Split tally**: Edits counted per kind, matches counted per matched unit
//! - **Fuzzy ranking**: Token-level similarity across many candidate strings
//!
//! ## Example
//!
//! ```rust
//! use edit_solver::{DistanceEngine, EditKind, WeightConfig};
//!
//! let engine = DistanceEngine::new(WeightConfig::default()).unwrap();
//! let trace = engine.align_str("Fork Handles", "four candles");
//!
//! assert_eq!(trace.distance(), 4.0);
//! assert_eq!(trace.tally.count(EditKind::Substitute), 4);
//! assert_eq!(trace.tally.matches[&' '], 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Weights, edit operations and tallies
//! - [`distance`]: Cost table, distance engine and trace reconstruction
//! - [`matching`]: Tokenization, scoring and ranking of candidates
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input limits and file loading

pub mod cli;
pub mod core;
pub mod distance;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::edit::{EditKind, EditOp, EditTally};
pub use crate::core::weights::{WeightConfig, WeightError};
pub use distance::engine::{compute, Computation, DistanceEngine};
pub use distance::trace::Trace;
pub use matching::engine::{FuzzyMatcher, Match, MatcherConfig};
pub use matching::scoring::ScoringMode;
