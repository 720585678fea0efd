//! Core data types for weighted edit distance.
//!
//! - [`WeightConfig`]: Per-operation costs (substitution, deletion, insertion, transposition)
//! - [`EditKind`], [`EditOp`]: One step of a reconstructed alignment
//! - [`EditTally`]: Per-kind edit counts, per-unit match counts and the weighted total
//!
//! ## Operation Symbols
//!
//! | Kind       | Symbol | Source units | Target units |
//! |------------|--------|--------------|--------------|
//! | Match      | M      | 1            | 1            |
//! | Substitute | S      | 1            | 1            |
//! | Insert     | I      | 0            | 1            |
//! | Delete     | D      | 1            | 0            |
//! | Transpose  | T      | 2            | 2            |

pub mod edit;
pub mod weights;

pub use edit::{apply_edits, source_of, EditKind, EditOp, EditTally};
pub use weights::{WeightConfig, WeightError};
