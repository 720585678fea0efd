//! Weighted edit distance engine and alignment reconstruction.
//!
//! - [`DistanceEngine`]: Validated weights plus the dynamic-programming recurrence
//! - [`CostTable`]: Dense cost grid with one backpointer per cell
//! - [`Trace`]: Ordered [`EditOp`](crate::core::EditOp)s and their [`EditTally`](crate::core::EditTally)
//!
//! ## Recurrence
//!
//! ```text
//! cost[i][0] = i * deletion
//! cost[0][j] = j * insertion
//! cost[i][j] = min(
//!     cost[i-1][j-1]                      if a[i-1] == b[j-1]   (match)
//!     cost[i-2][j-2] + transposition      if adjacent swap      (transpose)
//!     cost[i-1][j-1] + substitution       if a[i-1] != b[j-1]   (substitute)
//!     cost[i-1][j]   + deletion                                 (delete)
//!     cost[i][j-1]   + insertion                                (insert)
//! )
//! ```
//!
//! Ties go to the earliest candidate in the list above, so traces are
//! reproducible. Transpositions use the restricted (optimal string alignment)
//! form: a transposed pair is never edited again.
//!
//! ## Memory
//!
//! [`DistanceEngine::distance`] keeps three rows. [`DistanceEngine::align`]
//! needs the full `(|A|+1) x (|B|+1)` grid; use it only when the trace is wanted.

pub mod engine;
pub mod table;
pub mod trace;

pub use engine::{compute, Computation, DistanceEngine};
pub use table::{CostCell, CostTable};
pub use trace::{reconstruct, Trace};
