use serde::Serialize;
use tracing::debug;

use crate::core::edit::EditKind;
use crate::core::weights::{WeightConfig, WeightError};
use crate::distance::table::{CostCell, CostTable};
use crate::distance::trace::{reconstruct, Trace};

/// Convert a unit count to a cost multiplier
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Result of a single [`compute`] call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Computation<T: Ord> {
    pub distance: f64,

    /// Present only when a trace was requested
    pub trace: Option<Trace<T>>,
}

/// Compute the weighted edit distance between two sequences.
///
/// With `want_trace` the full cost table is built and the alignment is
/// reconstructed; otherwise only three rows are kept in memory.
///
/// # Errors
///
/// Returns [`WeightError::InvalidWeight`] if any weight is negative or not
/// finite. Nothing is computed in that case.
pub fn compute<T: Clone + Ord>(
    source: &[T],
    target: &[T],
    weights: &WeightConfig,
    want_trace: bool,
) -> Result<Computation<T>, WeightError> {
    let engine = DistanceEngine::new(*weights)?;
    Ok(engine.compute(source, target, want_trace))
}

/// Weighted Levenshtein / Damerau-Levenshtein engine
///
/// Holds a validated [`WeightConfig`]; every computation after construction
/// is infallible. When several operations reach the same minimum cost the
/// backpointer prefers match, then transpose, substitute, delete, insert.
#[derive(Debug, Clone)]
pub struct DistanceEngine {
    weights: WeightConfig,
}

impl DistanceEngine {
    /// # Errors
    ///
    /// Returns [`WeightError::InvalidWeight`] if any weight is negative or not finite.
    pub fn new(weights: WeightConfig) -> Result<Self, WeightError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    #[must_use]
    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Distance, plus the reconstructed alignment when `want_trace` is set
    #[must_use]
    pub fn compute<T: Clone + Ord>(
        &self,
        source: &[T],
        target: &[T],
        want_trace: bool,
    ) -> Computation<T> {
        if want_trace {
            let trace = self.align(source, target);
            Computation {
                distance: trace.distance(),
                trace: Some(trace),
            }
        } else {
            Computation {
                distance: self.distance(source, target),
                trace: None,
            }
        }
    }

    /// Edit distance using rolling rows, without backpointers
    #[must_use]
    pub fn distance<T: PartialEq>(&self, source: &[T], target: &[T]) -> f64 {
        let w = &self.weights;
        let cols = target.len() + 1;

        // Rows i-2, i-1 and i; i-2 is only read for transpositions
        let mut before = vec![0.0; cols];
        let mut prev: Vec<f64> = (0..cols).map(|j| count_to_f64(j) * w.insertion).collect();
        let mut row = vec![0.0; cols];

        for i in 1..=source.len() {
            row[0] = count_to_f64(i) * w.deletion;
            for j in 1..cols {
                let swap = self
                    .transposition_weight(source, target, i, j)
                    .map(|t| before[j - 2] + t);
                row[j] = self
                    .choose(
                        source[i - 1] == target[j - 1],
                        prev[j - 1],
                        prev[j],
                        row[j - 1],
                        swap,
                    )
                    .cost;
            }
            std::mem::swap(&mut before, &mut prev);
            std::mem::swap(&mut prev, &mut row);
        }

        prev[cols - 1]
    }

    /// Full cost table with a backpointer in every cell
    #[must_use]
    pub fn table<T: PartialEq>(&self, source: &[T], target: &[T]) -> CostTable {
        let w = &self.weights;
        debug!(
            rows = source.len() + 1,
            cols = target.len() + 1,
            "Building cost table"
        );

        let mut table = CostTable::new(source.len(), target.len());
        for j in 1..=target.len() {
            table.set(0, j, CostCell::step(count_to_f64(j) * w.insertion, EditKind::Insert));
        }

        for i in 1..=source.len() {
            table.set(i, 0, CostCell::step(count_to_f64(i) * w.deletion, EditKind::Delete));
            for j in 1..=target.len() {
                let swap = self
                    .transposition_weight(source, target, i, j)
                    .map(|t| table.cost(i - 2, j - 2) + t);
                let cell = self.choose(
                    source[i - 1] == target[j - 1],
                    table.cost(i - 1, j - 1),
                    table.cost(i - 1, j),
                    table.cost(i, j - 1),
                    swap,
                );
                table.set(i, j, cell);
            }
        }

        table
    }

    /// Minimum-cost alignment with its per-operation tally
    #[must_use]
    pub fn align<T: Clone + Ord>(&self, source: &[T], target: &[T]) -> Trace<T> {
        let table = self.table(source, target);
        reconstruct(&table, source, target)
    }

    /// [`DistanceEngine::distance`] over the characters of two strings
    #[must_use]
    pub fn distance_str(&self, source: &str, target: &str) -> f64 {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        self.distance(&source, &target)
    }

    /// [`DistanceEngine::align`] over the characters of two strings
    #[must_use]
    pub fn align_str(&self, source: &str, target: &str) -> Trace<char> {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        self.align(&source, &target)
    }

    /// Transposition weight if units `i-1, i` of the source are units `j, j-1` of the target
    fn transposition_weight<T: PartialEq>(
        &self,
        source: &[T],
        target: &[T],
        i: usize,
        j: usize,
    ) -> Option<f64> {
        let weight = self.weights.transposition?;
        (i >= 2
            && j >= 2
            && source[i - 1] == target[j - 2]
            && source[i - 2] == target[j - 1])
            .then_some(weight)
    }

    /// Pick the cheapest candidate for one cell. Candidates are tried in
    /// priority order and only a strictly lower cost replaces the current best.
    fn choose(&self, equal: bool, diag: f64, up: f64, left: f64, swap: Option<f64>) -> CostCell {
        let w = &self.weights;
        let mut best = CostCell {
            cost: f64::INFINITY,
            op: None,
        };

        if equal {
            consider(&mut best, diag, EditKind::Match);
        }
        if let Some(cost) = swap {
            consider(&mut best, cost, EditKind::Transpose);
        }
        if !equal {
            consider(&mut best, diag + w.substitution, EditKind::Substitute);
        }
        consider(&mut best, up + w.deletion, EditKind::Delete);
        consider(&mut best, left + w.insertion, EditKind::Insert);

        best
    }
}

#[inline]
fn consider(best: &mut CostCell, cost: f64, op: EditKind) {
    if cost < best.cost {
        *best = CostCell::step(cost, op);
    }
}
