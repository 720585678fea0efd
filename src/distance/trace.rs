use serde::Serialize;

use crate::core::edit::{apply_edits, EditOp, EditTally};
use crate::distance::table::CostTable;

/// Reconstructed alignment: ordered operations plus their tally
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace<T: Ord> {
    /// Operations in front-to-back order
    pub ops: Vec<EditOp<T>>,
    pub tally: EditTally<T>,
}

impl<T: Ord + Clone> Trace<T> {
    /// Weighted distance of this alignment
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.tally.total
    }

    /// The target sequence produced by applying every operation
    #[must_use]
    pub fn target(&self) -> Vec<T> {
        apply_edits(&self.ops)
    }

    /// Only the operations that change the sequence
    pub fn edits(&self) -> impl Iterator<Item = &EditOp<T>> {
        self.ops.iter().filter(|op| op.is_edit())
    }
}

/// Walk backpointers from the bottom-right cell to the origin.
///
/// `table` must have been built from `source` and `target`.
#[must_use]
pub fn reconstruct<T: Clone + Ord>(table: &CostTable, source: &[T], target: &[T]) -> Trace<T> {
    debug_assert_eq!(table.rows(), source.len() + 1);
    debug_assert_eq!(table.cols(), target.len() + 1);

    let (mut i, mut j) = (source.len(), target.len());
    let mut ops = Vec::with_capacity(i.max(j));

    while let Some(kind) = table.cell(i, j).op {
        let (di, dj) = kind.span();
        ops.push(EditOp {
            kind,
            source_pos: i - di,
            target_pos: j - dj,
            source: source[i - di..i].to_vec(),
            target: target[j - dj..j].to_vec(),
        });
        i -= di;
        j -= dj;
    }
    ops.reverse();

    let mut tally = EditTally {
        total: table.distance(),
        ..EditTally::default()
    };
    for op in &ops {
        tally.record(op);
    }

    Trace { ops, tally }
}
