use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind of a single edit operation
///
/// The declaration order is also the order used when listing tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// Units are equal, no cost
    Match,
    /// One unit replaced by another
    Substitute,
    /// Unit present only in the target
    Insert,
    /// Unit present only in the source
    Delete,
    /// Two adjacent units swapped
    Transpose,
}

impl EditKind {
    /// One-letter symbol used in tallies and compact output
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Match => 'M',
            Self::Substitute => 'S',
            Self::Insert => 'I',
            Self::Delete => 'D',
            Self::Transpose => 'T',
        }
    }

    /// Whether this operation changes the sequence
    #[must_use]
    pub fn is_edit(self) -> bool {
        !matches!(self, Self::Match)
    }

    /// Number of units consumed from the source and target sequences
    #[must_use]
    pub fn span(self) -> (usize, usize) {
        match self {
            Self::Match | Self::Substitute => (1, 1),
            Self::Insert => (0, 1),
            Self::Delete => (1, 0),
            Self::Transpose => (2, 2),
        }
    }
}

impl std::fmt::Display for EditKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match => write!(f, "match"),
            Self::Substitute => write!(f, "substitution"),
            Self::Insert => write!(f, "insertion"),
            Self::Delete => write!(f, "deletion"),
            Self::Transpose => write!(f, "transposition"),
        }
    }
}

/// One step of a reconstructed alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp<T> {
    pub kind: EditKind,

    /// Index into the source of the first consumed unit (insertion point for inserts)
    pub source_pos: usize,

    /// Index into the target of the first produced unit (deletion point for deletes)
    pub target_pos: usize,

    /// Units consumed from the source, in order
    pub source: Vec<T>,

    /// Units produced in the target, in order
    pub target: Vec<T>,
}

impl<T> EditOp<T> {
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.kind.is_edit()
    }
}

/// Rebuild the target sequence from an ordered list of edits.
#[must_use]
pub fn apply_edits<T: Clone>(ops: &[EditOp<T>]) -> Vec<T> {
    ops.iter().flat_map(|op| op.target.iter().cloned()).collect()
}

/// Rebuild the source sequence from an ordered list of edits.
#[must_use]
pub fn source_of<T: Clone>(ops: &[EditOp<T>]) -> Vec<T> {
    ops.iter().flat_map(|op| op.source.iter().cloned()).collect()
}

/// Per-operation counts for a reconstructed alignment
///
/// Edits are counted per [`EditKind`]; matches are counted per matched unit.
/// `total` is the weighted distance of the alignment, which only equals the
/// number of edits when every weight is 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditTally<T: Ord> {
    /// Substitute, insert, delete and transpose counts
    pub edits: BTreeMap<EditKind, usize>,

    /// Match counts keyed by the matched unit
    pub matches: BTreeMap<T, usize>,

    /// Weighted distance
    pub total: f64,
}

impl<T: Ord> Default for EditTally<T> {
    fn default() -> Self {
        Self {
            edits: BTreeMap::new(),
            matches: BTreeMap::new(),
            total: 0.0,
        }
    }
}

impl<T: Ord + Clone> EditTally<T> {
    /// Record one step of an alignment
    pub fn record(&mut self, op: &EditOp<T>) {
        if op.kind == EditKind::Match {
            if let Some(unit) = op.source.first() {
                *self.matches.entry(unit.clone()).or_insert(0) += 1;
            }
        } else {
            *self.edits.entry(op.kind).or_insert(0) += 1;
        }
    }
}

impl<T: Ord> EditTally<T> {
    /// Count for one kind. For [`EditKind::Match`] this sums over all units.
    #[must_use]
    pub fn count(&self, kind: EditKind) -> usize {
        match kind {
            EditKind::Match => self.match_count(),
            _ => self.edits.get(&kind).copied().unwrap_or(0),
        }
    }

    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.values().sum()
    }

    #[must_use]
    pub fn edit_count(&self) -> usize {
        self.edits.values().sum()
    }

    /// Number of alignment steps, matches included
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.match_count() + self.edit_count()
    }
}
