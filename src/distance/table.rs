use crate::core::edit::EditKind;

/// One entry of the cost table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostCell {
    /// Minimum cost to align the source prefix with the target prefix
    pub cost: f64,

    /// Operation that produced `cost`; the predecessor cell follows from its span.
    /// `None` only at the origin.
    pub op: Option<EditKind>,
}

impl CostCell {
    pub(crate) const ORIGIN: Self = Self { cost: 0.0, op: None };

    pub(crate) fn step(cost: f64, op: EditKind) -> Self {
        Self { cost, op: Some(op) }
    }
}

/// Dense `(source_len + 1) x (target_len + 1)` grid of cost cells, row-major
///
/// Row `i`, column `j` holds the cost of aligning the first `i` source units
/// with the first `j` target units.
#[derive(Debug, Clone)]
pub struct CostTable {
    rows: usize,
    cols: usize,
    cells: Vec<CostCell>,
}

impl CostTable {
    pub(crate) fn new(source_len: usize, target_len: usize) -> Self {
        let rows = source_len + 1;
        let cols = target_len + 1;
        Self {
            rows,
            cols,
            cells: vec![CostCell::ORIGIN; rows * cols],
        }
    }

    /// Number of rows (source length + 1)
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (target length + 1)
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the table.
    #[must_use]
    pub fn cell(&self, i: usize, j: usize) -> &CostCell {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        &self.cells[i * self.cols + j]
    }

    pub(crate) fn cost(&self, i: usize, j: usize) -> f64 {
        self.cell(i, j).cost
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, cell: CostCell) {
        let cols = self.cols;
        self.cells[i * cols + j] = cell;
    }

    /// Cost of the bottom-right cell, i.e. the edit distance
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.cells.last().map_or(0.0, |cell| cell.cost)
    }
}
