use log::debug;

use crate::align::{
    aligners::constants::MIN_SCORE, error::AlignError, scoring::Scoring,
    sequence::SequencePair,
};

/// Where the optimal score of a cell was derived from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Predecessor {
    /// The true origin `(0, 0)`; traceback ends here.
    Origin,
    /// The `(row, column)` of the cell this one was derived from.
    From(usize, usize),
}

/// One cell of the alignment matrix.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Cell {
    pub score: f64,
    pub predecessor: Predecessor,
}

/// The boundary edge of the matrix being initialized.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Axis {
    /// Row 0: nothing of `a` consumed, `index` symbols of `b` consumed.
    Row,
    /// Column 0: `index` symbols of `a` consumed, nothing of `b` consumed.
    Column,
}

impl Axis {
    /// The coordinate of the boundary cell at `index` along this edge.
    fn coordinate(self, index: usize) -> (usize, usize) {
        match self {
            Axis::Row => (0, index),
            Axis::Column => (index, 0),
        }
    }
}

/// Dense `(alen + 1) x (blen + 1)` score and backpointer matrix, stored row-major in a single
/// owned buffer.
///
/// A matrix is filled exactly once by [`Matrix::fill`] and is read-only afterwards.
#[derive(Clone, PartialEq, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Reserves space for a `rows x cols` matrix.  No cell is initialized.
    fn with_dimensions(rows: usize, cols: usize) -> Result<Self, AlignError> {
        let len = rows.checked_mul(cols).ok_or_else(|| {
            AlignError::invalid(format!("a {rows}x{cols} matrix overflows the address space"))
        })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| AlignError::Allocation { rows, cols })?;
        Ok(Self { rows, cols, cells })
    }

    /// Builds and fills the matrix for `problem`.
    ///
    /// Cells are written in row-major order, each exactly once: the row 0 boundary first, then
    /// for every following row its column 0 boundary cell followed by its interior cells.
    pub fn fill(problem: &SequencePair, scoring: &Scoring) -> Result<Self, AlignError> {
        let (alen, blen) = (problem.alen(), problem.blen());
        let rows = alen
            .checked_add(1)
            .ok_or_else(|| AlignError::invalid("sequence a is too long"))?;
        let cols = blen
            .checked_add(1)
            .ok_or_else(|| AlignError::invalid("sequence b is too long"))?;
        let mut matrix = Self::with_dimensions(rows, cols)?;
        debug!("Filling a {rows}x{cols} alignment matrix");

        for j in 0..cols {
            matrix.push(Self::boundary_cell(Axis::Row, j, scoring));
        }
        for i in 1..rows {
            matrix.push(Self::boundary_cell(Axis::Column, i, scoring));
            for j in 1..cols {
                let cell = matrix.interior_cell(problem, scoring, i, j);
                matrix.push(cell);
            }
        }
        debug_assert_eq!(matrix.cells.len(), rows * cols);
        Ok(matrix)
    }

    /// The boundary cell at `index` along `axis`.  Each points to the previous cell on the same
    /// edge; the shared corner `(0, 0)` is the origin.
    fn boundary_cell(axis: Axis, index: usize, scoring: &Scoring) -> Cell {
        if index == 0 {
            return Cell {
                score: 0.0,
                predecessor: Predecessor::Origin,
            };
        }
        let (pi, pj) = axis.coordinate(index - 1);
        Cell {
            score: index as f64 * scoring.gap(true),
            predecessor: Predecessor::From(pi, pj),
        }
    }

    /// Computes cell `(i, j)` from its diagonal, up and left neighbors.  Ties prefer the diagonal,
    /// then up, then left.
    fn interior_cell(&self, problem: &SequencePair, scoring: &Scoring, i: usize, j: usize) -> Cell {
        let diagonal =
            self.get(i - 1, j - 1).score + scoring.substitution(problem.a[i - 1], problem.b[j - 1]);
        let up = self.get(i - 1, j).score + scoring.gap(j == problem.blen());
        let left = self.get(i, j - 1).score + scoring.gap(i == problem.alen());

        let mut best = Cell {
            score: diagonal,
            predecessor: Predecessor::From(i - 1, j - 1),
        };
        if up > best.score {
            best = Cell {
                score: up,
                predecessor: Predecessor::From(i - 1, j),
            };
        }
        if left > best.score {
            best = Cell {
                score: left,
                predecessor: Predecessor::From(i, j - 1),
            };
        }
        best
    }

    #[inline(always)]
    fn push(&mut self, cell: Cell) {
        debug_assert!(self.cells.len() < self.rows * self.cols);
        self.cells.push(cell);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> &Cell {
        debug_assert!(i < self.rows);
        debug_assert!(j < self.cols);
        &self.cells[i * self.cols + j]
    }

    /// Returns the coordinate of the highest scoring cell over the whole matrix.  Ties are broken
    /// by the first occurrence in row-major order.
    pub fn best_cell(&self) -> (usize, usize) {
        let mut best_score = MIN_SCORE;
        let mut best_index = 0;
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.score > best_score {
                best_score = cell.score;
                best_index = index;
            }
        }
        (best_index / self.cols, best_index % self.cols)
    }
}
