use std::fmt;

use derive_getters::Getters;
use itertools::Itertools;
use serde::Serialize;

use super::{
    aligners::constants::{AlignmentMode, GAP_MARKER},
    sequence::SequencePair,
};

/// The result of aligning sequence `a` against sequence `b`: the two aligned, gap-padded tracks,
/// the score of the cell traceback started from, and the cells visited along the way.
#[derive(Debug, PartialEq, Clone, Getters, Serialize)]
pub struct Alignment {
    /// The aligned tracks.  Both always have the same length.
    aligned: SequencePair,

    /// Alignment score
    score: f64,

    /// The mode used to select the traceback start cell
    mode: AlignmentMode,

    /// The `(row, column)` matrix cells visited, from the first aligned position to the last.
    path: Vec<(usize, usize)>,
}

impl Alignment {
    pub fn new(
        aligned: SequencePair,
        score: f64,
        mode: AlignmentMode,
        path: Vec<(usize, usize)>,
    ) -> Self {
        debug_assert_eq!(aligned.alen(), aligned.blen());
        Self {
            aligned,
            score,
            mode,
            path,
        }
    }

    /// The number of aligned columns.
    pub fn len(&self) -> usize {
        self.aligned.alen()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first cell of the path: the position in the matrix where the alignment begins.
    pub fn start(&self) -> (usize, usize) {
        self.path.first().copied().unwrap_or((0, 0))
    }

    /// The last cell of the path: the position in the matrix where the alignment ends.
    pub fn end(&self) -> (usize, usize) {
        self.path.last().copied().unwrap_or((0, 0))
    }

    fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned
            .a
            .iter()
            .copied()
            .zip(self.aligned.b.iter().copied())
    }

    /// The number of columns with a gap marker on either track.
    pub fn num_gaps(&self) -> usize {
        self.columns()
            .filter(|&(x, y)| x == GAP_MARKER || y == GAP_MARKER)
            .count()
    }

    /// The number of columns where both tracks carry the same symbol.
    pub fn num_matches(&self) -> usize {
        self.columns()
            .filter(|&(x, y)| x == y && x != GAP_MARKER)
            .count()
    }

    /// The fraction of aligned columns that are matches, or zero for an empty alignment.
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.num_matches() as f64 / self.len() as f64
        }
    }

    /// Consumes the alignment, returning the aligned tracks.
    pub fn into_pair(self) -> SequencePair {
        self.aligned
    }
}

/// Formats the alignment as three lines: track `a`, a match line (`|` match, `.` mismatch), and
/// track `b`.
impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let match_line = self
            .columns()
            .map(|(x, y)| {
                if x == GAP_MARKER || y == GAP_MARKER {
                    ' '
                } else if x == y {
                    '|'
                } else {
                    '.'
                }
            })
            .join("");
        writeln!(f, "{}", String::from_utf8_lossy(&self.aligned.a))?;
        writeln!(f, "{match_line}")?;
        write!(f, "{}", String::from_utf8_lossy(&self.aligned.b))
    }
}
