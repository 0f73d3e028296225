pub mod constants;

pub use constants::AlignmentMode;

use anyhow::Result;
use derive_builder::Builder;
use log::debug;

use crate::align::{
    alignment::Alignment, error::AlignError, matrix::Matrix, scoring::Scoring,
    sequence::SequencePair, traceback::traceback,
};

/// Alignment options, built through [`Builder`].
#[derive(Copy, Clone, Debug, Builder)]
#[builder(name = "Builder", build_fn(name = "build_options"))]
pub struct Options {
    #[builder(default)]
    mode: AlignmentMode,
    #[builder(default = "1.0")]
    match_score: f64,
    #[builder(default = "-1.0")]
    mismatch_score: f64,
    #[builder(default = "-1.0")]
    gap_score: f64,
    #[builder(default = "true")]
    free_end_gaps: bool,
}

impl Options {
    fn scoring(&self) -> Scoring {
        Scoring::new(self.match_score, self.mismatch_score, self.gap_score)
            .free_end_gaps(self.free_end_gaps)
    }
}

impl Builder {
    /// Builds an [`Aligner`] from the options set on this builder.
    ///
    /// ```rust
    /// use swalign::align::{AlignmentMode, Builder, SequencePair};
    /// let aligner = Builder::default()
    ///     .mode(AlignmentMode::Local)
    ///     .match_score(2.0)
    ///     .build_aligner()
    ///     .unwrap();
    /// let alignment = aligner.align(&SequencePair::new("TTACGTT", "ACG")).unwrap();
    /// assert_eq!(*alignment.score(), 6.0);
    /// ```
    pub fn build_aligner(&self) -> Result<Aligner> {
        let opts = self.build_options()?;
        let scoring = opts.scoring();
        scoring.validate()?;
        Ok(Aligner::new(opts.mode, scoring))
    }
}

/// Aligns pairs of sequences with a fixed mode and scoring.
///
/// Each call to [`Aligner::align`] allocates its own matrix, so an aligner may be shared freely
/// between threads.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aligner {
    mode: AlignmentMode,
    scoring: Scoring,
}

impl Aligner {
    pub fn new(mode: AlignmentMode, scoring: Scoring) -> Self {
        Self { mode, scoring }
    }

    pub fn mode(&self) -> AlignmentMode {
        self.mode
    }

    pub fn scoring(&self) -> &Scoring {
        &self.scoring
    }

    /// Fills the alignment matrix for `problem` and traces back the best alignment.  The matrix
    /// is released before returning, on success and on error.
    pub fn align(&self, problem: &SequencePair) -> Result<Alignment, AlignError> {
        self.scoring.validate()?;
        debug!(
            "Aligning sequences of length {} and {} in {} mode",
            problem.alen(),
            problem.blen(),
            self.mode
        );
        let matrix = Matrix::fill(problem, &self.scoring)?;
        traceback(problem, &matrix, self.mode)
    }
}
