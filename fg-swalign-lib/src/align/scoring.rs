use serde::Serialize;

use crate::align::error::AlignError;

/// Details of scoring are encapsulated in this structure.
///
/// A linear gap score model is used so that the gap score for a length `k` is `gap * k`.  When
/// `free_end_gaps` is set, gaps before the first and after the last aligned symbol of either
/// sequence cost nothing.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Serialize)]
pub struct Scoring {
    pub match_score: f64,
    pub mismatch_score: f64,
    pub gap_score: f64,
    pub free_end_gaps: bool,
}

impl Default for Scoring {
    fn default() -> Self {
        Self::new(1.0, -1.0, -1.0)
    }
}

impl Scoring {
    /// Create new Scoring instance with the given match, mismatch and gap scores.  End gaps are
    /// free by default.
    ///
    /// # Arguments
    ///
    /// * `match_score` - the score for two equal symbols
    /// * `mismatch_score` - the score for two differing symbols
    /// * `gap_score` - the score for a gap of length one
    pub fn new(match_score: f64, mismatch_score: f64, gap_score: f64) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
            free_end_gaps: true,
        }
    }

    /// Sets whether leading and trailing gaps are free.
    ///
    /// ```rust
    /// use swalign::align::Scoring;
    /// let scoring = Scoring::new(2.0, -3.0, -4.0).free_end_gaps(false);
    /// assert!(!scoring.free_end_gaps);
    /// assert_eq!(scoring.gap(true), -4.0);
    /// ```
    pub fn free_end_gaps(mut self, free_end_gaps: bool) -> Self {
        self.free_end_gaps = free_end_gaps;
        self
    }

    /// The score for aligning symbol `x` against symbol `y`.
    #[inline(always)]
    pub fn substitution(&self, x: u8, y: u8) -> f64 {
        if x == y {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// The score for one gap step.  `at_end` is true when the step lies on a sequence end, which
    /// is free if end gaps are free.
    #[inline(always)]
    pub fn gap(&self, at_end: bool) -> f64 {
        if at_end && self.free_end_gaps {
            0.0
        } else {
            self.gap_score
        }
    }

    /// Checks that every score is a finite number.
    pub fn validate(&self) -> Result<(), AlignError> {
        for (name, value) in [
            ("match", self.match_score),
            ("mismatch", self.mismatch_score),
            ("gap", self.gap_score),
        ] {
            if !value.is_finite() {
                return Err(AlignError::invalid(format!(
                    "the {name} score must be finite, found {value}"
                )));
            }
        }
        Ok(())
    }
}
