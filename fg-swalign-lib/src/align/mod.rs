pub mod aligners;
pub mod alignment;
pub mod error;
pub mod io;
pub mod matrix;
pub mod scoring;
pub mod sequence;
pub mod traceback;

pub use aligners::{constants::AlignmentMode, Aligner, Builder};
pub use alignment::Alignment;
pub use error::AlignError;
pub use scoring::Scoring;
pub use sequence::SequencePair;

/// Aligns the two sequences in `problem` and returns the aligned, gap-padded tracks.
///
/// The alignment matrix only lives for the duration of this call.  Use [`Aligner::align`] to
/// also retrieve the score and the path through the matrix.
///
/// # Example
/// ```rust
/// use swalign::align::{align, AlignmentMode, Scoring, SequencePair};
/// let problem = SequencePair::new("ACGT", "AGT");
/// let result = align(&problem, AlignmentMode::Global, &Scoring::default()).unwrap();
/// assert_eq!(result.a, b"ACGT");
/// assert_eq!(result.b, b"A-GT");
/// result.destroy();
/// ```
pub fn align(
    problem: &SequencePair,
    mode: AlignmentMode,
    scoring: &Scoring,
) -> Result<SequencePair, AlignError> {
    Aligner::new(mode, *scoring)
        .align(problem)
        .map(Alignment::into_pair)
}
