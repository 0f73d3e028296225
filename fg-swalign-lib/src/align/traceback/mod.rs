use log::debug;

use crate::align::{
    aligners::constants::{AlignmentMode, GAP_MARKER},
    alignment::Alignment,
    error::AlignError,
    matrix::{Matrix, Predecessor},
    sequence::SequencePair,
};

/// One output track of the traceback.  Symbols are emitted from the start cell towards the
/// origin, so the track is in reverse order until [`Track::into_forward`] is called.
struct Track(Vec<u8>);

impl Track {
    fn push(&mut self, symbol: u8) {
        self.0.push(symbol);
    }

    fn into_forward(mut self) -> Vec<u8> {
        self.0.reverse();
        self.0
    }
}

/// Reserves an empty vector for at most `capacity` elements.
fn reserve<T>(capacity: usize, matrix: &Matrix) -> Result<Vec<T>, AlignError> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(capacity)
        .map_err(|_| AlignError::Allocation {
            rows: matrix.rows(),
            cols: matrix.cols(),
        })?;
    Ok(values)
}

/// Returns the cell traceback starts from for the given mode.
pub fn start_cell(matrix: &Matrix, mode: AlignmentMode) -> (usize, usize) {
    match mode {
        AlignmentMode::Global => (matrix.rows() - 1, matrix.cols() - 1),
        AlignmentMode::Local => matrix.best_cell(),
    }
}

/// Walks the backpointers of a filled `matrix` and returns the aligned, gap-padded tracks.
///
/// In global mode the walk runs from the bottom-right corner to the origin.  In local mode it
/// runs from the highest scoring cell and stops at the first boundary cell, so leading gaps that
/// precede the local alignment are not emitted.
pub fn traceback(
    problem: &SequencePair,
    matrix: &Matrix,
    mode: AlignmentMode,
) -> Result<Alignment, AlignError> {
    debug_assert_eq!(matrix.rows(), problem.alen() + 1);
    debug_assert_eq!(matrix.cols(), problem.blen() + 1);

    let (mut i, mut j) = start_cell(matrix, mode);
    let start = (i, j);
    let score = matrix.get(i, j).score;
    debug!("Tracing back a {mode} alignment from ({i}, {j}) with score {score}");

    // Every step decreases i + j by at least one.
    let max_steps = i + j;
    let mut a = Track(reserve(max_steps, matrix)?);
    let mut b = Track(reserve(max_steps, matrix)?);
    let mut path = reserve(max_steps + 1, matrix)?;
    path.push(start);

    loop {
        if mode == AlignmentMode::Local && (i == 0 || j == 0) {
            break;
        }
        let (pi, pj) = match matrix.get(i, j).predecessor {
            Predecessor::Origin => break,
            Predecessor::From(pi, pj) => (pi, pj),
        };
        debug_assert!(pi <= i && pj <= j && (pi < i || pj < j));
        a.push(if pi < i { problem.a[i - 1] } else { GAP_MARKER });
        b.push(if pj < j { problem.b[j - 1] } else { GAP_MARKER });
        i = pi;
        j = pj;
        path.push((i, j));
    }

    path.reverse();
    Ok(Alignment::new(
        SequencePair::new(a.into_forward(), b.into_forward()),
        score,
        mode,
        path,
    ))
}

#[cfg(test)]
mod tests {
    use super::{start_cell, traceback};
    use crate::align::{
        aligners::constants::AlignmentMode, matrix::Matrix, scoring::Scoring,
        sequence::SequencePair,
    };
    use rstest::rstest;

    fn run(a: &str, b: &str, mode: AlignmentMode, scoring: &Scoring) -> (String, String) {
        let problem = SequencePair::new(a, b);
        let matrix = Matrix::fill(&problem, scoring).unwrap();
        let alignment = traceback(&problem, &matrix, mode).unwrap();
        let pair = alignment.into_pair();
        (
            String::from_utf8(pair.a).unwrap(),
            String::from_utf8(pair.b).unwrap(),
        )
    }

    #[test]
    fn test_start_cell() {
        let problem = SequencePair::new("TTACGTT", "ACG");
        let matrix = Matrix::fill(&problem, &Scoring::default()).unwrap();
        assert_eq!(start_cell(&matrix, AlignmentMode::Global), (7, 3));
        assert_eq!(start_cell(&matrix, AlignmentMode::Local), (5, 3));
    }

    #[rstest]
    #[case("ACGT", "ACGT", "ACGT", "ACGT")]
    #[case("ACGT", "AGT", "ACGT", "A-GT")]
    #[case("AGT", "ACGT", "A-GT", "ACGT")]
    #[case("", "ACG", "---", "ACG")]
    #[case("TTACG", "ACG", "TTACG", "--ACG")]
    #[case("ACGTT", "ACG", "ACGTT", "ACG--")]
    fn test_global(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected_a: &str,
        #[case] expected_b: &str,
    ) {
        let (aligned_a, aligned_b) = run(a, b, AlignmentMode::Global, &Scoring::default());
        assert_eq!(aligned_a, expected_a);
        assert_eq!(aligned_b, expected_b);
    }

    #[rstest]
    #[case("XXXACGTXXX", "ACGT", "ACGT", "ACGT")]
    #[case("ACGT", "XXXACGTXXX", "ACGT", "ACGT")]
    #[case("TTACG", "ACG", "ACG", "ACG")]
    #[case("", "ACG", "", "")]
    fn test_local(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected_a: &str,
        #[case] expected_b: &str,
    ) {
        let (aligned_a, aligned_b) = run(a, b, AlignmentMode::Local, &Scoring::default());
        assert_eq!(aligned_a, expected_a);
        assert_eq!(aligned_b, expected_b);
    }

    #[test]
    fn test_global_with_strict_end_gaps() {
        let scoring = Scoring::default().free_end_gaps(false);
        let (aligned_a, aligned_b) = run("ACGT", "AGT", AlignmentMode::Global, &scoring);
        assert_eq!(aligned_a, "ACGT");
        assert_eq!(aligned_b, "A-GT");
    }

    #[rstest]
    #[case("GATTACA", "GCATGCU")]
    #[case("ACGTACGTACGT", "TTT")]
    #[case("A", "TTTTTTT")]
    fn test_tracks_have_equal_length(#[case] a: &str, #[case] b: &str) {
        for mode in [AlignmentMode::Global, AlignmentMode::Local] {
            let (aligned_a, aligned_b) = run(a, b, mode, &Scoring::default());
            assert_eq!(aligned_a.len(), aligned_b.len());
        }
    }

    #[test]
    fn test_tracks_reproduce_the_inputs_in_global_mode() {
        let (a, b) = ("GATTACAGATTACA", "GCATGCUTTAC");
        let (aligned_a, aligned_b) = run(a, b, AlignmentMode::Global, &Scoring::default());
        assert_eq!(aligned_a.replace('-', ""), a);
        assert_eq!(aligned_b.replace('-', ""), b);
    }

    #[test]
    fn test_path_runs_from_end_to_start() {
        let problem = SequencePair::new("ACGT", "AGT");
        let matrix = Matrix::fill(&problem, &Scoring::default()).unwrap();
        let alignment = traceback(&problem, &matrix, AlignmentMode::Global).unwrap();
        assert_eq!(
            alignment.path(),
            &vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 3)]
        );
        assert_eq!(*alignment.score(), 2.0);
        assert_eq!(alignment.len() + 1, alignment.path().len());
    }
}
