use anyhow::{anyhow, Error};
use serde::Serialize;
use std::{fmt::Display, str::FromStr};

/// Value to use as a 'negative infinity' score when searching for the best scoring cell.
pub const MIN_SCORE: f64 = f64::NEG_INFINITY;

/// The symbol emitted in an aligned track for a skipped position.
pub const GAP_MARKER: u8 = b'-';

/// The modes of alignment supported by the aligner.
///
/// The default alignment mode is Global.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentMode {
    /// Aligns the full sequence `a` versus the full sequence `b`.  Traceback starts in the
    /// bottom-right corner of the matrix.
    #[default]
    Global,
    /// Aligns the best scoring sub-sequence of `a` versus the best scoring sub-sequence of `b`.
    /// Traceback starts in the highest scoring cell of the matrix.
    Local,
}

impl Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

impl FromStr for AlignmentMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" | "nw" | "needleman-wunsch" => Ok(AlignmentMode::Global),
            "local" | "sw" | "smith-waterman" => Ok(AlignmentMode::Local),
            _ => Err(anyhow!("Invalid alignment mode: {}", s)),
        }
    }
}
