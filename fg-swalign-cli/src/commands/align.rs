use super::command::{Command, PossibleValues};
use anyhow::{bail, Result};
use clap::{
    builder::{PossibleValuesParser, TypedValueParser as _},
    Parser,
};
use itertools::Itertools;
use log::info;
use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};
use swalign::{
    align::{
        io::{read_sequence_pair, NamedSequencePair},
        AlignError, Alignment, AlignmentMode, Builder, SequencePair,
    },
    util::version::built_info,
};

impl PossibleValues for AlignmentMode {
    fn variants() -> &'static [Self] {
        &[Self::Global, Self::Local]
    }

    fn help(&self) -> &'static str {
        match self {
            Self::Global => "aligns the full sequence a versus the full sequence b",
            Self::Local => "aligns the best scoring sub-sequences of a and b",
        }
    }
}

/// Computes an optimal alignment between two sequences.
///
/// The sequences are given either on the command line (`--seq-a` and `--seq-b`) or as the first
/// two records of a FASTA file (`--fasta`).  Symbols are compared by equality only, so the
/// alignment is case sensitive.
///
/// The alignment is written to standard output as three lines: the aligned sequence a, a match
/// line (`|` for a match, `.` for a mismatch) and the aligned sequence b.  Gaps are shown as `-`.
/// Use `--json` to write the alignment, its score and the path through the alignment matrix as
/// JSON instead.
///
/// ## End gaps
///
/// By default, gaps before the first and after the last aligned symbol of either sequence are
/// free.  Use `--strict-end-gaps` to score them with `--gap-score` as any other gap.
#[derive(Parser, Debug, Clone)]
#[clap(version = built_info::VERSION.as_str(), term_width=0)]
pub struct Align {
    /// The first sequence to align.
    #[clap(long, short = 'a', display_order = 1)]
    seq_a: Option<String>,

    /// The second sequence to align.
    #[clap(long, short = 'b', display_order = 2)]
    seq_b: Option<String>,

    /// The path to a FASTA whose first two records are the sequences to align.
    #[clap(long, short = 'f', display_order = 3, conflicts_with_all = ["seq_a", "seq_b"])]
    fasta: Option<PathBuf>,

    /// The alignment mode:
    /// - Global: aligns the full sequence a versus the full sequence b.
    /// - Local: aligns the best scoring sub-sequences of a and b.
    #[clap(
        long,
        short = 'm',
        value_parser = PossibleValuesParser::new(AlignmentMode::possible_values())
            .map(|s| s.parse::<AlignmentMode>().unwrap()),
        default_value_t = AlignmentMode::Global,
        ignore_case = true,
        display_order = 4,
        verbatim_doc_comment
    )]
    mode: AlignmentMode,

    /// Score for a sequence match
    #[clap(long, short = 'A', default_value = "1", display_order = 5)]
    match_score: f64,

    /// Score for a sequence mismatch
    #[clap(
        long,
        short = 'B',
        default_value = "-1",
        allow_hyphen_values = true,
        display_order = 6
    )]
    mismatch_score: f64,

    /// Score for a gap of length one; a gap of length k scores k times this value
    #[clap(
        long,
        short = 'G',
        default_value = "-1",
        allow_hyphen_values = true,
        display_order = 7
    )]
    gap_score: f64,

    /// Score leading and trailing gaps like any other gap, otherwise they are free
    #[clap(long, default_value = "false", display_order = 8)]
    strict_end_gaps: bool,

    /// Write the alignment as JSON
    #[clap(long, short = 'j', default_value = "false", display_order = 9)]
    json: bool,
}

impl Align {
    /// Resolves the sequences to align from the command line options.
    fn problem(&self) -> Result<NamedSequencePair> {
        match (&self.fasta, &self.seq_a, &self.seq_b) {
            (Some(fasta), None, None) => {
                info!("Reading sequences from {}", fasta.display());
                read_sequence_pair(fasta)
            }
            (None, Some(a), Some(b)) => Ok(NamedSequencePair {
                a_name: "a".to_string(),
                b_name: "b".to_string(),
                pair: SequencePair::new(a.as_bytes(), b.as_bytes()),
            }),
            (None, None, Some(_)) => Err(AlignError::invalid("sequence a is missing").into()),
            (None, Some(_), None) => Err(AlignError::invalid("sequence b is missing").into()),
            (None, None, None) => bail!("Either --fasta or both --seq-a and --seq-b are required"),
            _ => bail!("--fasta cannot be used with --seq-a or --seq-b"),
        }
    }

    fn write_text<W: Write>(
        out: &mut W,
        problem: &NamedSequencePair,
        alignment: &Alignment,
    ) -> Result<()> {
        writeln!(
            out,
            "# {} ({}) vs {} ({}), {} mode",
            problem.a_name,
            problem.pair.alen(),
            problem.b_name,
            problem.pair.blen(),
            alignment.mode()
        )?;
        writeln!(out, "score\t{}", alignment.score())?;
        writeln!(out, "identity\t{:.4}", alignment.identity())?;
        writeln!(out, "{alignment}")?;
        Ok(())
    }

    fn write_json<W: Write>(out: &mut W, alignment: &Alignment) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, alignment)?;
        writeln!(out)?;
        Ok(())
    }

    /// Executes the align command
    pub fn execute(&self) -> Result<()> {
        info!(
            "Command line: {}",
            env::args_os()
                .map(|s| s.to_string_lossy().into_owned())
                .join(" ")
        );
        let problem = self.problem()?;

        let mut builder = Builder::default();
        builder
            .mode(self.mode)
            .match_score(self.match_score)
            .mismatch_score(self.mismatch_score)
            .gap_score(self.gap_score)
            .free_end_gaps(!self.strict_end_gaps);
        let aligner = builder.build_aligner()?;

        info!(
            "Aligning {} ({}) versus {} ({}) in {} mode",
            problem.a_name,
            problem.pair.alen(),
            problem.b_name,
            problem.pair.blen(),
            self.mode
        );
        let alignment = aligner.align(&problem.pair)?;
        info!(
            "Alignment score {} over {} columns with {} gaps",
            alignment.score(),
            alignment.len(),
            alignment.num_gaps()
        );

        let mut out = io::stdout().lock();
        if self.json {
            Self::write_json(&mut out, &alignment)?;
        } else {
            Self::write_text(&mut out, &problem, &alignment)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Command for Align {
    fn execute(&self) -> anyhow::Result<()> {
        Align::execute(self)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use swalign::align::{AlignmentMode, Builder, SequencePair};

    use super::Align;

    /// Check that the argument parser works
    #[test]
    fn test_parse() {
        let align = Align::parse_from(["align", "-a", "ACGT", "-b", "AGT"]);
        assert_eq!(align.mode, AlignmentMode::Global);
        assert_eq!(align.mismatch_score, -1.0);
        assert!(!align.strict_end_gaps);
    }

    #[test]
    fn test_parse_mode_and_negative_scores() {
        let align = Align::parse_from([
            "align", "-f", "pair.fa", "-m", "LOCAL", "-B", "-3", "-G", "-2.5",
        ]);
        assert_eq!(align.mode, AlignmentMode::Local);
        assert_eq!(align.mismatch_score, -3.0);
        assert_eq!(align.gap_score, -2.5);
    }

    #[test]
    fn test_fasta_conflicts_with_sequences() {
        assert!(Align::try_parse_from(["align", "-f", "pair.fa", "-a", "ACGT"]).is_err());
    }

    #[test]
    fn test_missing_sequence_is_an_error() {
        let align = Align::parse_from(["align", "-a", "ACGT"]);
        let message = align.problem().unwrap_err().to_string();
        assert!(message.contains("sequence b is missing"));
        assert!(Align::parse_from(["align"]).problem().is_err());
    }

    #[test]
    fn test_write_text() {
        let align = Align::parse_from(["align", "-a", "ACGT", "-b", "AGT"]);
        let problem = align.problem().unwrap();
        assert_eq!(problem.pair, SequencePair::new("ACGT", "AGT"));
        let alignment = Builder::default()
            .build_aligner()
            .unwrap()
            .align(&problem.pair)
            .unwrap();
        let mut out: Vec<u8> = Vec::new();
        Align::write_text(&mut out, &problem, &alignment).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# a (4) vs b (3), global mode\nscore\t2\nidentity\t0.7500\nACGT\n| ||\nA-GT\n"
        );
    }

    #[test]
    fn test_write_json() {
        let align = Align::parse_from(["align", "-a", "ACGT", "-b", "AGT", "--json"]);
        let problem = align.problem().unwrap();
        let alignment = Builder::default()
            .build_aligner()
            .unwrap()
            .align(&problem.pair)
            .unwrap();
        let mut out: Vec<u8> = Vec::new();
        Align::write_json(&mut out, &alignment).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["aligned"]["a"], "ACGT");
        assert_eq!(json["aligned"]["b"], "A-GT");
        assert_eq!(json["mode"], "global");
        assert_eq!(json["score"].as_f64(), Some(2.0));
        assert_eq!(json["path"][4], serde_json::json!([4, 3]));
    }
}
