use std::{io::BufRead, path::Path};

use anyhow::{ensure, Context, Result};
use fgoxide::io::Io;
use seq_io::fasta::{Reader as FastaReader, Record as FastaRecord};

use super::sequence::SequencePair;

/// 1 MB buffer for reading FASTA input.
pub const BUFFER_SIZE: usize = 1024 * 1024;

/// Converts the FASTA header (which may contain whitespaces) to a record name.
fn header_to_name(header: &[u8]) -> Result<String> {
    let header: std::borrow::Cow<str> = String::from_utf8_lossy(header);
    header
        .split_whitespace()
        .next()
        .map(std::string::ToString::to_string)
        .context("empty record name")
}

/// A sequence pair read from a FASTA file, along with the names of its two records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSequencePair {
    pub a_name: String,
    pub b_name: String,
    pub pair: SequencePair,
}

/// Reads the first two records of the (optionally GZIP compressed) FASTA at `path` as sequences
/// `a` and `b`.  Any further records are ignored.  Multi-line sequences are joined.
pub fn read_sequence_pair<P: AsRef<Path>>(path: P) -> Result<NamedSequencePair> {
    let path = path.as_ref().to_path_buf();
    let fg_io: Io = Io::new(5, BUFFER_SIZE);
    let mut reader: FastaReader<Box<dyn BufRead + Send>> = FastaReader::with_capacity(
        fg_io
            .new_reader(&path)
            .with_context(|| format!("Could not open FASTA: {}", path.display()))?,
        BUFFER_SIZE,
    );

    let mut records: Vec<(String, Vec<u8>)> = Vec::with_capacity(2);
    while records.len() < 2 {
        match reader.next() {
            None => break,
            Some(result) => {
                let record = result
                    .with_context(|| format!("Error reading FASTA: {}", path.display()))?;
                let name = header_to_name(record.head())?;
                records.push((name, record.full_seq().into_owned()));
            }
        }
    }
    ensure!(
        records.len() == 2,
        "Expected at least two sequences in the FASTA {}, found {}",
        path.display(),
        records.len()
    );

    let (b_name, b) = records.pop().context("missing sequence b")?;
    let (a_name, a) = records.pop().context("missing sequence a")?;
    Ok(NamedSequencePair {
        a_name,
        b_name,
        pair: SequencePair::new(a, b),
    })
}

#[cfg(test)]
mod tests {
    use super::read_sequence_pair;
    use fgoxide::io::Io;
    use std::{fs::File, io::Write, path::PathBuf};
    use tempfile::TempDir;

    fn write_fasta(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("pair.fa");
        let mut file = File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();
        path
    }

    #[test]
    fn test_read_sequence_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fasta(&dir, ">first some comment\nACGT\nTTGA\n>second\nAGT\n>third\nC\n");
        let named = read_sequence_pair(&path).unwrap();
        assert_eq!(named.a_name, "first");
        assert_eq!(named.b_name, "second");
        assert_eq!(named.pair.a, b"ACGTTTGA");
        assert_eq!(named.pair.b, b"AGT");
    }

    #[test]
    fn test_read_gzipped_sequence_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pair.fa.gz");
        Io::default()
            .write_lines(&path, [">first", "ACGT", ">second", "AG", "T"])
            .unwrap();
        let named = read_sequence_pair(&path).unwrap();
        assert_eq!(named.a_name, "first");
        assert_eq!(named.b_name, "second");
        assert_eq!(named.pair.a, b"ACGT");
        assert_eq!(named.pair.b, b"AGT");
    }

    #[test]
    fn test_read_sequence_pair_with_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fasta(&dir, ">only\nACGT\n");
        let result = read_sequence_pair(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Expected at least two sequences"));
    }

    #[test]
    fn test_read_sequence_pair_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_sequence_pair(dir.path().join("missing.fa")).is_err());
    }
}
