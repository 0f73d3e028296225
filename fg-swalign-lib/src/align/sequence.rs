use serde::{Serialize, Serializer};

/// Two sequences `a` and `b`.  Used both for the problem to align and for the aligned,
/// gap-padded result (in which case both tracks have the same length).
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SequencePair {
    #[serde(serialize_with = "as_text")]
    pub a: Vec<u8>,
    #[serde(serialize_with = "as_text")]
    pub b: Vec<u8>,
}

impl SequencePair {
    pub fn new<A: Into<Vec<u8>>, B: Into<Vec<u8>>>(a: A, b: B) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn alen(&self) -> usize {
        self.a.len()
    }

    pub fn blen(&self) -> usize {
        self.b.len()
    }

    /// Releases the storage owned by this pair.  The pair is consumed, so it can be neither read
    /// nor destroyed a second time:
    ///
    /// ```rust,compile_fail
    /// use swalign::align::SequencePair;
    /// let pair = SequencePair::new("ACGT", "A-GT");
    /// pair.destroy();
    /// let _ = pair.alen();
    /// ```
    pub fn destroy(self) {
        drop(self);
    }
}

fn as_text<S: Serializer>(seq: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(seq))
}

#[cfg(test)]
mod tests {
    use super::SequencePair;

    #[test]
    fn test_new_and_lengths() {
        let pair = SequencePair::new("ACGT", b"AG".to_vec());
        assert_eq!(pair.alen(), 4);
        assert_eq!(pair.blen(), 2);
        assert_eq!(pair.a, b"ACGT");
    }

    #[test]
    fn test_destroy_clone_keeps_source() {
        let pair = SequencePair::new("ACGT", "ACGT");
        let copy = pair.clone();
        copy.destroy();
        assert_eq!(pair.alen(), 4);
        assert_eq!(pair.b, b"ACGT");
    }
}
