use crate::alphabets::dna;
use crate::error::{DnaError, DnaResult};
use crate::scan::{self, AnchoredCodonRun, MatchSpan, NotInAlphabet};

use std::fmt;

/// An uppercase DNA sequence. Normalization happens once at construction
/// and the bytes never change afterwards; every derived result is
/// recomputed per call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    /// Builds a sequence, uppercasing ASCII letters. Construction never
    /// fails; invalid characters are a reportable state, not an error.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let mut bytes = bytes.into();
        bytes.make_ascii_uppercase();
        Self { bytes }
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Ascending positions of characters outside {A, C, T, G}.
    pub fn invalid_positions(&self) -> Vec<usize> {
        let alphabet = dna::alphabet();
        scan::matches(&self.bytes, NotInAlphabet::new(&alphabet))
            .map(|span| span.start)
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_positions().is_empty()
    }

    /// Renders the sequence with a `^` inserted after each flagged
    /// position. `positions` must be sorted ascending and in range, which
    /// holds for every caller in this crate by scan order.
    pub fn annotate_mistakes(&self, positions: &[usize]) -> String {
        debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(positions.iter().all(|&p| p < self.bytes.len()));

        let mut out = Vec::with_capacity(self.bytes.len() + positions.len());
        let mut flagged = positions.iter().copied().peekable();
        for (i, &b) in self.bytes.iter().enumerate() {
            out.push(b);
            if flagged.peek() == Some(&i) {
                out.push(b'^');
                flagged.next();
            }
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    /// `None` when the sequence is valid, otherwise the annotated
    /// mistakes rendering. Printing is the caller's concern.
    pub fn validation_report(&self) -> Option<String> {
        let invalid = self.invalid_positions();
        if invalid.is_empty() {
            None
        } else {
            Some(self.annotate_mistakes(&invalid))
        }
    }

    /// Complements each base (A<->T, C<->G) and reverses the order.
    ///
    /// Fails on the first character without a complement, without
    /// consulting validation and without a partial result.
    pub fn reverse_complement(&self) -> DnaResult<DnaSeq> {
        let mut out = Vec::with_capacity(self.bytes.len());
        for (pos, &b) in self.bytes.iter().enumerate() {
            match dna::complement(b) {
                Some(c) => out.push(c),
                None => return Err(DnaError::InvalidChar { ch: b as char, pos }),
            }
        }
        out.reverse();
        Ok(Self::from_bytes_unchecked(out))
    }

    /// All longest open reading frames, in discovery order, duplicates by
    /// value included. Empty when no start codon reaches a stop codon.
    ///
    /// Requires a fully valid sequence. Matches never overlap, so an ORF
    /// nested inside an already-consumed span is not reported separately;
    /// that is the scanning policy, not an oversight.
    pub fn longest_orfs(&self) -> DnaResult<Vec<DnaSeq>> {
        let invalid = self.invalid_positions();
        if !invalid.is_empty() {
            return Err(DnaError::InvalidSequence {
                count: invalid.len(),
            });
        }

        let pattern = AnchoredCodonRun::new(dna::START_CODON, &dna::STOP_CODONS);
        let spans: Vec<MatchSpan> = scan::matches(&self.bytes, pattern).collect();

        let longest = match spans.iter().map(MatchSpan::len).max() {
            Some(len) => len,
            None => return Ok(Vec::new()),
        };

        Ok(spans
            .iter()
            .filter(|span| span.len() == longest)
            .map(|span| Self::from_bytes_unchecked(self.bytes[span.start..span.end].to_vec()))
            .collect())
    }
}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}
