use crate::alphabets::Alphabet;

use memchr::memmem;

/// Half-open span `[start, end)` of one pattern occurrence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A pattern that can be tested at a single position of a byte string.
///
/// Implementations never look behind `pos` and never wrap.
pub trait Pattern {
    fn try_match_at(&self, hay: &[u8], pos: usize) -> Option<MatchSpan>;

    /// Literal bytes every match starts with, if any. Lets the scan loop
    /// skip ahead with `memmem` instead of probing byte by byte.
    fn literal_prefix(&self) -> Option<&[u8]> {
        None
    }
}

/// Lazy iterator over non-overlapping matches of `pattern` in `hay`.
///
/// Leftmost-first: scanning starts at 0; a successful match is emitted and
/// the scan resumes at its `end`, so later matches cannot start inside an
/// earlier span. A failed attempt advances the scan position by one byte.
pub struct Matches<'a, P> {
    hay: &'a [u8],
    pattern: P,
    pos: usize,
}

pub fn matches<P: Pattern>(hay: &[u8], pattern: P) -> Matches<'_, P> {
    Matches {
        hay,
        pattern,
        pos: 0,
    }
}

impl<P: Pattern> Iterator for Matches<'_, P> {
    type Item = MatchSpan;

    fn next(&mut self) -> Option<MatchSpan> {
        while self.pos < self.hay.len() {
            if let Some(prefix) = self.pattern.literal_prefix() {
                // A match must begin with the prefix, so jumping to its next
                // occurrence visits the same candidates as stepping one byte
                // at a time.
                match memmem::find(&self.hay[self.pos..], prefix) {
                    Some(i) => self.pos += i,
                    None => {
                        self.pos = self.hay.len();
                        return None;
                    }
                }
            }
            if let Some(span) = self.pattern.try_match_at(self.hay, self.pos) {
                self.pos = span.end;
                return Some(span);
            }
            self.pos += 1;
        }
        None
    }
}

/// Matches one byte outside the given alphabet.
pub struct NotInAlphabet<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> NotInAlphabet<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }
}

impl Pattern for NotInAlphabet<'_> {
    fn try_match_at(&self, hay: &[u8], pos: usize) -> Option<MatchSpan> {
        let &b = hay.get(pos)?;
        if self.alphabet.contains(b) {
            None
        } else {
            Some(MatchSpan {
                start: pos,
                end: pos + 1,
            })
        }
    }
}

/// Matches a fixed anchor, then a greedy run of anchor-width groups none of
/// which equals a terminator, then exactly one terminator.
///
/// Each candidate group is tested before being accepted into the run, so the
/// match always ends at the first in-frame terminator after the anchor. An
/// anchor with no in-frame terminator before the end of the haystack (or a
/// truncated trailing group) yields no match for that attempt.
pub struct AnchoredCodonRun<'a> {
    anchor: &'a [u8],
    terminators: &'a [&'a [u8]],
}

impl<'a> AnchoredCodonRun<'a> {
    pub fn new(anchor: &'a [u8], terminators: &'a [&'a [u8]]) -> Self {
        debug_assert!(!anchor.is_empty());
        debug_assert!(terminators.iter().all(|t| t.len() == anchor.len()));
        Self {
            anchor,
            terminators,
        }
    }
}

impl Pattern for AnchoredCodonRun<'_> {
    fn try_match_at(&self, hay: &[u8], pos: usize) -> Option<MatchSpan> {
        let width = self.anchor.len();
        if hay.get(pos..pos + width)? != self.anchor {
            return None;
        }

        let mut end = pos + width;
        loop {
            let group = hay.get(end..end + width)?;
            end += width;
            if self.terminators.iter().any(|&t| t == group) {
                return Some(MatchSpan { start: pos, end });
            }
        }
    }

    fn literal_prefix(&self) -> Option<&[u8]> {
        Some(self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabets::dna;

    fn orf_pattern() -> AnchoredCodonRun<'static> {
        AnchoredCodonRun::new(dna::START_CODON, &dna::STOP_CODONS)
    }

    fn spans<P: Pattern>(hay: &[u8], pattern: P) -> Vec<(usize, usize)> {
        matches(hay, pattern).map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn not_in_alphabet_spans() {
        let a = dna::alphabet();
        assert_eq!(spans(b"ATXG", NotInAlphabet::new(&a)), vec![(2, 3)]);
        assert_eq!(
            spans(b"NATGN", NotInAlphabet::new(&a)),
            vec![(0, 1), (4, 5)]
        );
        assert!(spans(b"ACGT", NotInAlphabet::new(&a)).is_empty());
    }

    #[test]
    fn run_ends_at_first_in_frame_terminator() {
        // ATG AAA TAG TGA: the run must stop at TAG, not TGA.
        assert_eq!(spans(b"ATGAAATAGTGA", orf_pattern()), vec![(0, 9)]);
    }

    #[test]
    fn anchor_without_terminator_is_no_match() {
        assert!(spans(b"ATGAAA", orf_pattern()).is_empty());
        assert!(spans(b"ATG", orf_pattern()).is_empty());
    }

    #[test]
    fn truncated_trailing_group_is_no_match() {
        // Two spare bytes after the last full group, never a terminator.
        assert!(spans(b"ATGAAATA", orf_pattern()).is_empty());
    }

    #[test]
    fn out_of_frame_terminator_is_part_of_the_run() {
        // TAA appears at offset 4 from the anchor but only the in-frame
        // windows count; the first in-frame terminator is the final TAA.
        assert_eq!(spans(b"ATGATAAGCTAA", orf_pattern()), vec![(0, 12)]);
    }

    #[test]
    fn matches_do_not_overlap() {
        // Second ATG sits inside the first match and must not be reported.
        let hay = b"ATGATGTAGATGTAA";
        assert_eq!(spans(hay, orf_pattern()), vec![(0, 9), (9, 15)]);
    }

    #[test]
    fn failed_attempt_advances_one_byte() {
        // First ATG never reaches a terminator in its own frame, so the
        // scanner moves past it and still finds the later anchor.
        let hay = b"ATGGATGAAATAG";
        assert_eq!(spans(hay, orf_pattern()), vec![(4, 13)]);
    }

    #[test]
    fn scan_is_restartable() {
        let hay = b"ATGAAATAG";
        let first: Vec<_> = matches(hay, orf_pattern()).collect();
        let second: Vec<_> = matches(hay, orf_pattern()).collect();
        assert_eq!(first, second);
    }
}
