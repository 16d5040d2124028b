use crate::alphabets::Alphabet;
use std::sync::LazyLock;

/// The strict base alphabet. Sequences are uppercased at construction,
/// so validity is exact membership in {A, C, T, G}.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

pub const START_CODON: &[u8] = b"ATG";
pub const STOP_CODONS: [&[u8]; 3] = [b"TAA", b"TAG", b"TGA"];

// 0 marks bytes with no defined complement.
static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0u8; 256];
    b"ACTG".iter().zip(b"TGAC".iter()).for_each(|(&a, &b)| {
        comp[a as usize] = b;
    });
    comp
});

/// Complement of a single base, `None` for anything outside {A, C, T, G}.
#[inline]
pub fn complement(a: u8) -> Option<u8> {
    match COMPLEMENT[a as usize] {
        0 => None,
        b => Some(b),
    }
}
