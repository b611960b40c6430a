use crate::alphabets::SymbolSet;
use std::sync::LazyLock;

pub const UNAMBIGUOUS: &[u8] = b"GATC";
pub const AMBIGUOUS: &[u8] = b"GATCRYWSMKHBVDN";
pub const EXTENDED: &[u8] = b"GATCBDSW";

pub fn unambiguous_letters() -> SymbolSet {
    SymbolSet::new(UNAMBIGUOUS)
}

pub fn ambiguous_letters() -> SymbolSet {
    SymbolSet::new(AMBIGUOUS)
}

pub fn extended_letters() -> SymbolSet {
    SymbolSet::new(EXTENDED)
}

/// Byte lookup table pairing `from[i]` with `to[i]`, in both cases. Every
/// other byte maps to itself.
pub(crate) fn pairing_table(from: &[u8], to: &[u8]) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    for (&a, &b) in from.iter().zip(to) {
        table[a as usize] = b;
        table[a.to_ascii_lowercase() as usize] = b.to_ascii_lowercase();
    }
    table
}

static COMPLEMENT: LazyLock<[u8; 256]> =
    LazyLock::new(|| pairing_table(b"AGCTYRWSKMDVHBN", b"TCGARYWSMKHBDVN"));

/// Watson-Crick partner of a DNA base or IUPAC code.
#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

/// IUPAC nucleotide code as a 4-bit mask over T, C, A, G (in that bit order,
/// matching NCBI codon order). `U` counts as `T`. Zero means "not a nucleotide".
static EXPANSION: LazyLock<[u8; 256]> = LazyLock::new(|| {
    const T: u8 = 1;
    const C: u8 = 2;
    const A: u8 = 4;
    const G: u8 = 8;
    let mut map = [0u8; 256];
    let codes: [(u8, u8); 16] = [
        (b'T', T),
        (b'U', T),
        (b'C', C),
        (b'A', A),
        (b'G', G),
        (b'R', A | G),
        (b'Y', C | T),
        (b'S', G | C),
        (b'W', A | T),
        (b'K', G | T),
        (b'M', A | C),
        (b'B', C | G | T),
        (b'D', A | G | T),
        (b'H', A | C | T),
        (b'V', A | C | G),
        (b'N', A | C | G | T),
    ];
    for (code, mask) in codes {
        map[code as usize] = mask;
        map[code.to_ascii_lowercase() as usize] = mask;
    }
    map
});

#[inline]
pub fn expansion_mask(a: u8) -> u8 {
    EXPANSION[a as usize]
}

/// Index (T=0, C=1, A=2, G=3) of an unambiguous base.
#[inline]
pub fn base_index(a: u8) -> Option<usize> {
    match expansion_mask(a) {
        1 => Some(0),
        2 => Some(1),
        4 => Some(2),
        8 => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(unambiguous_letters().is_word(b"GATTACA"));
    }

    #[test]
    fn is_no_word() {
        assert!(!unambiguous_letters().is_word(b"gaUUaca"));
    }

    #[test]
    fn ambiguous_accepts_iupac_codes() {
        assert!(ambiguous_letters().is_word(b"GATNRYB"));
        assert!(!unambiguous_letters().is_word(b"GATN"));
    }

    #[test]
    fn complement_pairs() {
        let rc: Vec<u8> = b"GATCRYkm".iter().rev().map(|&b| complement(b)).collect();
        assert_eq!(rc, b"kmRYGATC".to_vec());
        assert_eq!(complement(b'N'), b'N');
        assert_eq!(complement(b'-'), b'-');
    }

    #[test]
    fn expansions() {
        assert_eq!(base_index(b'u'), Some(0));
        assert_eq!(base_index(b'G'), Some(3));
        assert_eq!(base_index(b'R'), None);
        assert_eq!(expansion_mask(b'N'), 0b1111);
        assert_eq!(expansion_mask(b'X'), 0);
    }
}
