use crate::alphabets::dna::pairing_table;
use crate::alphabets::SymbolSet;
use std::sync::LazyLock;

pub const UNAMBIGUOUS: &[u8] = b"GAUC";
pub const AMBIGUOUS: &[u8] = b"GAUCRYWSMKHBVDN";

pub fn unambiguous_letters() -> SymbolSet {
    SymbolSet::new(UNAMBIGUOUS)
}

pub fn ambiguous_letters() -> SymbolSet {
    SymbolSet::new(AMBIGUOUS)
}

static COMPLEMENT: LazyLock<[u8; 256]> =
    LazyLock::new(|| pairing_table(b"AGCURYWSKMDVHBN", b"UCGARYWSMKHBDVN"));

#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}
