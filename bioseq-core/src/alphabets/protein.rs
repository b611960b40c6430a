use crate::alphabets::SymbolSet;

pub const IUPAC: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";
pub const EXTENDED: &[u8] = b"ACDEFGHIKLMNPQRSTVWYBXZJUO";

pub fn iupac_letters() -> SymbolSet {
    SymbolSet::new(IUPAC)
}

pub fn extended_letters() -> SymbolSet {
    SymbolSet::new(EXTENDED)
}

/// One-letter code covering a set of residues produced by an ambiguous codon.
pub fn ambiguity_code(residues: &[u8]) -> u8 {
    match residues {
        [single] => *single,
        [b'D', b'N'] | [b'N', b'D'] => b'B',
        [b'E', b'Q'] | [b'Q', b'E'] => b'Z',
        [b'I', b'L'] | [b'L', b'I'] => b'J',
        _ => b'X',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iupac_is_subset_of_extended() {
        assert!(extended_letters().is_word(IUPAC));
        assert!(!iupac_letters().contains(b'X'));
    }

    #[test]
    fn ambiguity_codes() {
        assert_eq!(ambiguity_code(b"K"), b'K');
        assert_eq!(ambiguity_code(b"ND"), b'B');
        assert_eq!(ambiguity_code(b"EQ"), b'Z');
        assert_eq!(ambiguity_code(b"IL"), b'J');
        assert_eq!(ambiguity_code(b"IM"), b'X');
        assert_eq!(ambiguity_code(b"Y*"), b'X');
    }
}
