use thiserror::Error;

use crate::alphabets::Alphabet;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BioError {
    #[error("incompatible alphabets {left} and {right}")]
    AlphabetMismatch { left: Alphabet, right: Alphabet },

    #[error("{op}: proteins do not have complements")]
    NotNucleotide { op: &'static str },

    #[error("{op} requires a DNA sequence")]
    NotDna { op: &'static str },

    #[error("{op} requires an RNA sequence")]
    NotRna { op: &'static str },

    #[error("mixed RNA/DNA found")]
    MixedNucleotides,

    #[error("proteins cannot be translated")]
    ProteinTranslation,

    #[error("invalid coding sequence: {msg}")]
    InvalidCds { msg: String },

    #[error("unknown codon table id {id}")]
    UnknownTableId { id: u8 },

    #[error("unknown codon table name '{name}'")]
    UnknownTableName { name: String },

    #[error("codon '{codon}' is a stop codon")]
    StopCodonLookup { codon: String },

    #[error("codon '{codon}' is invalid")]
    InvalidCodon { codon: String },

    #[error("{op}: sequence is immutable")]
    Immutable { op: &'static str },

    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("slice step cannot be zero")]
    ZeroSliceStep,

    #[error("attempt to assign sequence of size {got} to extended slice of size {expected}")]
    SliceLengthMismatch { expected: usize, got: usize },

    #[error("'{ch}' not found in sequence")]
    NotFound { ch: char },

    #[error("unknown alphabet '{name}'")]
    UnknownAlphabet { name: String },

    #[error("stop symbol must be a single ASCII character, got '{symbol}'")]
    InvalidStopSymbol { symbol: String },
}

pub type BioResult<T> = Result<T, BioError>;

/// Coarse grouping of [`BioError`] variants, used by bindings to pick an
/// exception type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The operation is not defined for these operands.
    Type,
    Translation,
    Lookup,
    Index,
    Value,
}

impl BioError {
    pub fn category(&self) -> ErrorCategory {
        use BioError::*;
        match self {
            AlphabetMismatch { .. } | Immutable { .. } => ErrorCategory::Type,
            InvalidCds { .. } | InvalidCodon { .. } => ErrorCategory::Translation,
            UnknownTableId { .. } | UnknownTableName { .. } | StopCodonLookup { .. } => {
                ErrorCategory::Lookup
            }
            IndexOutOfRange { .. } => ErrorCategory::Index,
            NotNucleotide { .. }
            | NotDna { .. }
            | NotRna { .. }
            | MixedNucleotides
            | ProteinTranslation
            | InvalidChar { .. }
            | ZeroSliceStep
            | SliceLengthMismatch { .. }
            | NotFound { .. }
            | UnknownAlphabet { .. }
            | InvalidStopSymbol { .. } => ErrorCategory::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immutable_edits_are_type_errors() {
        let err = BioError::Immutable {
            op: "item assignment",
        };
        assert_eq!(err.category(), ErrorCategory::Type);
        assert_eq!(err.to_string(), "item assignment: sequence is immutable");
    }

    #[test]
    fn categories() {
        let mismatch = BioError::AlphabetMismatch {
            left: Alphabet::DNA,
            right: Alphabet::PROTEIN,
        };
        assert_eq!(mismatch.category(), ErrorCategory::Type);
        assert_eq!(
            BioError::InvalidCds { msg: "x".into() }.category(),
            ErrorCategory::Translation
        );
        assert_eq!(
            BioError::StopCodonLookup { codon: "TAA".into() }.category(),
            ErrorCategory::Lookup
        );
        assert_eq!(
            BioError::IndexOutOfRange { index: 9, len: 3 }.category(),
            ErrorCategory::Index
        );
        assert_eq!(BioError::MixedNucleotides.category(), ErrorCategory::Value);
    }
}
