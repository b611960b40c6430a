//! Biological sequences tagged with an alphabet, and the NCBI codon tables
//! used to translate them.

#[macro_use]
mod par;

pub mod alphabets;
pub mod codon;
pub mod error;
pub mod seq;

pub use alphabets::{Alphabet, AlphabetKind};
pub use codon::{tables, CodonTable, TableSelector};
pub use error::{BioError, BioResult, ErrorCategory};
pub use seq::{MutableSeq, Seq, SeqBatch, SeqRead, TranslateOptions};
