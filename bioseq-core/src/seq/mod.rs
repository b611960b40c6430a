//! Sequence values.
//!
//! [`Seq`] is immutable: every transform returns a new value. Its storage is
//! either a materialized buffer or a placeholder run (`len` copies of one
//! symbol) for sequences whose content is unknown. [`MutableSeq`] is the
//! editable counterpart; conversions between the two always copy.

pub mod batch;
pub mod bytes;
pub mod index;
pub mod mutable;
pub mod traits;
pub mod translate;

pub use batch::SeqBatch;
pub use bytes::{IntoNeedle, Needle};
pub use mutable::MutableSeq;
pub use traits::SeqRead;
pub use translate::TranslateOptions;

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::iter::{Copied, Repeat, Take};
use std::slice;

use crate::alphabets::{dna, rna, Alphabet};
use crate::error::{BioError, BioResult};

/// Backing storage of a [`Seq`].
#[derive(Clone, Debug)]
pub enum Residues {
    Buffer(Vec<u8>),
    Placeholder { len: usize, symbol: u8 },
}

#[derive(Clone, Debug)]
pub struct Seq {
    residues: Residues,
    alphabet: Alphabet,
}

impl Seq {
    /// Residues are taken as given; see [`Seq::validate`] for an explicit check.
    pub fn new(residues: impl Into<Vec<u8>>, alphabet: Alphabet) -> Self {
        Seq {
            residues: Residues::Buffer(residues.into()),
            alphabet,
        }
    }

    pub fn generic(residues: impl Into<Vec<u8>>) -> Self {
        Seq::new(residues, Alphabet::GENERIC)
    }

    /// Sequence of known length and unknown content, filled with the
    /// alphabet's placeholder symbol.
    pub fn unknown(len: usize, alphabet: Alphabet) -> Self {
        Seq::unknown_with(len, alphabet, alphabet.placeholder())
    }

    pub fn unknown_with(len: usize, alphabet: Alphabet, symbol: u8) -> Self {
        Seq {
            residues: Residues::Placeholder { len, symbol },
            alphabet,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.residues, Residues::Placeholder { .. })
    }

    pub fn storage(&self) -> &Residues {
        &self.residues
    }

    /// Same residues under a different alphabet tag.
    pub fn with_alphabet(self, alphabet: Alphabet) -> Self {
        Seq { alphabet, ..self }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self.residues {
            Residues::Buffer(bytes) => bytes,
            Residues::Placeholder { len, symbol } => vec![symbol; len],
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        match &self.residues {
            Residues::Buffer(bytes) => Iter::Buffer(bytes.iter().copied()),
            Residues::Placeholder { len, symbol } => {
                Iter::Run(std::iter::repeat(*symbol).take(*len))
            }
        }
    }

    /// Check the residues against the alphabet's strict letters, if it has any.
    pub fn validate(&self) -> BioResult<()> {
        let Some(letters) = self.alphabet.letters() else {
            return Ok(());
        };
        let invalid = match &self.residues {
            Residues::Buffer(bytes) => letters.first_invalid(bytes),
            Residues::Placeholder { len, symbol } => {
                (*len > 0 && !letters.contains(*symbol)).then_some((0, *symbol))
            }
        };
        match invalid {
            Some((pos, b)) => Err(BioError::InvalidChar { ch: b as char, pos }),
            None => Ok(()),
        }
    }

    fn map_residues<F>(&self, alphabet: Alphabet, f: F) -> Seq
    where
        F: Fn(u8) -> u8,
    {
        let residues = match &self.residues {
            Residues::Buffer(bytes) => Residues::Buffer(bytes.iter().map(|&b| f(b)).collect()),
            Residues::Placeholder { len, symbol } => Residues::Placeholder {
                len: *len,
                symbol: f(*symbol),
            },
        };
        Seq { residues, alphabet }
    }

    pub fn upper(&self) -> Seq {
        self.map_residues(self.alphabet, |b| b.to_ascii_uppercase())
    }

    /// Lower-case copy. Strict IUPAC alphabets are upper case only, so the
    /// result falls back to the generic tag of the same family.
    pub fn lower(&self) -> Seq {
        self.map_residues(self.alphabet.case_relaxed(), |b| b.to_ascii_lowercase())
    }

    pub fn reverse(&self) -> Seq {
        let residues = match &self.residues {
            Residues::Buffer(bytes) => Residues::Buffer(bytes.iter().rev().copied().collect()),
            run => run.clone(),
        };
        Seq {
            residues,
            alphabet: self.alphabet,
        }
    }

    /// `self + other`. Fails when the alphabets cannot be combined.
    pub fn concat<S>(&self, other: &S) -> BioResult<Seq>
    where
        S: SeqRead + ?Sized,
    {
        let alphabet = self.alphabet.join(other.alphabet())?;
        if let (Residues::Placeholder { len, symbol }, Some((other_len, other_symbol))) =
            (&self.residues, other.as_placeholder())
        {
            if *symbol == other_symbol {
                return Ok(Seq::unknown_with(len + other_len, alphabet, *symbol));
            }
        }
        let mut bytes = Vec::with_capacity(self.len() + other.len());
        bytes.extend(self.iter());
        bytes.extend_from_slice(&other.residues());
        Ok(Seq::new(bytes, alphabet))
    }

    /// Append plain text; text carries no alphabet so the tag is kept.
    pub fn concat_str(&self, text: &str) -> Seq {
        let mut bytes = Vec::with_capacity(self.len() + text.len());
        bytes.extend(self.iter());
        bytes.extend_from_slice(text.as_bytes());
        Seq::new(bytes, self.alphabet)
    }

    /// A placeholder run is inferred from its symbol alone.
    fn pairing(&self, op: &'static str) -> BioResult<fn(u8) -> u8> {
        match &self.residues {
            Residues::Buffer(bytes) => base_pairing(self.alphabet, bytes, op),
            Residues::Placeholder { symbol, .. } => {
                base_pairing(self.alphabet, slice::from_ref(symbol), op)
            }
        }
    }

    pub fn complement(&self) -> BioResult<Seq> {
        let pair = self.pairing("complement")?;
        Ok(self.map_residues(self.alphabet, pair))
    }

    pub fn reverse_complement(&self) -> BioResult<Seq> {
        let pair = self.pairing("reverse_complement")?;
        let residues = match &self.residues {
            Residues::Buffer(bytes) => {
                Residues::Buffer(bytes.iter().rev().map(|&b| pair(b)).collect())
            }
            Residues::Placeholder { len, symbol } => Residues::Placeholder {
                len: *len,
                symbol: pair(*symbol),
            },
        };
        Ok(Seq {
            residues,
            alphabet: self.alphabet,
        })
    }

    /// DNA to RNA: `T` becomes `U`.
    pub fn transcribe(&self) -> BioResult<Seq> {
        let alphabet = self.alphabet.transcribed()?;
        Ok(self.map_residues(alphabet, |b| match b {
            b'T' => b'U',
            b't' => b'u',
            other => other,
        }))
    }

    /// RNA to DNA: `U` becomes `T`.
    pub fn back_transcribe(&self) -> BioResult<Seq> {
        let alphabet = self.alphabet.back_transcribed()?;
        Ok(self.map_residues(alphabet, |b| match b {
            b'U' => b'T',
            b'u' => b't',
            other => other,
        }))
    }

    pub fn to_mutable(&self) -> MutableSeq {
        MutableSeq::new(self.residues().into_owned(), self.alphabet)
    }
}

/// Complement function for a nucleotide sequence.
///
/// Tags that do not say DNA or RNA are resolved from content: `U` without `T`
/// means RNA, both together is an error.
pub(crate) fn base_pairing(
    alphabet: Alphabet,
    residues: &[u8],
    op: &'static str,
) -> BioResult<fn(u8) -> u8> {
    if alphabet.is_protein() {
        return Err(BioError::NotNucleotide { op });
    }
    if alphabet.is_dna() {
        return Ok(dna::complement);
    }
    if alphabet.is_rna() {
        return Ok(rna::complement);
    }
    let has_t = memchr::memchr2(b'T', b't', residues).is_some();
    let has_u = memchr::memchr2(b'U', b'u', residues).is_some();
    let pair: fn(u8) -> u8 = match (has_t, has_u) {
        (true, true) => return Err(BioError::MixedNucleotides),
        (false, true) => rna::complement,
        _ => dna::complement,
    };
    Ok(pair)
}

impl SeqRead for Seq {
    fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    fn len(&self) -> usize {
        match &self.residues {
            Residues::Buffer(bytes) => bytes.len(),
            Residues::Placeholder { len, .. } => *len,
        }
    }

    fn residues(&self) -> Cow<'_, [u8]> {
        match &self.residues {
            Residues::Buffer(bytes) => Cow::Borrowed(bytes),
            Residues::Placeholder { len, symbol } => Cow::Owned(vec![*symbol; *len]),
        }
    }

    fn as_placeholder(&self) -> Option<(usize, u8)> {
        match self.residues {
            Residues::Placeholder { len, symbol } => Some((len, symbol)),
            Residues::Buffer(_) => None,
        }
    }
}

/// Iterator over the residues of a [`Seq`].
#[derive(Clone, Debug)]
pub enum Iter<'a> {
    Buffer(Copied<slice::Iter<'a, u8>>),
    Run(Take<Repeat<u8>>),
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        match self {
            Iter::Buffer(it) => it.next(),
            Iter::Run(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Buffer(it) => it.size_hint(),
            Iter::Run(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoNeedle<'a> for &'a Seq {
    fn into_needle(self) -> BioResult<Needle<'a>> {
        Ok(Needle::Bytes(self.residues()))
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.residues {
            Residues::Buffer(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            Residues::Placeholder { len, symbol } => {
                for _ in 0..*len {
                    f.write_char(*symbol as char)?;
                }
                Ok(())
            }
        }
    }
}

// Equality and hashing look at residues only, never at the alphabet tag.
impl PartialEq for Seq {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Seq {}

const HASH_CHUNK: usize = 256;

// Both storages feed the hasher identical chunks so equal content hashes equally.
impl Hash for Seq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        match &self.residues {
            Residues::Buffer(bytes) => {
                for chunk in bytes.chunks(HASH_CHUNK) {
                    state.write(chunk);
                }
            }
            Residues::Placeholder { len, symbol } => {
                let run = [*symbol; HASH_CHUNK];
                let mut left = *len;
                while left > 0 {
                    let n = left.min(HASH_CHUNK);
                    state.write(&run[..n]);
                    left -= n;
                }
            }
        }
    }
}

impl PartialEq<str> for Seq {
    fn eq(&self, other: &str) -> bool {
        self.len() == other.len() && self.iter().eq(other.bytes())
    }
}

impl PartialEq<&str> for Seq {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl From<&str> for Seq {
    fn from(s: &str) -> Self {
        Seq::generic(s.as_bytes())
    }
}

impl From<String> for Seq {
    fn from(s: String) -> Self {
        Seq::generic(s.into_bytes())
    }
}

#[cfg(test)]
mod tests;
