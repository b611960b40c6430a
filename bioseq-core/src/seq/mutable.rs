use std::borrow::Cow;
use std::fmt;

use crate::alphabets::Alphabet;
use crate::error::{BioError, BioResult};
use crate::seq::bytes::{IntoNeedle, Needle};
use crate::seq::index::{resolve_index, SliceIndices};
use crate::seq::{base_pairing, Seq, SeqRead};

/// Editable sequence buffer.
///
/// Complement and reverse complement work in place here, unlike on [`Seq`].
/// Not hashable.
#[derive(Clone, Debug)]
pub struct MutableSeq {
    data: Vec<u8>,
    alphabet: Alphabet,
}

impl MutableSeq {
    pub fn new(data: impl Into<Vec<u8>>, alphabet: Alphabet) -> Self {
        MutableSeq {
            data: data.into(),
            alphabet,
        }
    }

    pub fn generic(data: impl Into<Vec<u8>>) -> Self {
        MutableSeq::new(data, Alphabet::GENERIC)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn set_alphabet(&mut self, alphabet: Alphabet) {
        self.alphabet = alphabet;
    }

    pub fn set(&mut self, index: isize, value: u8) -> BioResult<()> {
        let i = resolve_index(index, self.data.len())?;
        self.data[i] = value;
        Ok(())
    }

    /// Slice assignment. A contiguous slice may change length; an extended
    /// slice (`step != 1`) needs exactly one value per position.
    pub fn set_slice(
        &mut self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
        values: &[u8],
    ) -> BioResult<()> {
        let idx = SliceIndices::resolve(self.data.len(), start, stop, step)?;
        if idx.is_contiguous() {
            let from = idx.start as usize;
            let to = (idx.stop as usize).max(from);
            self.data.splice(from..to, values.iter().copied());
            return Ok(());
        }
        if idx.len != values.len() {
            return Err(BioError::SliceLengthMismatch {
                expected: idx.len,
                got: values.len(),
            });
        }
        for (pos, &b) in idx.positions().zip(values) {
            self.data[pos] = b;
        }
        Ok(())
    }

    pub fn delete(&mut self, index: isize) -> BioResult<()> {
        let i = resolve_index(index, self.data.len())?;
        self.data.remove(i);
        Ok(())
    }

    pub fn delete_slice(
        &mut self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> BioResult<()> {
        let idx = SliceIndices::resolve(self.data.len(), start, stop, step)?;
        if idx.is_contiguous() {
            let from = idx.start as usize;
            self.data.drain(from..from + idx.len);
            return Ok(());
        }
        let mut doomed = vec![false; self.data.len()];
        idx.positions().for_each(|pos| doomed[pos] = true);
        let mut i = 0;
        self.data.retain(|_| {
            let keep = !doomed[i];
            i += 1;
            keep
        });
        Ok(())
    }

    /// Remove and return the residue at `index` (last one by default).
    pub fn pop(&mut self, index: Option<isize>) -> BioResult<u8> {
        let i = resolve_index(index.unwrap_or(-1), self.data.len())?;
        Ok(self.data.remove(i))
    }

    /// Insert before `index`; out-of-range positions clamp to either end.
    pub fn insert(&mut self, index: isize, value: u8) {
        let n = self.data.len() as isize;
        let i = if index < 0 { (index + n).max(0) } else { index.min(n) };
        self.data.insert(i as usize, value);
    }

    pub fn push(&mut self, value: u8) {
        self.data.push(value);
    }

    pub fn extend_from_slice(&mut self, values: &[u8]) {
        self.data.extend_from_slice(values);
    }

    /// Append another sequence; the alphabets must be compatible.
    pub fn extend_from<S>(&mut self, other: &S) -> BioResult<()>
    where
        S: SeqRead + ?Sized,
    {
        let alphabet = self.alphabet.join(other.alphabet())?;
        self.data.extend_from_slice(&other.residues());
        self.alphabet = alphabet;
        Ok(())
    }

    /// Remove the first occurrence of `value`.
    pub fn remove(&mut self, value: u8) -> BioResult<()> {
        match memchr::memchr(value, &self.data) {
            Some(i) => {
                self.data.remove(i);
                Ok(())
            }
            None => Err(BioError::NotFound { ch: value as char }),
        }
    }

    pub fn index_of(&self, value: u8) -> BioResult<usize> {
        memchr::memchr(value, &self.data).ok_or(BioError::NotFound { ch: value as char })
    }

    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    pub fn complement(&mut self) -> BioResult<()> {
        let pair = base_pairing(self.alphabet, &self.data, "complement")?;
        self.data.iter_mut().for_each(|b| *b = pair(*b));
        Ok(())
    }

    pub fn reverse_complement(&mut self) -> BioResult<()> {
        self.complement()?;
        self.data.reverse();
        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl SeqRead for MutableSeq {
    fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn residues(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(&self.data)
    }
}

impl<'a> IntoNeedle<'a> for &'a MutableSeq {
    fn into_needle(self) -> BioResult<Needle<'a>> {
        Ok(Needle::Bytes(Cow::Borrowed(&self.data)))
    }
}

impl fmt::Display for MutableSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl PartialEq for MutableSeq {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for MutableSeq {}

impl PartialEq<Seq> for MutableSeq {
    fn eq(&self, other: &Seq) -> bool {
        self.data.len() == other.len() && self.data.iter().copied().eq(other.iter())
    }
}

impl PartialEq<&str> for MutableSeq {
    fn eq(&self, other: &&str) -> bool {
        self.data == other.as_bytes()
    }
}

impl From<Seq> for MutableSeq {
    fn from(seq: Seq) -> Self {
        let alphabet = seq.alphabet();
        MutableSeq::new(seq.into_bytes(), alphabet)
    }
}

impl From<&Seq> for MutableSeq {
    fn from(seq: &Seq) -> Self {
        seq.to_mutable()
    }
}

impl From<MutableSeq> for Seq {
    fn from(seq: MutableSeq) -> Self {
        Seq::new(seq.data, seq.alphabet)
    }
}

impl From<&MutableSeq> for Seq {
    fn from(seq: &MutableSeq) -> Self {
        seq.to_seq()
    }
}

impl From<&str> for MutableSeq {
    fn from(s: &str) -> Self {
        MutableSeq::generic(s.as_bytes())
    }
}
