use std::borrow::Cow;

use crate::alphabets::Alphabet;
use crate::error::BioResult;
use crate::seq::bytes::{self, IntoNeedle};
use crate::seq::index::{normalize_range, resolve_index, SliceIndices};
use crate::seq::Seq;

/// Read-only view shared by [`Seq`] and [`MutableSeq`](crate::seq::MutableSeq).
///
/// Implementors backed by a placeholder run report it through
/// [`as_placeholder`](SeqRead::as_placeholder); the provided methods then
/// answer from `(len, symbol)` instead of building the residues.
pub trait SeqRead {
    fn alphabet(&self) -> Alphabet;

    fn len(&self) -> usize;

    /// The residues, borrowed when they already exist as a buffer.
    fn residues(&self) -> Cow<'_, [u8]>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_placeholder(&self) -> Option<(usize, u8)> {
        None
    }

    /// Residue at `index`; negative values count from the end.
    fn get(&self, index: isize) -> BioResult<u8> {
        let i = resolve_index(index, self.len())?;
        match self.as_placeholder() {
            Some((_, symbol)) => Ok(symbol),
            None => Ok(self.residues()[i]),
        }
    }

    /// `start:stop:step` slice. The alphabet is carried over unchanged.
    fn slice(&self, start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> BioResult<Seq> {
        let idx = SliceIndices::resolve(self.len(), start, stop, step)?;
        Ok(match self.as_placeholder() {
            Some((_, symbol)) => Seq::unknown_with(idx.len, self.alphabet(), symbol),
            None => Seq::new(idx.gather(&self.residues()), self.alphabet()),
        })
    }

    fn to_seq(&self) -> Seq {
        match self.as_placeholder() {
            Some((len, symbol)) => Seq::unknown_with(len, self.alphabet(), symbol),
            None => Seq::new(self.residues().into_owned(), self.alphabet()),
        }
    }

    /// Non-overlapping occurrences of `sub`, scanning left to right.
    fn count<'a, N>(&self, sub: N) -> BioResult<usize>
    where
        N: IntoNeedle<'a>,
    {
        let needle = sub.into_needle()?;
        Ok(match self.as_placeholder() {
            Some((len, symbol)) => bytes::count_in_run(len, symbol, &needle, false),
            None => bytes::count(&self.residues(), needle),
        })
    }

    fn count_overlap<'a, N>(&self, sub: N) -> BioResult<usize>
    where
        N: IntoNeedle<'a>,
    {
        let needle = sub.into_needle()?;
        Ok(match self.as_placeholder() {
            Some((len, symbol)) => bytes::count_in_run(len, symbol, &needle, true),
            None => bytes::count_overlap(&self.residues(), needle),
        })
    }

    fn contains<'a, N>(&self, sub: N) -> BioResult<bool>
    where
        N: IntoNeedle<'a>,
    {
        let needle = sub.into_needle()?;
        Ok(match self.as_placeholder() {
            Some((len, symbol)) => bytes::count_in_run(len, symbol, &needle, false) > 0,
            None => bytes::contains(&self.residues(), needle),
        })
    }

    fn find<'a, N>(&self, sub: N, start: Option<isize>, end: Option<isize>) -> BioResult<Option<usize>>
    where
        N: IntoNeedle<'a>,
    {
        let needle = sub.into_needle()?;
        let (start, end) = normalize_range(self.len(), start, end);
        Ok(match self.as_placeholder() {
            Some((_, symbol)) => bytes::find_in_run(symbol, &needle, start, end, false),
            None => bytes::find(&self.residues(), needle, start, end),
        })
    }

    fn rfind<'a, N>(&self, sub: N, start: Option<isize>, end: Option<isize>) -> BioResult<Option<usize>>
    where
        N: IntoNeedle<'a>,
    {
        let needle = sub.into_needle()?;
        let (start, end) = normalize_range(self.len(), start, end);
        Ok(match self.as_placeholder() {
            Some((_, symbol)) => bytes::find_in_run(symbol, &needle, start, end, true),
            None => bytes::rfind(&self.residues(), needle, start, end),
        })
    }

    fn starts_with<'a, N>(&self, prefix: N) -> BioResult<bool>
    where
        N: IntoNeedle<'a>,
    {
        let needle = prefix.into_needle()?;
        let pat = needle.as_slice();
        Ok(match self.as_placeholder() {
            Some((len, symbol)) => pat.len() <= len && pat.iter().all(|&b| b == symbol),
            None => self.residues().starts_with(pat),
        })
    }

    fn ends_with<'a, N>(&self, suffix: N) -> BioResult<bool>
    where
        N: IntoNeedle<'a>,
    {
        let needle = suffix.into_needle()?;
        let pat = needle.as_slice();
        Ok(match self.as_placeholder() {
            Some((len, symbol)) => pat.len() <= len && pat.iter().all(|&b| b == symbol),
            None => self.residues().ends_with(pat),
        })
    }
}
