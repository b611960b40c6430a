use crate::error::BioResult;

use memchr::{memchr_iter, memmem};
use std::borrow::Cow;

/// Search pattern: a byte string or a single byte.
#[derive(Clone, Debug)]
pub enum Needle<'a> {
    Bytes(Cow<'a, [u8]>),
    Byte(u8),
}

impl Needle<'_> {
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Needle::Bytes(b) => b,
            Needle::Byte(b) => std::slice::from_ref(b),
        }
    }
}

pub trait IntoNeedle<'a> {
    fn into_needle(self) -> BioResult<Needle<'a>>;
}

impl<'a> IntoNeedle<'a> for &'a [u8] {
    #[inline]
    fn into_needle(self) -> BioResult<Needle<'a>> {
        Ok(Needle::Bytes(Cow::Borrowed(self)))
    }
}

impl<'a> IntoNeedle<'a> for &'a str {
    #[inline]
    fn into_needle(self) -> BioResult<Needle<'a>> {
        Ok(Needle::Bytes(Cow::Borrowed(self.as_bytes())))
    }
}

impl<'a> IntoNeedle<'a> for &'a String {
    #[inline]
    fn into_needle(self) -> BioResult<Needle<'a>> {
        Ok(Needle::Bytes(Cow::Borrowed(self.as_bytes())))
    }
}

impl<'a> IntoNeedle<'a> for u8 {
    #[inline]
    fn into_needle(self) -> BioResult<Needle<'a>> {
        Ok(Needle::Byte(self))
    }
}

impl<'a> IntoNeedle<'a> for char {
    #[inline]
    fn into_needle(self) -> BioResult<Needle<'a>> {
        if self.is_ascii() {
            return Ok(Needle::Byte(self as u8));
        }
        Ok(Needle::Bytes(Cow::Owned(self.to_string().into_bytes())))
    }
}

impl<'a, const N: usize> IntoNeedle<'a> for &'a [u8; N] {
    #[inline]
    fn into_needle(self) -> BioResult<Needle<'a>> {
        Ok(Needle::Bytes(Cow::Borrowed(self.as_slice())))
    }
}

impl<'a> IntoNeedle<'a> for Needle<'a> {
    #[inline]
    fn into_needle(self) -> BioResult<Needle<'a>> {
        Ok(self)
    }
}

/// Clamp `[start, end)` to the haystack. `None` when the window is inverted.
fn window(hay: &[u8], start: usize, end: usize) -> Option<(usize, &[u8])> {
    let (start, end) = (start.min(hay.len()), end.min(hay.len()));
    (start <= end).then(|| (start, &hay[start..end]))
}

/// Non-overlapping matches; an empty needle matches between every residue.
pub fn count(hay: &[u8], needle: Needle<'_>) -> usize {
    match needle.as_slice() {
        [] => hay.len() + 1,
        [b] => memchr_iter(*b, hay).count(),
        pat => memmem::find_iter(hay, pat).count(),
    }
}

pub fn count_overlap(hay: &[u8], needle: Needle<'_>) -> usize {
    match needle.as_slice() {
        [] => hay.len() + 1,
        [b] => memchr_iter(*b, hay).count(),
        pat => {
            let finder = memmem::Finder::new(pat);
            let mut count = 0usize;
            let mut from = 0usize;
            while let Some(i) = finder.find(&hay[from..]) {
                count += 1;
                from += i + 1;
            }
            count
        }
    }
}

pub fn contains(hay: &[u8], needle: Needle<'_>) -> bool {
    match needle.as_slice() {
        [] => true,
        [b] => memchr::memchr(*b, hay).is_some(),
        pat => memmem::find(hay, pat).is_some(),
    }
}

pub fn find(hay: &[u8], needle: Needle<'_>, start: usize, end: usize) -> Option<usize> {
    let (offset, win) = window(hay, start, end)?;
    memmem::find(win, needle.as_slice()).map(|i| offset + i)
}

pub fn rfind(hay: &[u8], needle: Needle<'_>, start: usize, end: usize) -> Option<usize> {
    let (offset, win) = window(hay, start, end)?;
    memmem::rfind(win, needle.as_slice()).map(|i| offset + i)
}

/// Counts for a run of `len` copies of `symbol`, without building the run.
pub fn count_in_run(len: usize, symbol: u8, needle: &Needle<'_>, overlap: bool) -> usize {
    let pat = needle.as_slice();
    if pat.is_empty() {
        return len + 1;
    }
    if pat.len() > len || pat.iter().any(|&b| b != symbol) {
        return 0;
    }
    if overlap {
        len - pat.len() + 1
    } else {
        len / pat.len()
    }
}

/// First (or last, with `from_end`) match inside `[start, end)` of a run.
/// The bounds must already be clamped to the run length.
pub fn find_in_run(
    symbol: u8,
    needle: &Needle<'_>,
    start: usize,
    end: usize,
    from_end: bool,
) -> Option<usize> {
    let pat = needle.as_slice();
    if start > end || pat.len() > end - start || pat.iter().any(|&b| b != symbol) {
        return None;
    }
    Some(if from_end { end - pat.len() } else { start })
}
