use crate::error::BioResult;
use crate::seq::{Seq, SeqRead, TranslateOptions};
use std::ops::Index;

/// A set of sequences transformed together, in parallel with the
/// `parallel` feature.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SeqBatch {
    seqs: Vec<Seq>,
}

impl SeqBatch {
    pub fn new(seqs: Vec<Seq>) -> Self {
        Self { seqs }
    }

    pub fn as_slice(&self) -> &[Seq] {
        &self.seqs
    }

    pub fn into_vec(self) -> Vec<Seq> {
        self.seqs
    }

    pub fn len(&self) -> usize {
        self.seqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Seq> {
        self.seqs.get(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Seq> {
        self.seqs.iter()
    }

    pub fn push(&mut self, s: Seq) {
        self.seqs.push(s);
    }

    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Seq>,
    {
        self.seqs.extend(iter);
    }

    pub fn lengths(&self) -> Vec<usize> {
        par_map!(self.seqs, |seq: &Seq| seq.len())
    }

    /// Translate every sequence with the same options; the first failure wins.
    pub fn translate_all(&self, opts: &TranslateOptions<'_>) -> BioResult<Self> {
        let seqs = par_try_map!(self.seqs, |seq: &Seq| seq.translate(opts))?;
        Ok(Self { seqs })
    }

    pub fn reverse_complements(&self) -> BioResult<Self> {
        let seqs = par_try_map!(self.seqs, |seq: &Seq| seq.reverse_complement())?;
        Ok(Self { seqs })
    }

    pub fn transcribe_all(&self) -> BioResult<Self> {
        let seqs = par_try_map!(self.seqs, |seq: &Seq| seq.transcribe())?;
        Ok(Self { seqs })
    }
}

impl Index<usize> for SeqBatch {
    type Output = Seq;

    fn index(&self, index: usize) -> &Self::Output {
        &self.seqs[index]
    }
}

impl From<Vec<Seq>> for SeqBatch {
    fn from(seqs: Vec<Seq>) -> Self {
        Self { seqs }
    }
}

impl FromIterator<Seq> for SeqBatch {
    fn from_iter<I: IntoIterator<Item = Seq>>(iter: I) -> Self {
        Self {
            seqs: iter.into_iter().collect(),
        }
    }
}
