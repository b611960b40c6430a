use std::borrow::Cow;

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PySlice, PyString};

use crate::alphabet::PyAlphabet;
use crate::error::IntoPyResult;
use crate::mutable_seq::PyMutableSeq;
use crate::seq::PySeq;
use bioseq_core::seq::Needle;
use bioseq_core::{Alphabet, BioError, BioResult, SeqRead};

/// Residues of a `Seq`, `MutableSeq`, `str` or bytes-like object.
pub fn extract_bytes(obj: &Bound<'_, PyAny>) -> PyResult<Vec<u8>> {
    if let Ok(seq) = obj.downcast::<PySeq>() {
        return Ok(seq.get().inner.residues().into_owned());
    }

    if let Ok(seq) = obj.extract::<PyRef<'_, PyMutableSeq>>() {
        return Ok(seq.inner.as_bytes().to_vec());
    }

    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes().to_vec());
    }

    obj.extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected Seq, MutableSeq, str, or bytes-like object"))
}

pub enum PyNeedle<'py> {
    Bytes(Vec<u8>),
    Byte(u8),
    Seq(PyRef<'py, PySeq>),
    Mutable(PyRef<'py, PyMutableSeq>),
}

impl PyNeedle<'_> {
    pub fn as_needle(&self) -> Needle<'_> {
        match self {
            PyNeedle::Bytes(b) => Needle::Bytes(Cow::Borrowed(b)),
            PyNeedle::Byte(b) => Needle::Byte(*b),
            PyNeedle::Seq(s) => Needle::Bytes(s.inner.residues()),
            PyNeedle::Mutable(m) => Needle::Bytes(Cow::Borrowed(m.inner.as_bytes())),
        }
    }
}

pub fn extract_needle<'py>(obj: &Bound<'py, PyAny>) -> PyResult<PyNeedle<'py>> {
    if let Ok(seq) = obj.extract::<PyRef<'py, PySeq>>() {
        return Ok(PyNeedle::Seq(seq));
    }

    if let Ok(seq) = obj.extract::<PyRef<'py, PyMutableSeq>>() {
        return Ok(PyNeedle::Mutable(seq));
    }

    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(PyNeedle::Bytes(s.to_str()?.as_bytes().to_vec()));
    }

    if let Ok(b) = obj.extract::<Vec<u8>>() {
        return Ok(PyNeedle::Bytes(b));
    }

    if let Ok(n) = obj.extract::<i64>() {
        if (0..=255).contains(&n) {
            return Ok(PyNeedle::Byte(n as u8));
        }
        return Err(PyValueError::new_err("sub must be an int in range 0..=255"));
    }

    Err(PyTypeError::new_err(
        "sub must be Seq, MutableSeq, str, bytes-like, or int (0..=255)",
    ))
}

/// A single residue given as a one-character `str` or an int.
pub fn extract_residue(obj: &Bound<'_, PyAny>) -> PyResult<u8> {
    if let Ok(s) = obj.downcast::<PyString>() {
        let s = s.to_str()?;
        return match s.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(PyValueError::new_err(
                "expected a single ASCII character",
            )),
        };
    }

    match obj.extract::<i64>() {
        Ok(n) if (0..=255).contains(&n) => Ok(n as u8),
        Ok(_) => Err(PyValueError::new_err("value must be in range 0..=255")),
        Err(_) => Err(PyTypeError::new_err("expected a one-character str or an int")),
    }
}

/// `None`, an `Alphabet`, or an alphabet name.
pub fn extract_alphabet(obj: Option<&Bound<'_, PyAny>>) -> PyResult<Alphabet> {
    let Some(obj) = obj else {
        return Ok(Alphabet::GENERIC);
    };

    if obj.is_none() {
        return Ok(Alphabet::GENERIC);
    }

    if let Ok(alphabet) = obj.downcast::<PyAlphabet>() {
        return Ok(alphabet.get().inner);
    }

    if let Ok(s) = obj.downcast::<PyString>() {
        return s.to_str()?.parse::<Alphabet>().into_pyresult();
    }

    Err(PyTypeError::new_err("alphabet must be an Alphabet or a name"))
}

pub fn single_ascii(symbol: &str) -> BioResult<u8> {
    match symbol.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(BioError::InvalidStopSymbol {
            symbol: symbol.to_string(),
        }),
    }
}

pub enum SeqIndex {
    Int(isize),
    Slice {
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    },
}

pub fn extract_index(index: &Bound<'_, PyAny>) -> PyResult<SeqIndex> {
    if let Ok(slice) = index.downcast::<PySlice>() {
        return Ok(SeqIndex::Slice {
            start: slice.getattr("start")?.extract()?,
            stop: slice.getattr("stop")?.extract()?,
            step: slice.getattr("step")?.extract()?,
        });
    }

    index
        .extract::<isize>()
        .map(SeqIndex::Int)
        .map_err(|_| PyTypeError::new_err("index must be int or slice"))
}

pub fn seq_str(bytes: &[u8]) -> PyResult<String> {
    std::str::from_utf8(bytes)
        .map(|s| s.to_string())
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Long sequences are shortened to `head...tail` in reprs.
pub fn seq_repr(text: &str) -> String {
    const MAX: usize = 60;
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= MAX {
        return format!("{text:?}");
    }
    let head: String = chars[..MAX - 6].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("\"{head}...{tail}\"")
}
