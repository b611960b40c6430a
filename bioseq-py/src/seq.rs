use std::hash::{Hash, Hasher};

use pyo3::basic::CompareOp;
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyModule, PyString};

use crate::alphabet::PyAlphabet;
use crate::codon::extract_table;
use crate::error::{to_pyerr, IntoPyResult};
use crate::mutable_seq::PyMutableSeq;
use crate::utils::{self, SeqIndex};
use bioseq_core::codon::tables;
use bioseq_core::{BioError, Seq, SeqRead, TranslateOptions};

#[pyclass(frozen, name = "Seq")]
pub struct PySeq {
    pub(crate) inner: Seq,
}

impl From<Seq> for PySeq {
    fn from(inner: Seq) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PySeq {
    #[new]
    #[pyo3(signature = (data, alphabet=None))]
    fn new(data: &Bound<'_, PyAny>, alphabet: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let alphabet = utils::extract_alphabet(alphabet)?;
        let bytes = utils::extract_bytes(data)?;
        Ok(Seq::new(bytes, alphabet).into())
    }

    #[getter]
    fn alphabet(&self) -> PyAlphabet {
        PyAlphabet {
            inner: self.inner.alphabet(),
        }
    }

    #[getter]
    fn is_unknown(&self) -> bool {
        self.inner.is_unknown()
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, &self.inner.residues())
    }

    fn __bytes__<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        self.to_bytes(py)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        let alphabet = self.inner.alphabet();
        match self.inner.as_placeholder() {
            Some((len, symbol)) => format!(
                "UnknownSeq({len}, alphabet={alphabet}, character={:?})",
                symbol as char
            ),
            None => format!("Seq({}, {alphabet})", utils::seq_repr(&self.inner.to_string())),
        }
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }

    fn __richcmp__(&self, py: Python<'_>, other: &Bound<'_, PyAny>, op: CompareOp) -> PyObject {
        let Ok(other) = utils::extract_bytes(other) else {
            return py.NotImplemented();
        };
        let ord = self.inner.iter().cmp(other.iter().copied());
        op.matches(ord).into_py(py)
    }

    fn __getitem__(&self, py: Python<'_>, index: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        match utils::extract_index(index)? {
            SeqIndex::Int(i) => {
                let b = self.inner.get(i).into_pyresult()?;
                Ok((b as char).to_string().into_py(py))
            }
            SeqIndex::Slice { start, stop, step } => {
                let inner = self.inner.slice(start, stop, step).into_pyresult()?;
                Ok(Py::new(py, PySeq { inner })?.into_py(py))
            }
        }
    }

    fn __setitem__(&self, _index: &Bound<'_, PyAny>, _value: &Bound<'_, PyAny>) -> PyResult<()> {
        Err(to_pyerr(BioError::Immutable { op: "item assignment" }))
    }

    fn __delitem__(&self, _index: &Bound<'_, PyAny>) -> PyResult<()> {
        Err(to_pyerr(BioError::Immutable { op: "item deletion" }))
    }

    fn __add__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        if let Ok(seq) = other.downcast::<PySeq>() {
            return self.inner.concat(&seq.get().inner).into_pyresult().map(Self::from);
        }

        if let Ok(seq) = other.extract::<PyRef<'_, PyMutableSeq>>() {
            return self.inner.concat(&seq.inner).into_pyresult().map(Self::from);
        }

        if let Ok(s) = other.downcast::<PyString>() {
            return Ok(self.inner.concat_str(s.to_str()?).into());
        }

        Err(PyTypeError::new_err("can only add Seq, MutableSeq, or str to Seq"))
    }

    fn __radd__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        // str + Seq; the text takes the alphabet of the Seq
        let left = Seq::new(utils::extract_bytes(other)?, self.inner.alphabet());
        left.concat(&self.inner).into_pyresult().map(Self::from)
    }

    fn __contains__(&self, sub: &Bound<'_, PyAny>) -> PyResult<bool> {
        let needle = utils::extract_needle(sub)?;
        self.inner.contains(needle.as_needle()).into_pyresult()
    }

    fn count(&self, sub: &Bound<'_, PyAny>) -> PyResult<usize> {
        let needle = utils::extract_needle(sub)?;
        self.inner.count(needle.as_needle()).into_pyresult()
    }

    fn count_overlap(&self, sub: &Bound<'_, PyAny>) -> PyResult<usize> {
        let needle = utils::extract_needle(sub)?;
        self.inner.count_overlap(needle.as_needle()).into_pyresult()
    }

    #[pyo3(signature = (sub, start=None, end=None))]
    fn find(
        &self,
        sub: &Bound<'_, PyAny>,
        start: Option<isize>,
        end: Option<isize>,
    ) -> PyResult<isize> {
        let needle = utils::extract_needle(sub)?;
        let pos = self.inner.find(needle.as_needle(), start, end).into_pyresult()?;
        Ok(pos.map_or(-1, |p| p as isize))
    }

    #[pyo3(signature = (sub, start=None, end=None))]
    fn rfind(
        &self,
        sub: &Bound<'_, PyAny>,
        start: Option<isize>,
        end: Option<isize>,
    ) -> PyResult<isize> {
        let needle = utils::extract_needle(sub)?;
        let pos = self.inner.rfind(needle.as_needle(), start, end).into_pyresult()?;
        Ok(pos.map_or(-1, |p| p as isize))
    }

    #[pyo3(signature = (prefix, start=None, end=None))]
    fn startswith(
        &self,
        prefix: &Bound<'_, PyAny>,
        start: Option<isize>,
        end: Option<isize>,
    ) -> PyResult<bool> {
        let needle = utils::extract_needle(prefix)?;
        let window = self.inner.slice(start, end, None).into_pyresult()?;
        window.starts_with(needle.as_needle()).into_pyresult()
    }

    #[pyo3(signature = (suffix, start=None, end=None))]
    fn endswith(
        &self,
        suffix: &Bound<'_, PyAny>,
        start: Option<isize>,
        end: Option<isize>,
    ) -> PyResult<bool> {
        let needle = utils::extract_needle(suffix)?;
        let window = self.inner.slice(start, end, None).into_pyresult()?;
        window.ends_with(needle.as_needle()).into_pyresult()
    }

    fn upper(&self) -> Self {
        self.inner.upper().into()
    }

    fn lower(&self) -> Self {
        self.inner.lower().into()
    }

    fn complement(&self) -> PyResult<Self> {
        self.inner.complement().into_pyresult().map(Self::from)
    }

    fn reverse_complement(&self) -> PyResult<Self> {
        self.inner.reverse_complement().into_pyresult().map(Self::from)
    }

    fn transcribe(&self) -> PyResult<Self> {
        self.inner.transcribe().into_pyresult().map(Self::from)
    }

    fn back_transcribe(&self) -> PyResult<Self> {
        self.inner.back_transcribe().into_pyresult().map(Self::from)
    }

    #[pyo3(signature = (table=None, stop_symbol="*", to_stop=false, cds=false, gap=None))]
    fn translate(
        &self,
        table: Option<&Bound<'_, PyAny>>,
        stop_symbol: &str,
        to_stop: bool,
        cds: bool,
        gap: Option<&str>,
    ) -> PyResult<Self> {
        let table = extract_table(table, &tables().ambiguous_dna)?;
        let mut opts = TranslateOptions::new()
            .table(table)
            .stop_symbol(utils::single_ascii(stop_symbol).into_pyresult()?)
            .to_stop(to_stop)
            .cds(cds);
        if let Some(gap) = gap {
            opts = opts.gap(utils::single_ascii(gap).into_pyresult()?);
        }
        self.inner.translate(&opts).into_pyresult().map(Self::from)
    }

    fn tomutable(&self) -> PyMutableSeq {
        PyMutableSeq {
            inner: self.inner.to_mutable(),
        }
    }
}

/// Sequence of known length whose residues are all one placeholder symbol.
#[pyfunction(name = "UnknownSeq")]
#[pyo3(signature = (length, alphabet=None, character=None))]
fn unknown_seq(
    length: usize,
    alphabet: Option<&Bound<'_, PyAny>>,
    character: Option<&Bound<'_, PyAny>>,
) -> PyResult<PySeq> {
    let alphabet = utils::extract_alphabet(alphabet)?;
    let inner = match character {
        Some(c) => Seq::unknown_with(length, alphabet, utils::extract_residue(c)?),
        None => Seq::unknown(length, alphabet),
    };
    Ok(PySeq { inner })
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySeq>()?;
    m.add_function(wrap_pyfunction!(unknown_seq, m)?)?;
    Ok(())
}
