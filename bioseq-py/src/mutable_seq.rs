use pyo3::basic::CompareOp;
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyModule, PyString};

use crate::alphabet::PyAlphabet;
use crate::error::IntoPyResult;
use crate::seq::PySeq;
use crate::utils::{self, SeqIndex};
use bioseq_core::{MutableSeq, SeqRead};

#[pyclass(name = "MutableSeq")]
pub struct PyMutableSeq {
    pub(crate) inner: MutableSeq,
}

#[pymethods]
impl PyMutableSeq {
    #[classattr]
    const __hash__: Option<Py<PyAny>> = None;

    #[new]
    #[pyo3(signature = (data, alphabet=None))]
    fn new(data: &Bound<'_, PyAny>, alphabet: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let alphabet = utils::extract_alphabet(alphabet)?;
        let bytes = utils::extract_bytes(data)?;
        Ok(Self {
            inner: MutableSeq::new(bytes, alphabet),
        })
    }

    #[getter]
    fn alphabet(&self) -> PyAlphabet {
        PyAlphabet {
            inner: self.inner.alphabet(),
        }
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __str__(&self) -> PyResult<String> {
        utils::seq_str(self.inner.as_bytes())
    }

    fn __repr__(&self) -> PyResult<String> {
        let text = utils::seq_str(self.inner.as_bytes())?;
        Ok(format!(
            "MutableSeq({}, {})",
            utils::seq_repr(&text),
            self.inner.alphabet()
        ))
    }

    fn __richcmp__(&self, py: Python<'_>, other: &Bound<'_, PyAny>, op: CompareOp) -> PyObject {
        let Ok(other) = utils::extract_bytes(other) else {
            return py.NotImplemented();
        };
        op.matches(self.inner.as_bytes().cmp(other.as_slice())).into_py(py)
    }

    fn __getitem__(&self, py: Python<'_>, index: &Bound<'_, PyAny>) -> PyResult<PyObject> {
        match utils::extract_index(index)? {
            SeqIndex::Int(i) => {
                let b = self.inner.get(i).into_pyresult()?;
                Ok((b as char).to_string().into_py(py))
            }
            SeqIndex::Slice { start, stop, step } => {
                let slice = self.inner.slice(start, stop, step).into_pyresult()?;
                let inner = slice.to_mutable();
                Ok(Py::new(py, PyMutableSeq { inner })?.into_py(py))
            }
        }
    }

    fn __setitem__(&mut self, index: &Bound<'_, PyAny>, value: &Bound<'_, PyAny>) -> PyResult<()> {
        match utils::extract_index(index)? {
            SeqIndex::Int(i) => {
                let b = utils::extract_residue(value)?;
                self.inner.set(i, b).into_pyresult()
            }
            SeqIndex::Slice { start, stop, step } => {
                let values = utils::extract_bytes(value)?;
                self.inner
                    .set_slice(start, stop, step, &values)
                    .into_pyresult()
            }
        }
    }

    fn __delitem__(&mut self, index: &Bound<'_, PyAny>) -> PyResult<()> {
        match utils::extract_index(index)? {
            SeqIndex::Int(i) => self.inner.delete(i).into_pyresult(),
            SeqIndex::Slice { start, stop, step } => {
                self.inner.delete_slice(start, stop, step).into_pyresult()
            }
        }
    }

    fn __add__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        let mut inner = self.inner.clone();
        if let Ok(seq) = other.downcast::<PySeq>() {
            inner.extend_from(&seq.get().inner).into_pyresult()?;
        } else if let Ok(seq) = other.extract::<PyRef<'_, PyMutableSeq>>() {
            inner.extend_from(&seq.inner).into_pyresult()?;
        } else if let Ok(s) = other.downcast::<PyString>() {
            inner.extend_from_slice(s.to_str()?.as_bytes());
        } else {
            return Err(PyTypeError::new_err(
                "can only add Seq, MutableSeq, or str to MutableSeq",
            ));
        }
        Ok(Self { inner })
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

    fn index(&self, value: &Bound<'_, PyAny>) -> PyResult<usize> {
        let b = utils::extract_residue(value)?;
        self.inner.index_of(b).into_pyresult()
    }

    fn startswith(&self, prefix: &Bound<'_, PyAny>) -> PyResult<bool> {
        let needle = utils::extract_needle(prefix)?;
        self.inner.starts_with(needle.as_needle()).into_pyresult()
    }

    fn endswith(&self, suffix: &Bound<'_, PyAny>) -> PyResult<bool> {
        let needle = utils::extract_needle(suffix)?;
        self.inner.ends_with(needle.as_needle()).into_pyresult()
    }

    fn append(&mut self, c: &Bound<'_, PyAny>) -> PyResult<()> {
        self.inner.push(utils::extract_residue(c)?);
        Ok(())
    }

    fn insert(&mut self, i: isize, c: &Bound<'_, PyAny>) -> PyResult<()> {
        self.inner.insert(i, utils::extract_residue(c)?);
        Ok(())
    }

    #[pyo3(signature = (i=-1))]
    fn pop(&mut self, i: isize) -> PyResult<String> {
        let b = self.inner.pop(Some(i)).into_pyresult()?;
        Ok((b as char).to_string())
    }

    fn remove(&mut self, item: &Bound<'_, PyAny>) -> PyResult<()> {
        let b = utils::extract_residue(item)?;
        self.inner.remove(b).into_pyresult()
    }

    fn extend(&mut self, other: &Bound<'_, PyAny>) -> PyResult<()> {
        if let Ok(seq) = other.downcast::<PySeq>() {
            return self.inner.extend_from(&seq.get().inner).into_pyresult();
        }
        let bytes = utils::extract_bytes(other)?;
        self.inner.extend_from_slice(&bytes);
        Ok(())
    }

    fn reverse(&mut self) {
        self.inner.reverse();
    }

    fn complement(&mut self) -> PyResult<()> {
        self.inner.complement().into_pyresult()
    }

    fn reverse_complement(&mut self) -> PyResult<()> {
        self.inner.reverse_complement().into_pyresult()
    }

    fn toseq(&self) -> PySeq {
        PySeq {
            inner: self.inner.to_seq(),
        }
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMutableSeq>()?;
    Ok(())
}
