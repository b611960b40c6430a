use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::error::IntoPyResult;
use crate::utils;
use bioseq_core::alphabets::{self, Alphabet};

#[pyclass(frozen, eq, hash, name = "Alphabet")]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PyAlphabet {
    pub(crate) inner: Alphabet,
}

#[pymethods]
impl PyAlphabet {
    #[new]
    #[pyo3(signature = (name="generic"))]
    fn new(name: &str) -> PyResult<Self> {
        let inner = name.parse::<Alphabet>().into_pyresult()?;
        Ok(Self { inner })
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.without_stop().to_string()
    }

    #[getter]
    fn stop_symbol(&self) -> Option<char> {
        self.inner.stop_symbol().map(char::from)
    }

    #[getter]
    fn placeholder(&self) -> char {
        self.inner.placeholder() as char
    }

    #[getter]
    fn letters(&self) -> Option<String> {
        self.inner
            .letters()
            .map(|set| set.symbols.iter().map(|b| b as u8 as char).collect())
    }

    fn parent(&self) -> Option<Self> {
        self.inner.parent().map(|inner| Self { inner })
    }

    fn with_stop(&self, symbol: &str) -> PyResult<Self> {
        let symbol = utils::single_ascii(symbol).into_pyresult()?;
        Ok(Self {
            inner: self.inner.with_stop(symbol),
        })
    }

    fn is_nucleotide(&self) -> bool {
        self.inner.is_nucleotide()
    }

    fn is_dna(&self) -> bool {
        self.inner.is_dna()
    }

    fn is_rna(&self) -> bool {
        self.inner.is_rna()
    }

    fn is_protein(&self) -> bool {
        self.inner.is_protein()
    }

    fn refines(&self, other: &Self) -> bool {
        self.inner.refines(other.inner)
    }

    fn compatible(&self, other: &Self) -> bool {
        self.inner.compatible(other.inner)
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Alphabet({:?})", self.inner.to_string())
    }
}

#[pyfunction]
fn is_nucleotide(alphabet: &PyAlphabet) -> bool {
    alphabets::is_nucleotide(alphabet.inner)
}

#[pyfunction]
fn is_protein(alphabet: &PyAlphabet) -> bool {
    alphabets::is_protein(alphabet.inner)
}

#[pyfunction]
fn compatible(a: &PyAlphabet, b: &PyAlphabet) -> bool {
    alphabets::compatible(a.inner, b.inner)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAlphabet>()?;
    m.add_function(wrap_pyfunction!(is_nucleotide, m)?)?;
    m.add_function(wrap_pyfunction!(is_protein, m)?)?;
    m.add_function(wrap_pyfunction!(compatible, m)?)?;
    Ok(())
}
