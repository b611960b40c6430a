use std::collections::HashMap;

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyModule, PyString};

use crate::error::IntoPyResult;
use bioseq_core::codon::{tables, CodonTable, TableRegistry};

#[pyclass(frozen, name = "CodonTable")]
pub struct PyCodonTable {
    pub(crate) inner: &'static CodonTable,
}

#[pymethods]
impl PyCodonTable {
    #[getter]
    fn id(&self) -> u8 {
        self.inner.id()
    }

    #[getter]
    fn names(&self) -> Vec<&'static str> {
        self.inner.names().to_vec()
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    #[getter]
    fn start_codons(&self) -> Vec<String> {
        self.inner.start_codons()
    }

    #[getter]
    fn stop_codons(&self) -> Vec<String> {
        self.inner.stop_codons()
    }

    #[getter]
    fn forward_table(&self) -> HashMap<String, char> {
        self.inner.forward_table().into_iter().collect()
    }

    fn forward(&self, codon: &str) -> PyResult<char> {
        self.inner.forward(codon).into_pyresult()
    }

    fn is_start(&self, codon: &str) -> bool {
        self.inner.is_start(codon.as_bytes())
    }

    fn is_stop(&self, codon: &str) -> bool {
        self.inner.is_stop(codon.as_bytes())
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("CodonTable(id={}, name={:?})", self.inner.id(), self.inner.name())
    }
}

fn registry(kind: &str) -> PyResult<&'static TableRegistry> {
    let t = tables();
    match kind.to_ascii_lowercase().as_str() {
        "unambiguous_dna" => Ok(&t.unambiguous_dna),
        "unambiguous_rna" => Ok(&t.unambiguous_rna),
        "ambiguous_dna" => Ok(&t.ambiguous_dna),
        "ambiguous_rna" => Ok(&t.ambiguous_rna),
        _ => Err(PyValueError::new_err(
            "kind must be one of unambiguous_dna, unambiguous_rna, ambiguous_dna, ambiguous_rna",
        )),
    }
}

/// Resolve a table given as a `CodonTable`, an NCBI id or a name.
pub fn extract_table(
    obj: Option<&Bound<'_, PyAny>>,
    registry: &'static TableRegistry,
) -> PyResult<&'static CodonTable> {
    let Some(obj) = obj else {
        return registry.by_id(1).into_pyresult();
    };

    if let Ok(table) = obj.downcast::<PyCodonTable>() {
        return Ok(table.get().inner);
    }

    if let Ok(s) = obj.downcast::<PyString>() {
        return registry.by_name(s.to_str()?).into_pyresult();
    }

    if let Ok(id) = obj.extract::<u8>() {
        return registry.by_id(id).into_pyresult();
    }

    Err(PyTypeError::new_err(
        "table must be a CodonTable, an int id, or a name",
    ))
}

#[pyfunction]
#[pyo3(signature = (table=None, kind="ambiguous_dna"))]
fn codon_table(table: Option<&Bound<'_, PyAny>>, kind: &str) -> PyResult<PyCodonTable> {
    let inner = extract_table(table, registry(kind)?)?;
    Ok(PyCodonTable { inner })
}

#[pyfunction]
fn codon_table_ids() -> Vec<u8> {
    tables().unambiguous_dna.ids().collect()
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCodonTable>()?;
    m.add_function(wrap_pyfunction!(codon_table, m)?)?;
    m.add_function(wrap_pyfunction!(codon_table_ids, m)?)?;
    Ok(())
}
