//! Map `BioError` variants to Python exceptions.

use bioseq_core::{BioError, ErrorCategory};
use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyIndexError, PyKeyError, PyTypeError, PyValueError};
use pyo3::PyErr;

create_exception!(_native, TranslationError, PyException);

/// Extension trait for converting `Result<T, BioError>` into `PyResult<T>`.
pub trait IntoPyResult<T> {
    fn into_pyresult(self) -> pyo3::PyResult<T>;
}

impl<T> IntoPyResult<T> for Result<T, BioError> {
    fn into_pyresult(self) -> pyo3::PyResult<T> {
        self.map_err(to_pyerr)
    }
}

pub fn to_pyerr(e: BioError) -> PyErr {
    let msg = e.to_string();
    match e.category() {
        ErrorCategory::Type => PyTypeError::new_err(msg),
        ErrorCategory::Translation => TranslationError::new_err(msg),
        ErrorCategory::Lookup => PyKeyError::new_err(msg),
        ErrorCategory::Index => PyIndexError::new_err(msg),
        ErrorCategory::Value => PyValueError::new_err(msg),
    }
}
