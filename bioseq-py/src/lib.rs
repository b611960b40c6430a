use pyo3::prelude::*;

mod alphabet;
mod codon;
mod error;
mod mutable_seq;
mod seq;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    alphabet::register(m)?;
    codon::register(m)?;
    seq::register(m)?;
    mutable_seq::register(m)?;
    m.add(
        "TranslationError",
        m.py().get_type_bound::<error::TranslationError>(),
    )?;
    Ok(())
}
