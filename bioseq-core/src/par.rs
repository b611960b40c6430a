//! Batch mapping over sequences, on the rayon pool when the `parallel`
//! feature is enabled and on the current thread otherwise.

/// Map `$f` over `$seqs` and collect into whatever the call site expects.
macro_rules! par_map {
    ($seqs:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
            $seqs.par_iter().map($f).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $seqs.iter().map($f).collect()
        }
    }};
}

/// Fallible map collecting into `BioResult<Vec<_>>`; stops at the first error.
macro_rules! par_try_map {
    ($seqs:expr, $f:expr) => {{
        let out: $crate::error::BioResult<Vec<_>> = par_map!($seqs, $f);
        out
    }};
}
