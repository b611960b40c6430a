//! Python-style index and slice arithmetic shared by every sequence type.

use crate::error::{BioError, BioResult};

/// Turn a possibly negative index into a position, counting from the end
/// for negative values.
pub fn resolve_index(index: isize, len: usize) -> BioResult<usize> {
    let n = len as isize;
    let i = if index < 0 { index + n } else { index };
    if i < 0 || i >= n {
        return Err(BioError::IndexOutOfRange { index, len });
    }
    Ok(i as usize)
}

/// Clamp an optional `[start, end)` window the way `str.find` does.
pub fn normalize_range(len: usize, start: Option<isize>, end: Option<isize>) -> (usize, usize) {
    let n = len as isize;

    let mut s = start.unwrap_or(0);
    let mut e = end.unwrap_or(n);

    if s < 0 {
        s += n;
    }
    if e < 0 {
        e += n;
    }

    s = s.clamp(0, n);
    e = e.clamp(0, n);

    (s as usize, e as usize)
}

/// A resolved `start:stop:step` slice over a sequence of known length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceIndices {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
    pub len: usize,
}

impl SliceIndices {
    pub fn resolve(
        len: usize,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> BioResult<Self> {
        // Clamped so that `-step` cannot overflow.
        let step = step.unwrap_or(1).max(-isize::MAX);
        if step == 0 {
            return Err(BioError::ZeroSliceStep);
        }
        let n = len as isize;
        let (lower, upper) = if step < 0 { (-1, n - 1) } else { (0, n) };

        let adjust = |value: Option<isize>, default: isize| -> isize {
            match value {
                None => default,
                Some(v) if v < 0 => (v + n).max(lower),
                Some(v) => v.min(upper),
            }
        };

        let start = adjust(start, if step < 0 { upper } else { lower });
        let stop = adjust(stop, if step < 0 { lower } else { upper });

        let count = if step < 0 {
            if stop < start {
                (start - stop - 1) / (-step) + 1
            } else {
                0
            }
        } else if start < stop {
            (stop - start - 1) / step + 1
        } else {
            0
        };

        Ok(SliceIndices {
            start,
            stop,
            step,
            len: count as usize,
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> {
        let SliceIndices {
            start, step, len, ..
        } = *self;
        (0..len).map(move |i| (start + i as isize * step) as usize)
    }

    pub fn is_contiguous(&self) -> bool {
        self.step == 1
    }

    pub fn gather(&self, bytes: &[u8]) -> Vec<u8> {
        if self.is_contiguous() {
            let start = self.start as usize;
            return bytes[start..start + self.len].to_vec();
        }
        self.positions().map(|i| bytes[i]).collect()
    }
}
