use num::Zero;

use crate::errors::{Result, SobolError};
use crate::matrix::GeneratorMatrix;
use crate::word::Word;

/// Binary reflected Gray code of `n`.
#[inline]
pub fn gray_code(n: u64) -> u64 {
    n ^ (n >> 1)
}

/// Evaluate `matrix` at `index`: the XOR of every column whose index bit is set.
pub fn sample<W: Word>(matrix: &GeneratorMatrix<W>, index: u64) -> Result<W> {
    if !matrix.covers(index) {
        return Err(SobolError::IndexOutOfRange {
            index,
            columns: matrix.len(),
        });
    }

    let mut v = W::zero();
    let mut a = index;
    let mut k = 0;
    while a != 0 {
        if a & 1 != 0 {
            v = v ^ matrix.columns()[k];
        }
        a >>= 1;
        k += 1;
    }
    Ok(v)
}
