use crate::errors::{Result, SobolError};
use crate::matrix::GeneratorMatrix;
use crate::sampler::{gray_code, sample};
use crate::word::Word;

/// Incremental Sobol sequence over one generator matrix.
///
/// Samples come out in Gray code order: after `k` steps from `start`, the current sample is
/// `sample(matrix, gray_code(start + k))`. Consecutive Gray codes differ in a single bit, the
/// lowest set bit of the new index, so each step is one XOR.
///
/// The iterator yields `Err(IndexOutOfRange)` once the matrix runs out of columns, then stops.
#[derive(Debug, Clone)]
pub struct Generator<'a, W: Word = u32> {
    matrix: &'a GeneratorMatrix<W>,
    index: u64,
    current: W,
    exhausted: bool,
}

impl<'a, W: Word> Generator<'a, W> {
    pub fn new(matrix: &'a GeneratorMatrix<W>, start: u64) -> Result<Generator<'a, W>> {
        let current = sample(matrix, gray_code(start))?;
        trace!("Starting Sobol generator at index {}", start);
        Ok(Generator {
            matrix,
            index: start,
            current,
            exhausted: false,
        })
    }

    /// Linear index of the current sample.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Sample at `gray_code(index())`.
    pub fn current(&self) -> W {
        self.current
    }

    /// Step to the next index and return its sample.
    pub fn advance(&mut self) -> Result<W> {
        let out_of_range = SobolError::IndexOutOfRange {
            index: self.index.wrapping_add(1),
            columns: self.matrix.len(),
        };
        let next = self.index.checked_add(1).ok_or(out_of_range)?;
        let c = self
            .matrix
            .column(next.trailing_zeros())
            .ok_or_else(|| SobolError::IndexOutOfRange {
                index: next,
                columns: self.matrix.len(),
            })?;
        self.index = next;
        self.current = self.current ^ c;
        Ok(self.current)
    }
}

impl<'a, W: Word> Iterator for Generator<'a, W> {
    type Item = Result<W>;

    fn next(&mut self) -> Option<Result<W>> {
        if self.exhausted {
            return None;
        }
        let r = self.advance();
        if r.is_err() {
            self.exhausted = true;
        }
        Some(r)
    }
}
