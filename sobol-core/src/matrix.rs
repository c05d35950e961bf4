use std::fmt;

use crate::directions::directions;
use crate::errors::{Result, SobolError};
use crate::table::Table;
use crate::word::{low_mask, Word};

/// Sample indices are `u64`, so a matrix never needs more columns than this.
pub const MAX_INDEX_BITS: u32 = 64;

/// Generator matrix of one Sobol dimension.
///
/// Column `k` (0-indexed) is XORed into a sample whenever bit `k` of the sample index is set. Each
/// column holds `precision` bits.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratorMatrix<W: Word = u32> {
    columns: Vec<W>,
    precision: u32,
    reversed: bool,
}

impl<W: Word> GeneratorMatrix<W> {
    /// Build the matrix for `dimension` covering indices `0..2^index_bits`.
    ///
    /// Direction number `m_k` is a `k`-bit number; its `precision` most significant bits become
    /// column `k`, padded with zeros on the right when `k < precision`. With `reverse`, each
    /// column is then bit-reversed so that bit 0 of a sample carries the weight `2^-1`.
    pub fn new(
        table: &Table,
        dimension: usize,
        index_bits: u32,
        precision: u32,
        reverse: bool,
    ) -> Result<GeneratorMatrix<W>> {
        if precision == 0 {
            return Err(SobolError::Parameter("precision must be at least 1 bit".to_owned()));
        }
        if precision > W::BITS {
            return Err(SobolError::Parameter(format!(
                "precision of {} bits doesn't fit in a {}-bit word",
                precision,
                W::BITS
            )));
        }
        if index_bits > MAX_INDEX_BITS {
            return Err(SobolError::Parameter(format!(
                "{} index bits requested, at most {} are supported",
                index_bits, MAX_INDEX_BITS
            )));
        }

        let m = directions(table, dimension, index_bits as usize)?;
        let mask = low_mask(precision);
        let columns = m
            .iter()
            .enumerate()
            .map(|(i, &m_k)| {
                let k = i as u32 + 1;
                let m_k = u128::from(m_k) & low_mask(k);
                let v = if k <= precision {
                    m_k << (precision - k)
                } else {
                    m_k >> (k - precision)
                } & mask;
                let v = if reverse {
                    v.reverse_bits() >> (128 - precision)
                } else {
                    v
                };
                // `v` is masked to `precision <= W::BITS` bits
                W::narrow(v).ok_or_else(|| {
                    SobolError::Parameter(format!("column {} overflows its word", k))
                })
            })
            .collect::<Result<Vec<W>>>()?;

        debug!(
            "Built {}x{} generator matrix for dimension {}{}",
            columns.len(),
            precision,
            dimension,
            if reverse { " (reversed)" } else { "" }
        );

        Ok(GeneratorMatrix {
            columns,
            precision,
            reversed: reverse,
        })
    }

    /// Matrix from explicit columns. Columns wider than `precision` bits are rejected.
    pub fn from_columns(columns: Vec<W>, precision: u32, reversed: bool) -> Result<GeneratorMatrix<W>> {
        if precision == 0 || precision > W::BITS {
            return Err(SobolError::Parameter(format!(
                "precision must be in 1..={}, found {}",
                W::BITS,
                precision
            )));
        }
        if columns.len() > MAX_INDEX_BITS as usize {
            return Err(SobolError::Parameter(format!(
                "{} columns given, at most {} are supported",
                columns.len(),
                MAX_INDEX_BITS
            )));
        }
        if let Some(k) = columns
            .iter()
            .position(|c| c.widen() & !low_mask(precision) != 0)
        {
            return Err(SobolError::Parameter(format!(
                "column {} doesn't fit in {} bits",
                k + 1,
                precision
            )));
        }
        Ok(GeneratorMatrix {
            columns,
            precision,
            reversed,
        })
    }

    pub fn columns(&self) -> &[W] {
        &self.columns
    }

    /// Column for index bit `bit` (0-indexed from the least significant bit).
    #[inline]
    pub fn column(&self, bit: u32) -> Option<W> {
        self.columns.get(bit as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Whether `index` can be expressed with this matrix's columns.
    #[inline]
    pub fn covers(&self, index: u64) -> bool {
        self.columns.len() >= 64 || index >> self.columns.len() == 0
    }

    /// Map a sample of this matrix to [0, 1).
    ///
    /// Forward columns already hold a binary fraction with the most significant bit weighted
    /// `2^-1`, so the sample is divided by `2^precision`. Reversed columns put that weight on bit 0,
    /// so their samples are bit-reversed back first. Dividing a reversed sample directly by
    /// `2^precision` (as a plain `value / 2^o` consumer would) gives the radical inverse of the
    /// Sobol point instead of the point itself.
    pub fn unit_interval(&self, sample: W) -> f64 {
        let v = sample.widen();
        let v = if self.reversed {
            v.reverse_bits() >> (128 - self.precision)
        } else {
            v
        };
        v as f64 / 2f64.powi(self.precision as i32)
    }
}

impl<W: Word> fmt::Debug for GeneratorMatrix<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "GeneratorMatrix {{ precision: {}, reversed: {} }}",
            self.precision, self.reversed
        )?;
        for c in &self.columns {
            writeln!(f, "  {:0width$b}", c, width = self.precision as usize)?;
        }
        Ok(())
    }
}
