//! Sobol low-discrepancy sequences.
//!
//! Direction numbers for each dimension come from a table of primitive polynomials over GF(2)
//! (Joe & Kuo's `new-joe-kuo-6.21201` layout). A dimension's direction numbers become a
//! generator matrix, which can then be evaluated at arbitrary indices with [`sample`] or walked
//! in Gray code order with [`generate`], one XOR per sample.
//!
//! ```no_run
//! # fn main() -> sobol_core::Result<()> {
//! let table = sobol_core::load("data/new-joe-kuo-6.21201")?;
//! let m = sobol_core::matrix::<u32>(&table, 1, 32, 32, false)?;
//! for x in sobol_core::generate(&m, 0)?.take(16) {
//!     println!("{}", m.unit_interval(x?));
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate num;

pub mod directions;
pub mod errors;
pub mod matrix;
pub mod rng;
pub mod sampler;
pub mod sequence;
pub mod table;
pub mod word;

use std::path::Path;

pub use crate::directions::directions;
pub use crate::errors::{Result, SobolError};
pub use crate::matrix::GeneratorMatrix;
pub use crate::sampler::{gray_code, sample};
pub use crate::sequence::Generator;
pub use crate::table::{PrimitivePolynomial, Table};
pub use crate::word::Word;

/// Load a direction number table from `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
    Table::load(path)
}

/// Generator matrix of `dimension` for indices below `2^index_bits`, with `precision`-bit columns.
pub fn matrix<W: Word>(
    table: &Table,
    dimension: usize,
    index_bits: u32,
    precision: u32,
    reverse: bool,
) -> Result<GeneratorMatrix<W>> {
    GeneratorMatrix::new(table, dimension, index_bits, precision, reverse)
}

/// Gray code ordered stream of samples starting after `start`.
pub fn generate<W: Word>(matrix: &GeneratorMatrix<W>, start: u64) -> Result<Generator<W>> {
    Generator::new(matrix, start)
}
