use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::errors::{Result, SobolError};

/// Largest degree accepted for a primitive polynomial. Direction numbers are kept in a `u64`, so
/// the recurrence's `m << s` term must stay below 64 bits.
pub const MAX_DEGREE: u32 = 63;

/// One row of a direction number table: a primitive polynomial over GF(2) and the seeds of its
/// direction numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitivePolynomial {
    /// Degree `s` of the polynomial.
    pub degree: u32,
    /// Bit `d` (1-indexed from the LSB) is the coefficient of `x^(s-d)`, for `d` in `1..s`.
    pub coefficients: u64,
    /// Initial direction numbers `m_1..m_s`.
    pub seeds: Vec<u64>,
}

impl PrimitivePolynomial {
    pub fn new(degree: u32, coefficients: u64, seeds: Vec<u64>) -> PrimitivePolynomial {
        PrimitivePolynomial {
            degree,
            coefficients,
            seeds,
        }
    }

    /// Coefficient `a_d`, with `d` counted from 1 at the least significant bit.
    #[inline]
    pub fn coefficient(&self, d: u32) -> u64 {
        (self.coefficients >> (d - 1)) & 1
    }
}

/// Per-dimension polynomials, in file order. Dimension `d >= 1` lives at position `d - 1`;
/// dimension 0 is implicit and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    entries: Vec<PrimitivePolynomial>,
}

impl Table {
    pub fn from_entries(entries: Vec<PrimitivePolynomial>) -> Table {
        Table { entries }
    }

    /// Load a table in the Joe-Kuo layout: one header line, then `d s a m_1 .. m_s` per row.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Table> {
        let path = path.as_ref();
        let file = fs::File::open(path)?;
        let table = Table::parse(BufReader::new(file))?;
        debug!(
            "Loaded {} dimensions from direction number table \"{}\"",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn parse<R: BufRead>(reader: R) -> Result<Table> {
        let mut entries = Vec::new();

        // The first line is a header; it isn't looked at.
        for (line_num, line) in reader.lines().enumerate().skip(1) {
            let line = match line {
                Ok(line) => line,
                Err(ref e) if e.kind() == ErrorKind::InvalidData => {
                    return Err(SobolError::format(line_num + 1, "row is not valid UTF-8"))
                }
                Err(e) => return Err(e.into()),
            };
            if line.trim().is_empty() {
                continue;
            }
            entries.push(parse_row(line_num + 1, &line)?);
        }

        Ok(Table { entries })
    }

    /// Number of dimensions (excluding the implicit dimension 0) in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Polynomial for `dimension`, which must be in `1..=len()`.
    pub fn entry(&self, dimension: usize) -> Result<&PrimitivePolynomial> {
        dimension
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or_else(|| SobolError::Dimension {
                dimension,
                available: self.entries.len(),
            })
    }

    pub fn entries(&self) -> &[PrimitivePolynomial] {
        &self.entries
    }
}

fn parse_row(line_num: usize, line: &str) -> Result<PrimitivePolynomial> {
    let mut fields = Vec::new();
    for token in line.split_whitespace() {
        match token.parse::<u64>() {
            Ok(v) => fields.push(v),
            Err(_) => {
                return Err(SobolError::format(
                    line_num,
                    format!("\"{}\" is not a non-negative integer", token),
                ))
            }
        }
    }

    if fields.len() < 3 {
        return Err(SobolError::format(
            line_num,
            format!("expected at least 3 fields, found {}", fields.len()),
        ));
    }
    // fields[0] is the dimension identifier. Rows are indexed by position, so it's ignored.
    let degree = fields[1];
    if degree == 0 || degree > u64::from(MAX_DEGREE) {
        return Err(SobolError::format(
            line_num,
            format!("degree must be in 1..={}, found {}", MAX_DEGREE, degree),
        ));
    }
    let degree = degree as u32;
    let coefficients = fields[2];
    let seeds = &fields[3..];
    if seeds.len() < degree as usize {
        return Err(SobolError::format(
            line_num,
            format!(
                "degree {} needs {} direction numbers, found {}",
                degree,
                degree,
                seeds.len()
            ),
        ));
    }

    Ok(PrimitivePolynomial::new(
        degree,
        coefficients,
        seeds[..degree as usize].to_vec(),
    ))
}
