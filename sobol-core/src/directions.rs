use crate::errors::{Result, SobolError};
use crate::table::Table;

/// Direction numbers are `u64`; `m_k` needs `k` bits, so at most 64 of them can be represented.
pub const MAX_DIRECTIONS: usize = 64;

/// First `n` direction numbers `m_1..m_n` of `dimension`.
///
/// Dimension 0 is the van der Corput dimension: every direction number is 1 and the table isn't
/// consulted. Other dimensions start from the table's seeds and continue with the Bratley-Fox
/// recurrence
///
/// ```text
/// m_i = 2 a_1 m_(i-1) ^ 4 a_2 m_(i-2) ^ ... ^ 2^(s-1) a_(s-1) m_(i-s+1) ^ 2^s m_(i-s) ^ m_(i-s)
/// ```
///
/// Asking for more than [`MAX_DIRECTIONS`] numbers, or a recurrence term that would shift bits out
/// of a `u64` (seeds wider than their index), is a `Parameter` error.
pub fn directions(table: &Table, dimension: usize, n: usize) -> Result<Vec<u64>> {
    if n > MAX_DIRECTIONS {
        return Err(SobolError::Parameter(format!(
            "{} direction numbers requested, at most {} fit in 64 bits",
            n, MAX_DIRECTIONS
        )));
    }
    if dimension == 0 {
        return Ok(vec![1; n]);
    }

    let poly = table.entry(dimension)?;
    let s = poly.degree as usize;
    let mut m = poly.seeds.clone();

    while m.len() < n {
        let len = m.len();
        let mut m_i = 0;
        for d in (1..s).filter(|&d| poly.coefficient(d as u32) == 1) {
            m_i ^= shl_exact(m[len - d], d, len + 1)?;
        }
        m_i ^= shl_exact(m[len - s], s, len + 1)?;
        m_i ^= m[len - s];
        m.push(m_i);
    }
    // Callers asking for fewer numbers than the degree only get the prefix.
    m.truncate(n);

    Ok(m)
}

/// `v << shift`, or an error naming direction number `i` if any set bit would be shifted out.
fn shl_exact(v: u64, shift: usize, i: usize) -> Result<u64> {
    if v == 0 || (shift < 64 && v.leading_zeros() as usize >= shift) {
        Ok(v << shift)
    } else {
        Err(SobolError::Parameter(format!(
            "direction number m_{} doesn't fit in 64 bits",
            i
        )))
    }
}
