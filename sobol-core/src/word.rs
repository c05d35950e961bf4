use std::fmt;

use num::PrimInt;

/// Unsigned integer type a generator matrix stores its columns (and hence its samples) in.
///
/// The precision of a matrix can never exceed `Word::BITS`; asking for more is an error rather
/// than a silent truncation.
pub trait Word: PrimInt + fmt::Debug + fmt::Binary + Send + Sync + 'static {
    const BITS: u32;

    /// Narrow a column computed in `u128`. `None` if `v` doesn't fit.
    fn narrow(v: u128) -> Option<Self>;

    fn widen(self) -> u128;
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::max_value().count_ones();

                #[inline]
                fn narrow(v: u128) -> Option<$t> {
                    if v >> (Self::BITS - 1) >> 1 == 0 {
                        Some(v as $t)
                    } else {
                        None
                    }
                }

                #[inline]
                fn widen(self) -> u128 {
                    u128::from(self)
                }
            }
        )*
    }
}

impl_word!(u8, u16, u32, u64, u128);

/// Mask selecting the low `bits` bits of a `u128`.
#[inline]
pub(crate) fn low_mask(bits: u32) -> u128 {
    if bits >= 128 {
        !0
    } else {
        (1u128 << bits) - 1
    }
}
