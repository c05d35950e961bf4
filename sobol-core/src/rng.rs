use std::num::Wrapping;

const PCG32_DEFAULT_STATE: Wrapping<u64> = Wrapping(0x853c_49e6_748f_ea9b);
const PCG32_DEFAULT_STREAM: Wrapping<u64> = Wrapping(0xda3e_39cb_94b9_5bdb);
const PCG32_MULT: Wrapping<u64> = Wrapping(0x5851_f42d_4c95_7f2d);

/// Largest `f64` below 1.
pub const ONE_MINUS_EPSILON: f64 = 1.0 - std::f64::EPSILON / 2.0;

/// PCG32 pseudo-random generator.
///
/// This is the uniform baseline Sobol points get compared against; it has nothing to do with the
/// Sobol construction itself.
#[derive(Debug, Copy, Clone)]
pub struct Rng {
    state: Wrapping<u64>,
    inc: Wrapping<u64>,
}

impl Rng {
    pub fn new() -> Rng {
        Rng {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }

    /// Generator on stream `seed`. Different streams give independent sequences.
    pub fn with_sequence(seed: u64) -> Rng {
        let mut rng = Rng::new();
        rng.set_sequence(seed);
        rng
    }

    pub fn set_sequence(&mut self, seed: u64) {
        self.state = Wrapping(0);
        self.inc = Wrapping((seed << 1) | 1);
        let _ = self.uniform_u32();
        self.state += PCG32_DEFAULT_STATE;
        let _ = self.uniform_u32();
    }

    pub fn uniform_u32(&mut self) -> u32 {
        let oldstate = self.state;
        self.state = oldstate * PCG32_MULT + self.inc;
        let xorshifted = (((oldstate >> 18) ^ oldstate) >> 27).0 as u32;
        let rot = (oldstate >> 59).0 as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform value in [0, 1) with 53 random bits.
    pub fn uniform_f64(&mut self) -> f64 {
        let hi = u64::from(self.uniform_u32()) << 21;
        let lo = u64::from(self.uniform_u32() >> 11);
        ((hi | lo) as f64 * (1.0 / (1u64 << 53) as f64)).min(ONE_MINUS_EPSILON)
    }
}
