use core::fmt;
use rand::{RngCore, SeedableRng, rand_core::impls};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Seed used by [`Mt19937::default`], matching the reference generator.
pub const MT19937_DEFAULT_SEED: u32 = 5489;

/// The 32-bit Mersenne Twister (MT19937).
///
/// A long-period (2^19937 - 1) generator with 624 words of state. Seeding
/// follows the reference `init_genrand` routine, so a given 32-bit seed
/// produces the same stream as any other conforming MT19937 implementation.
///
/// Not suitable for cryptographic use: the full state can be recovered from
/// 624 consecutive outputs.
///
/// # Example
/// ```
/// use seedrng::Mt19937;
///
/// let mut mt = Mt19937::new(5489);
/// assert_eq!(mt.next_u32(), 3_499_211_612);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    state: Box<[u32; N]>,
    index: usize,
}

impl Mt19937 {
    /// Creates an engine seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut state = Box::new([0u32; N]);
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    /// Advances the engine one step and returns the tempered output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// Advances the engine by `n` steps, discarding the outputs.
    ///
    /// Equivalent to calling [`Self::next_u32`] `n` times, without paying for
    /// tempering.
    pub fn discard(&mut self, n: u64) {
        let mut remaining = n;
        while remaining > 0 {
            if self.index >= N {
                self.twist();
            }
            let step = ((N - self.index) as u64).min(remaining);
            self.index += step as usize;
            remaining -= step;
        }
    }

    fn twist(&mut self) {
        for k in 0..N {
            let y = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % N] & LOWER_MASK);
            let mut next = self.state[(k + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[k] = next;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    /// Constructs an engine seeded with [`MT19937_DEFAULT_SEED`].
    fn default() -> Self {
        Self::new(MT19937_DEFAULT_SEED)
    }
}

impl fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        Mt19937::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

impl SeedableRng for Mt19937 {
    /// A little-endian encoded `u32` seed.
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
