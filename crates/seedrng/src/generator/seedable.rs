use rand::{RngCore, SeedableRng};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Mt19937, SeedLog, TimeSource, effective_seed};

/// A deterministic generator seeded from a name and a numeric seed.
///
/// The engine seed is [`effective_seed`]`(name, seed)`: the name hash XOR the
/// numeric seed. Two generators built from the same `(name, seed)` pair
/// produce identical streams; changing either input changes the stream with
/// overwhelming probability.
///
/// The engine `R` defaults to [`Mt19937`]. Any `rand` engine with a 4-byte
/// seed can be substituted.
///
/// ## Features
/// - ✅ Deterministic per `(name, seed)`
/// - ✅ Plugs into `rand` via [`RngCore`]
/// - ❌ Not cryptographically secure
/// - ❌ Not synchronized; wrap it (or use [`crate::HandleTable`]) to share it
///
/// # Example
/// ```
/// use seedrng::{NoopLog, SeedableGenerator};
///
/// let mut a: SeedableGenerator = SeedableGenerator::create("foo", 42, &NoopLog);
/// let mut b: SeedableGenerator = SeedableGenerator::create("foo", 42, &NoopLog);
///
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Clone, Debug)]
pub struct SeedableGenerator<R = Mt19937> {
    rng: R,
    effective_seed: u32,
}

impl<R> SeedableGenerator<R>
where
    R: RngCore + SeedableRng<Seed = [u8; 4]>,
{
    /// Creates a generator for `name` with an explicit numeric seed.
    ///
    /// The seed notice is reported to `log` before the engine is built.
    ///
    /// # Parameters
    /// - `name`: An arbitrary label, hashed as raw bytes
    /// - `seed`: The numeric seed combined with the name hash
    /// - `log`: A [`SeedLog`] receiving the seed notice
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip(name, log),
            fields(effective = tracing::field::Empty)
        )
    )]
    pub fn create(name: impl AsRef<[u8]>, seed: u32, log: &impl SeedLog) -> Self {
        let name = name.as_ref();
        let effective = effective_seed(name, seed);

        #[cfg(feature = "tracing")]
        tracing::Span::current().record("effective", effective);

        log.seed_used(name, seed, effective);
        Self::from_effective_seed(effective)
    }

    /// Creates a generator for `name`, seeded from the clock.
    ///
    /// The numeric seed is the clock's current reading in seconds. Two
    /// generators with the same name created within the same second therefore
    /// produce identical streams.
    ///
    /// # Example
    /// ```
    /// use seedrng::{NoopLog, SeedableGenerator, TimeSource};
    ///
    /// struct FixedTime;
    /// impl TimeSource<u32> for FixedTime {
    ///     fn current_secs(&self) -> u32 {
    ///         42
    ///     }
    /// }
    ///
    /// let mut clocked: SeedableGenerator = SeedableGenerator::create_with_clock("foo", &FixedTime, &NoopLog);
    /// let mut explicit: SeedableGenerator = SeedableGenerator::create("foo", 42, &NoopLog);
    /// assert_eq!(clocked.next_u32(), explicit.next_u32());
    /// ```
    pub fn create_with_clock(
        name: impl AsRef<[u8]>,
        clock: &impl TimeSource<u32>,
        log: &impl SeedLog,
    ) -> Self {
        Self::create(name, clock.current_secs(), log)
    }

    /// Builds a generator directly from an already-derived engine seed.
    ///
    /// No seed notice is reported.
    pub fn from_effective_seed(effective_seed: u32) -> Self {
        Self {
            rng: R::from_seed(effective_seed.to_le_bytes()),
            effective_seed,
        }
    }

    /// Advances the engine one step and returns the 32-bit output.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// The seed the engine was constructed with.
    pub const fn effective_seed(&self) -> u32 {
        self.effective_seed
    }

    /// Returns the underlying engine.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R> RngCore for SeedableGenerator<R>
where
    R: RngCore + SeedableRng<Seed = [u8; 4]>,
{
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst);
    }
}

/// An endless stream of 32-bit outputs.
impl<R> Iterator for SeedableGenerator<R>
where
    R: RngCore + SeedableRng<Seed = [u8; 4]>,
{
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.rng.next_u32())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
