/// A sink for the seed notice emitted whenever a generator is created.
///
/// Creation reports the caller's numeric seed and the derived effective seed
/// through this trait rather than writing to standard output directly, so the
/// notice can be redirected, recorded in tests, or suppressed.
///
/// # Example
/// ```
/// use core::cell::Cell;
/// use seedrng::{SeedLog, SeedableGenerator};
///
/// #[derive(Default)]
/// struct LastSeed(Cell<Option<u32>>);
/// impl SeedLog for LastSeed {
///     fn seed_used(&self, _name: &[u8], seed: u32, _effective: u32) {
///         self.0.set(Some(seed));
///     }
/// }
///
/// let log = LastSeed::default();
/// let _generator: SeedableGenerator = SeedableGenerator::create("foo", 42, &log);
/// assert_eq!(log.0.get(), Some(42));
/// ```
pub trait SeedLog {
    /// Called once per created generator.
    fn seed_used(&self, name: &[u8], seed: u32, effective: u32);
}

impl<L> SeedLog for &L
where
    L: SeedLog + ?Sized,
{
    fn seed_used(&self, name: &[u8], seed: u32, effective: u32) {
        (**self).seed_used(name, seed, effective);
    }
}
