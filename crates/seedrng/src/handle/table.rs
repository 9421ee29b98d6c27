use portable_atomic::{AtomicU64, Ordering};
use rand::{RngCore, SeedableRng};
use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Error, Handle, Mt19937, Result, SeedLog, SeedableGenerator, TimeSource,
    mutex::{Mutex, MutexGuard},
};

type Slots<R> = HashMap<Handle, SeedableGenerator<R>>;

/// A process-wide registry mapping opaque [`Handle`]s to owned generators.
///
/// This is the safe replacement for handing raw pointers across a foreign
/// boundary: callers only ever see integers, and a stale or forged handle is
/// reported as [`Error::UnknownHandle`] instead of dereferencing arbitrary
/// memory.
///
/// Handles are issued from a counter starting at `1` and are never recycled,
/// so a destroyed handle stays invalid for the lifetime of the table.
///
/// All operations take a single lock, so different handles may be used from
/// different threads. Each generator is still meant to have exactly one owner.
///
/// # Example
/// ```
/// use seedrng::{Error, HandleTable, NoopLog};
///
/// let table = HandleTable::new();
/// let handle = table.create("foo", 42, &NoopLog)?;
///
/// let first = table.next(handle)?;
/// table.destroy(handle)?;
///
/// assert_eq!(first, 4_035_590_050);
/// assert_eq!(table.next(handle), Err(Error::UnknownHandle(handle)));
/// # Ok::<(), Error>(())
/// ```
pub struct HandleTable<R = Mt19937> {
    slots: Mutex<Slots<R>>,
    next_handle: AtomicU64,
}

impl HandleTable<Mt19937> {
    /// Creates an empty table of [`Mt19937`]-backed generators.
    pub fn new() -> Self {
        Self::with_first_handle(1)
    }
}

impl Default for HandleTable<Mt19937> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> HandleTable<R>
where
    R: RngCore + SeedableRng<Seed = [u8; 4]>,
{
    pub(crate) fn with_first_handle(first: u64) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            next_handle: AtomicU64::new(first.max(1)),
        }
    }

    /// Registers `generator` and returns its freshly issued handle.
    ///
    /// # Errors
    /// - [`Error::HandlesExhausted`] if the handle counter would wrap
    /// - [`Error::LockPoisoned`] if another thread panicked holding the lock
    pub fn insert(&self, generator: SeedableGenerator<R>) -> Result<Handle> {
        let raw = self
            .next_handle
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map_err(|_| Error::HandlesExhausted)?;
        let handle = Handle::from_raw(raw);

        self.lock()?.insert(handle, generator);

        #[cfg(feature = "tracing")]
        tracing::debug!(%handle, "registered generator");
        Ok(handle)
    }

    /// Creates a generator for `name` with an explicit seed and registers it.
    ///
    /// See [`SeedableGenerator::create`].
    ///
    /// # Errors
    /// Same as [`Self::insert`].
    pub fn create(
        &self,
        name: impl AsRef<[u8]>,
        seed: u32,
        log: &impl SeedLog,
    ) -> Result<Handle> {
        self.insert(SeedableGenerator::create(name, seed, log))
    }

    /// Creates a generator for `name` seeded from `clock` and registers it.
    ///
    /// See [`SeedableGenerator::create_with_clock`].
    ///
    /// # Errors
    /// Same as [`Self::insert`].
    pub fn create_with_clock(
        &self,
        name: impl AsRef<[u8]>,
        clock: &impl TimeSource<u32>,
        log: &impl SeedLog,
    ) -> Result<Handle> {
        self.insert(SeedableGenerator::create_with_clock(name, clock, log))
    }

    /// Advances the generator behind `handle` and returns its next output.
    ///
    /// # Errors
    /// - [`Error::UnknownHandle`] if `handle` is not live
    /// - [`Error::LockPoisoned`] if another thread panicked holding the lock
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next(&self, handle: Handle) -> Result<u32> {
        self.lock()?
            .get_mut(&handle)
            .map(|generator| generator.next_u32())
            .ok_or(Error::UnknownHandle(handle))
    }

    /// Removes the generator behind `handle` and releases it.
    ///
    /// # Errors
    /// - [`Error::UnknownHandle`] if `handle` is not live, including a second
    ///   destroy of the same handle
    /// - [`Error::LockPoisoned`] if another thread panicked holding the lock
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn destroy(&self, handle: Handle) -> Result<()> {
        let removed = self.lock()?.remove(&handle);
        match removed {
            Some(generator) => {
                drop(generator);
                Ok(())
            }
            None => Err(Error::UnknownHandle(handle)),
        }
    }

    /// Returns `true` if `handle` refers to a live generator.
    ///
    /// # Errors
    /// - [`Error::LockPoisoned`] if another thread panicked holding the lock
    pub fn contains(&self, handle: Handle) -> Result<bool> {
        Ok(self.lock()?.contains_key(&handle))
    }

    /// Number of live generators.
    ///
    /// # Errors
    /// - [`Error::LockPoisoned`] if another thread panicked holding the lock
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Returns `true` if no generator is live.
    ///
    /// # Errors
    /// - [`Error::LockPoisoned`] if another thread panicked holding the lock
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Slots<R>>> {
        #[cfg(feature = "parking-lot")]
        let slots = self.slots.lock();
        #[cfg(not(feature = "parking-lot"))]
        let slots = self.slots.lock()?;
        Ok(slots)
    }
}
