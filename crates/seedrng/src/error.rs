use crate::Handle;

/// A result type defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `seedrng` can produce.
///
/// Creating a generator and stepping it are infallible. Errors only surface
/// at the [`crate::HandleTable`] boundary, where a caller may hand back a
/// handle that was never issued or has already been destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The handle does not refer to a live generator.
    ///
    /// Either it was never issued by this table, or it has already been
    /// destroyed.
    #[error("unknown generator handle: {0}")]
    UnknownHandle(Handle),

    /// The operation failed due to a poisoned lock.
    ///
    /// This can happen if another thread panicked while holding the table
    /// lock. Never produced with the `parking-lot` feature.
    #[error("generator table lock poisoned")]
    LockPoisoned,

    /// The table has issued every representable handle.
    #[error("generator handle space exhausted")]
    HandlesExhausted,
}

#[cfg(not(feature = "parking-lot"))]
use std::sync::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
// Convert all poisoned lock errors to a simplified `LockPoisoned`
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
