//! C ABI over a process-wide [`HandleTable`].
//!
//! Generators are addressed by `uint64_t` handles. `0` is never a valid
//! handle and is returned by the creation functions on failure.
//!
//! ```c
//! uint64_t rng = random_init_seed("foo", 42);   // prints "Using seed 42"
//! uint32_t a = random_next(rng);
//! random_destroy(rng);
//! ```
//!
//! Every creation call writes `Using seed N` to standard output. Failures are
//! additionally reported as `tracing` events; install a subscriber in the host
//! process to see them.

use core::ffi::{CStr, c_char, c_int};
use seedrng::{Error, Handle, HandleTable, StdoutLog, SystemClock};
use std::sync::LazyLock;

/// The call succeeded.
pub const SEEDRNG_OK: c_int = 0;
/// The handle does not refer to a live generator.
pub const SEEDRNG_UNKNOWN_HANDLE: c_int = -1;
/// A required pointer argument was null.
pub const SEEDRNG_NULL_POINTER: c_int = -2;
/// The generator table is unusable (poisoned lock or exhausted handles).
pub const SEEDRNG_INTERNAL_ERROR: c_int = -3;

/// The generator table shared by every caller in the process.
static TABLE: LazyLock<HandleTable> = LazyLock::new(HandleTable::new);

fn status(err: &Error) -> c_int {
    match err {
        Error::UnknownHandle(_) => SEEDRNG_UNKNOWN_HANDLE,
        _ => SEEDRNG_INTERNAL_ERROR,
    }
}

/// Reads a generator name.
///
/// # Safety
/// `name` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
unsafe fn name_bytes<'a>(name: *const c_char) -> Option<&'a [u8]> {
    if name.is_null() {
        return None;
    }
    // SAFETY:
    // - `name` is non-null and, per the caller contract, NUL-terminated.
    // - The returned slice is only used before this call returns.
    Some(unsafe { CStr::from_ptr(name) }.to_bytes())
}

fn handle_or_null(created: Result<Handle, Error>) -> u64 {
    match created {
        Ok(handle) => handle.to_raw(),
        Err(err) => {
            tracing::error!(target: "seedrng", %err, "failed to register generator");
            Handle::NULL.to_raw()
        }
    }
}

/// Creates a generator from `name` and an explicit `seed`.
///
/// Returns the new handle, or `0` if `name` is null or the table cannot issue
/// another handle.
///
/// # Safety
/// `name` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn random_init_seed(name: *const c_char, seed: u32) -> u64 {
    // SAFETY: forwarded caller contract.
    let Some(name) = (unsafe { name_bytes(name) }) else {
        tracing::error!(target: "seedrng", "random_init_seed called with a null name");
        return Handle::NULL.to_raw();
    };
    handle_or_null(TABLE.create(name, seed, &StdoutLog))
}

/// Creates a generator from `name`, seeded with the current wall-clock time
/// in seconds.
///
/// Two calls with the same name within the same second produce identical
/// streams. Returns `0` under the same conditions as [`random_init_seed`].
///
/// # Safety
/// `name` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn random_init(name: *const c_char) -> u64 {
    // SAFETY: forwarded caller contract.
    let Some(name) = (unsafe { name_bytes(name) }) else {
        tracing::error!(target: "seedrng", "random_init called with a null name");
        return Handle::NULL.to_raw();
    };
    handle_or_null(TABLE.create_with_clock(name, &SystemClock, &StdoutLog))
}

/// Returns the next value from the generator behind `handle`.
///
/// Passing a handle that is not live is a caller bug: it is logged and the
/// process aborts. Use [`random_try_next`] to check a handle instead.
#[unsafe(no_mangle)]
pub extern "C" fn random_next(handle: u64) -> u32 {
    match TABLE.next(Handle::from_raw(handle)) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(target: "seedrng", %err, "random_next on an invalid handle");
            std::process::abort()
        }
    }
}

/// Destroys the generator behind `handle`.
///
/// Destroying a handle that is not live (including a second destroy) is
/// logged at `warn` and otherwise ignored.
#[unsafe(no_mangle)]
pub extern "C" fn random_destroy(handle: u64) {
    if let Err(err) = TABLE.destroy(Handle::from_raw(handle)) {
        tracing::warn!(target: "seedrng", %err, "random_destroy on an invalid handle");
    }
}

/// Writes the next value from the generator behind `handle` to `out`.
///
/// Returns [`SEEDRNG_OK`], [`SEEDRNG_UNKNOWN_HANDLE`],
/// [`SEEDRNG_NULL_POINTER`] (nothing is drawn), or
/// [`SEEDRNG_INTERNAL_ERROR`]. `out` is only written on success.
///
/// # Safety
/// `out` must be null or valid for a `uint32_t` write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn random_try_next(handle: u64, out: *mut u32) -> c_int {
    if out.is_null() {
        return SEEDRNG_NULL_POINTER;
    }
    match TABLE.next(Handle::from_raw(handle)) {
        Ok(value) => {
            // SAFETY: `out` is non-null and, per the caller contract, valid
            // for writes.
            unsafe { out.write(value) };
            SEEDRNG_OK
        }
        Err(err) => status(&err),
    }
}

/// Destroys the generator behind `handle`, reporting whether it was live.
///
/// Returns [`SEEDRNG_OK`], [`SEEDRNG_UNKNOWN_HANDLE`], or
/// [`SEEDRNG_INTERNAL_ERROR`].
#[unsafe(no_mangle)]
pub extern "C" fn random_try_destroy(handle: u64) -> c_int {
    match TABLE.destroy(Handle::from_raw(handle)) {
        Ok(()) => SEEDRNG_OK,
        Err(err) => status(&err),
    }
}
