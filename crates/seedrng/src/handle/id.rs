use core::fmt;

/// An opaque token identifying one generator in a [`crate::HandleTable`].
///
/// Handles are plain `u64`s on the wire. [`Handle::NULL`] (`0`) is never
/// issued, so foreign callers can use it as a "no generator" sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Handle(u64);

impl Handle {
    /// The handle value no table ever issues.
    pub const NULL: Self = Self(0);

    /// Wraps a raw value received from a foreign caller.
    #[inline(always)]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw value handed across the C ABI.
    #[inline(always)]
    pub const fn to_raw(self) -> u64 {
        self.0
    }

    /// Whether this is the [`Handle::NULL`] sentinel.
    #[inline(always)]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Handle {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.to_raw()
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
