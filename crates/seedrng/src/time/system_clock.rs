use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// A [`TimeSource`] backed by the system wall clock.
///
/// Reads `SystemTime::now()` on every call. A clock set before the Unix epoch
/// reports `0`. The `u32` reading truncates the seconds count, the same way a
/// `time_t` narrows when passed as a 32-bit seed.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<u64> for SystemClock {
    fn current_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}

impl TimeSource<u32> for SystemClock {
    fn current_secs(&self) -> u32 {
        TimeSource::<u64>::current_secs(self) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_reading_truncates_wide_reading() {
        let clock = SystemClock;
        let wide: u64 = clock.current_secs();
        let narrow: u32 = clock.current_secs();
        // Both readings may straddle a second boundary.
        assert!(narrow.wrapping_sub(wide as u32) <= 1);
    }

    #[test]
    fn reading_is_after_2020() {
        let secs: u64 = SystemClock.current_secs();
        assert!(secs > 1_577_836_800);
    }
}
