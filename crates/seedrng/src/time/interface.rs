/// A trait for time sources that return a wall-clock timestamp in seconds.
///
/// The default-seed path of [`crate::SeedableGenerator::create_with_clock`]
/// reads the clock through this trait instead of calling the system clock
/// directly, so tests can plug in a fixed or stepped time source.
///
/// The timestamp type `T` is generic (typically `u32` or `u64`), and the unit
/// is **seconds** since the Unix epoch.
///
/// # Example
///
/// ```
/// use seedrng::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u32> for FixedTime {
///     fn current_secs(&self) -> u32 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_secs(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in seconds since the Unix epoch.
    fn current_secs(&self) -> T;
}

impl<T, S> TimeSource<T> for &S
where
    S: TimeSource<T> + ?Sized,
{
    fn current_secs(&self) -> T {
        (**self).current_secs()
    }
}
