use crate::SeedLog;
use std::io::Write;

/// Writes `Using seed N` to standard output for every created generator.
///
/// `N` is the caller's numeric seed (or the clock reading on the default-seed
/// path), not the effective seed. Write failures are ignored.
#[derive(Default, Clone, Copy, Debug)]
pub struct StdoutLog;

impl SeedLog for StdoutLog {
    fn seed_used(&self, _name: &[u8], seed: u32, _effective: u32) {
        let _ = writeln!(std::io::stdout().lock(), "Using seed {seed}");
    }
}

/// Discards the seed notice.
#[derive(Default, Clone, Copy, Debug)]
pub struct NoopLog;

impl SeedLog for NoopLog {
    fn seed_used(&self, _name: &[u8], _seed: u32, _effective: u32) {}
}
