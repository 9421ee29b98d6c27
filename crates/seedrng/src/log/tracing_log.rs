use crate::SeedLog;

/// Reports the seed notice as an `info` event on the `seedrng` target.
///
/// The name is rendered lossily, since generator names are raw bytes.
#[derive(Default, Clone, Copy, Debug)]
pub struct TracingLog;

impl SeedLog for TracingLog {
    fn seed_used(&self, name: &[u8], seed: u32, effective: u32) {
        tracing::info!(
            target: "seedrng",
            name = %String::from_utf8_lossy(name),
            seed,
            effective,
            "Using seed {seed}"
        );
    }
}
