mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, SampleConfig};
use seedrng::{NoopLog, SeedLog, SeedableGenerator, SystemClock, TimeSource, TracingLog};
use std::io::{BufWriter, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = SampleConfig::try_from(args)?;

    init_telemetry()?;
    tracing::debug!("Sampling with config: {config:#?}");

    let log: &dyn SeedLog = if config.quiet { &NoopLog } else { &TracingLog };
    let generator = build_generator(&config, &SystemClock, &log);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for value in generator.take(config.count) {
        writeln!(out, "{value}")?;
    }
    out.flush()?;

    Ok(())
}

/// Builds the generator described by `config`, falling back to `clock` when
/// no explicit seed was given.
fn build_generator(
    config: &SampleConfig,
    clock: &impl TimeSource<u32>,
    log: &impl SeedLog,
) -> SeedableGenerator {
    match config.seed {
        Some(seed) => SeedableGenerator::create(&config.name, seed, log),
        None => SeedableGenerator::create_with_clock(&config.name, clock, log),
    }
}
