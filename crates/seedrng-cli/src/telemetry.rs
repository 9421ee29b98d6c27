//! Console logging for the `seedrng` binary.
//!
//! Events go to stderr so that the sampled values on stdout stay
//! machine-readable. The filter defaults to `info` and can be overridden with
//! `RUST_LOG` (for example `RUST_LOG=seedrng=trace` to see every draw).

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_target(false)
                .with_file(true)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
