use anyhow::bail;
use clap::Parser;

/// Upper bound on the number of values a single invocation may print.
pub const MAX_COUNT: usize = 100_000_000;

/// Command-line arguments for the `seedrng` binary.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "seedrng",
    version,
    about = "Print a named, seeded pseudo-random stream"
)]
pub struct CliArgs {
    /// Generator name. Hashed and combined with the seed.
    ///
    /// Environment variable: `SEEDRNG_NAME`
    #[arg(long, env = "SEEDRNG_NAME", default_value_t = String::from("seedrng"))]
    pub name: String,

    /// Numeric seed. When omitted, the current time in seconds is used, so two
    /// runs within the same second print the same stream.
    ///
    /// Environment variable: `SEEDRNG_SEED`
    #[arg(long, env = "SEEDRNG_SEED")]
    pub seed: Option<u32>,

    /// Number of values to print, one per line.
    ///
    /// Environment variable: `SEEDRNG_COUNT`
    #[arg(short = 'n', long, env = "SEEDRNG_COUNT", default_value_t = 5)]
    pub count: usize,

    /// Suppress the seed notice.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    pub name: String,
    pub seed: Option<u32>,
    pub count: usize,
    pub quiet: bool,
}

impl TryFrom<CliArgs> for SampleConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("SEEDRNG_COUNT must be greater than 0");
        }

        if args.count > MAX_COUNT {
            bail!(
                "SEEDRNG_COUNT ({}) exceeds the maximum of {}",
                args.count,
                MAX_COUNT
            );
        }

        Ok(Self {
            name: args.name,
            seed: args.seed,
            count: args.count,
            quiet: args.quiet,
        })
    }
}
