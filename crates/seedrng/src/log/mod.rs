mod interface;
mod stdout;
#[cfg(feature = "tracing")]
mod tracing_log;

pub use interface::*;
pub use stdout::*;
#[cfg(feature = "tracing")]
pub use tracing_log::*;
