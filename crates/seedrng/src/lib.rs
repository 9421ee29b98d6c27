//! Named, seeded pseudo-random generators.
//!
//! A [`SeedableGenerator`] wraps an [`Mt19937`] engine whose seed is derived
//! from a name and a numeric salt: the name is hashed with SipHash-1-3 and the
//! result is XOR-combined with the salt (see [`effective_seed`]). The same
//! `(name, seed)` pair always produces the same stream.
//!
//! Generators can be used directly, or registered in a [`HandleTable`] which
//! hands out opaque integer [`Handle`]s. The table is what the C ABI crate
//! exposes to foreign callers.
//!
//! # Example
//! ```
//! use seedrng::{HandleTable, NoopLog};
//!
//! let table = HandleTable::new();
//! let handle = table.create("foo", 42, &NoopLog).unwrap();
//!
//! assert_eq!(table.next(handle).unwrap(), 4035590050);
//! table.destroy(handle).unwrap();
//! assert!(table.next(handle).is_err());
//! ```

mod engine;
mod error;
mod generator;
mod handle;
mod log;
mod mutex;
mod seed;
mod time;

pub use crate::engine::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::handle::*;
pub use crate::log::*;
pub use crate::seed::*;
pub use crate::time::*;
