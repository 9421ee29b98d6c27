mod id;
mod table;
#[cfg(test)]
mod tests;

pub use id::*;
pub use table::*;
