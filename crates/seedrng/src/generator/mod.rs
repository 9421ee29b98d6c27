mod seedable;

pub use seedable::*;
