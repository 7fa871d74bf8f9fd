//! This module contains insertion heuristics which decide where a new point is spliced into
//! the tour and a builder which applies them on behalf of a caller.

mod builder;
pub use self::builder::*;

mod cheapest;
pub use self::cheapest::*;

mod insertions;
pub use self::insertions::*;

mod nearest;
pub use self::nearest::*;
