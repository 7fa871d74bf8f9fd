//! A collection of models to represent points and a cyclic tour over them.

mod point;
pub use self::point::*;

mod tour;
pub use self::tour::*;
