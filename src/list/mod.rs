//! Arena-backed positional list under every vertex and edge list.

pub mod positional;

pub use positional::{Concat, Iter, Position, PositionalList, Positions};
