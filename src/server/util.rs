//! Small helpers shared across layers.

pub mod name;
pub mod parse;
