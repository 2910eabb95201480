//! Config loading and validation for the game.

pub mod load;

pub use load::*;
