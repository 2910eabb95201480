//! Core rules for "May I?". Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod decision;
pub mod deck;
pub mod events;
pub mod hand;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod state;

pub use cards::*;
pub use config::*;
pub use decision::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use round::*;
pub use rules::*;
pub use scoring::*;
pub use state::*;
