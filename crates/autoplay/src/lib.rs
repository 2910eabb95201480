//! Computer opponents for "May I?" and whole-round simulation.

mod config;
mod error;
mod robot;
mod simulator;
mod trace;

pub use config::*;
pub use error::*;
pub use robot::*;
pub use simulator::*;
pub use trace::*;
