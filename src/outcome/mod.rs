//! Spin outcome generation.
//!
//! Draws the symbol each reel lands on. Wins are incidental (all reels equal)
//! except after a long losing streak, when the pity rule forces one.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
