//! Reel animation engine.
//!
//! Drives each reel strip from where it currently rests to the symbol the
//! outcome picked, in two phases: a blur of fast loops that commits to
//! nothing, then a staggered settle that lands reel 0 first and the
//! rightmost reel last. Everything is advanced by `tick_reels`.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
