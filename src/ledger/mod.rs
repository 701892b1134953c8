//! Coin balance and bet bookkeeping.

pub mod logic;
pub mod types;

pub use types::*;
