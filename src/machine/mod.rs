//! The slot machine screen: sequences bet, outcome, reel animation and
//! payout, and owns the losing streak that feeds the pity rule.

pub mod logic;
pub mod types;

pub use types::*;
