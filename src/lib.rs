//! Slots - Terminal Slot Machine Library
//!
//! Three reels, a staged spin animation and a persisted coin ledger. The
//! game logic is exposed here for the binary, the tests and external use.

pub mod audio;
pub mod core;
pub mod input;
pub mod ledger;
pub mod machine;
pub mod outcome;
pub mod reels;
pub mod store;
pub mod symbols;
pub mod ui;
pub mod utils;

pub use crate::audio::{AudioCue, AudioSink};
pub use crate::core::config::SlotsConfig;
pub use crate::ledger::{Ledger, LedgerState};
pub use crate::machine::{RoundResult, SlotMachine};
pub use crate::outcome::{Outcome, SpinResult};
pub use crate::store::{FileStore, KeyValueStore, MemoryStore};
