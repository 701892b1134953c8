//! Slot machine data structures.

use crate::ledger::Ledger;
use crate::outcome::{OutcomeRules, SpinResult};
use crate::reels::ReelEngine;
use crate::symbols::SymbolSet;

/// How a finished spin turned out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    Won {
        result: SpinResult,
        payout: u64,
        forced: bool,
    },
    Lost {
        result: SpinResult,
    },
}

impl RoundResult {
    pub fn is_win(&self) -> bool {
        matches!(self, RoundResult::Won { .. })
    }

    pub fn result(&self) -> &SpinResult {
        match self {
            RoundResult::Won { result, .. } | RoundResult::Lost { result } => result,
        }
    }
}

/// A spin whose reels are still turning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSpin {
    pub result: SpinResult,
    pub forced_win: bool,
}

/// Coin total shown on screen, rolling towards the ledger balance.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinCounter {
    pub from: f64,
    pub target: u64,
    pub duration_ms: u64,
    pub elapsed_ms: u64,
}

impl CoinCounter {
    pub fn new(value: u64) -> Self {
        Self {
            from: value as f64,
            target: value,
            duration_ms: 0,
            elapsed_ms: 0,
        }
    }

    /// Start rolling from the currently shown value to `target`.
    pub fn roll_to(&mut self, target: u64, duration_ms: u64) {
        self.from = self.shown();
        self.target = target;
        self.duration_ms = duration_ms;
        self.elapsed_ms = 0;
    }

    pub fn tick(&mut self, dt_ms: u64) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
    }

    pub fn is_rolling(&self) -> bool {
        self.elapsed_ms < self.duration_ms
    }

    fn shown(&self) -> f64 {
        if !self.is_rolling() {
            return self.target as f64;
        }
        let t = self.elapsed_ms as f64 / self.duration_ms as f64;
        self.from + (self.target as f64 - self.from) * t
    }

    /// Whole coins to display right now.
    pub fn value(&self) -> u64 {
        self.shown().round().max(0.0) as u64
    }
}

/// Screen-level state of the game.
#[derive(Debug)]
pub struct SlotMachine {
    pub(crate) ledger: Ledger,
    pub(crate) engine: ReelEngine,
    pub(crate) symbols: SymbolSet,
    pub(crate) rules: OutcomeRules,
    /// Consecutive non-winning spins since the last win.
    pub(crate) defeat_streak: u32,
    pub(crate) pending: Option<PendingSpin>,
    pub(crate) last_round: Option<RoundResult>,
    pub(crate) coin_counter: CoinCounter,
    /// False until the first spin; drives the start prompt.
    pub(crate) started: bool,
}
