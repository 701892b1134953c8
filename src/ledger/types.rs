//! Ledger data structures.

use crate::core::constants::{DEFAULT_BET, DEFAULT_COINS, PAYOUT_MULTIPLIER};
use crate::store::KeyValueStore;
use serde::{Deserialize, Serialize};

/// Balance defaults and payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerRules {
    pub default_coins: u64,
    pub default_bet: u64,
    /// Multiple of the stake credited on a win.
    pub payout_multiplier: u64,
}

impl Default for LedgerRules {
    fn default() -> Self {
        Self {
            default_coins: DEFAULT_COINS,
            default_bet: DEFAULT_BET,
            payout_multiplier: PAYOUT_MULTIPLIER,
        }
    }
}

/// Values the screen displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    pub coins: u64,
    pub bet: u64,
    /// True from spin initiation until the reels have settled.
    pub spin_disabled: bool,
}

/// Owns the ledger state and writes the balance through to a store.
pub struct Ledger {
    pub(crate) state: LedgerState,
    pub(crate) rules: LedgerRules,
    pub(crate) store: Box<dyn KeyValueStore>,
}

impl Ledger {
    pub fn coins(&self) -> u64 {
        self.state.coins
    }

    pub fn bet(&self) -> u64 {
        self.state.bet
    }

    pub fn spin_disabled(&self) -> bool {
        self.state.spin_disabled
    }

    pub fn rules(&self) -> LedgerRules {
        self.rules
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("state", &self.state)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
