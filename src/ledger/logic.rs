//! Ledger operations. Every coin mutation is written through to the store;
//! store failures are logged and otherwise ignored, leaving the in-memory
//! ledger authoritative for the session.

use super::types::{Ledger, LedgerRules, LedgerState};
use crate::core::constants::COINS_KEY;
use crate::store::KeyValueStore;

impl Ledger {
    /// Load the persisted balance, falling back to the default when it is
    /// absent, unreadable or not a number.
    pub fn initialize(store: Box<dyn KeyValueStore>, rules: LedgerRules) -> Self {
        let coins = match store.get(COINS_KEY) {
            Ok(Some(raw)) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                log::warn!("stored balance {:?} is not a number, using default", raw);
                rules.default_coins
            }),
            Ok(None) => rules.default_coins,
            Err(e) => {
                log::warn!("could not read balance: {}", e);
                rules.default_coins
            }
        };
        log::info!("ledger loaded with {} coins", coins);

        Self {
            state: LedgerState {
                coins,
                bet: rules.default_bet.min(coins),
                spin_disabled: false,
            },
            rules,
            store,
        }
    }

    /// Change the bet. Rejected unless `1 <= amount <= coins`, or while a
    /// spin is in flight.
    pub fn place_bet(&mut self, amount: u64) -> bool {
        if self.state.spin_disabled || amount < 1 || amount > self.state.coins {
            return false;
        }
        self.state.bet = amount;
        true
    }

    /// Take the stake before the outcome is known and lock further spins.
    /// Returns the stake.
    pub fn commit_spin(&mut self) -> u64 {
        let stake = self.state.bet.min(self.state.coins);
        self.state.coins -= stake;
        if self.state.bet > self.state.coins {
            self.state.bet = self.state.coins;
        }
        self.state.spin_disabled = true;
        self.persist();
        stake
    }

    /// Settle a finished spin. Credits `bet * payout_multiplier` on a win
    /// and unlocks spinning either way. Returns the amount credited.
    ///
    /// The machine passes the bet as it stands after `commit_spin`, so a
    /// spin that emptied the balance pays on the clamped bet.
    pub fn resolve_spin(&mut self, won: bool, bet: u64) -> u64 {
        let mut payout = 0;
        if won {
            payout = bet.saturating_mul(self.rules.payout_multiplier);
            self.state.coins = self.state.coins.saturating_add(payout);
            self.persist();
        }
        self.state.spin_disabled = false;
        payout
    }

    /// Whether `reset` would change anything.
    pub fn can_reset(&self) -> bool {
        !self.state.spin_disabled
            && (self.state.coins != self.rules.default_coins
                || self.state.bet != self.rules.default_bet)
    }

    /// Restore the default balance and bet.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.state = LedgerState {
            coins: self.rules.default_coins,
            bet: self.rules.default_bet.min(self.rules.default_coins),
            spin_disabled: false,
        };
        self.persist();
        log::info!("ledger reset to {} coins", self.state.coins);
        true
    }

    fn persist(&mut self) {
        let value = self.state.coins.to_string();
        if let Err(e) = self.store.set(COINS_KEY, &value) {
            log::warn!("could not persist balance {}: {}", value, e);
        }
    }
}
