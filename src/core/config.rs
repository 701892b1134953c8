//! Tunable game parameters, read from ~/.slots/config.json.

use crate::core::constants::{
    DEFAULT_BET, DEFAULT_COINS, MAX_DEFEAT, MAX_PHASE_MS, PAYOUT_MULTIPLIER, REEL_COUNT,
};
use crate::ledger::LedgerRules;
use crate::reels::ReelTiming;
use crate::utils::persistence::load_json_or_default;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("default bet must be at least 1")]
    ZeroBet,
    #[error("default bet {bet} exceeds default balance {coins}")]
    BetExceedsCoins { bet: u64, coins: u64 },
    #[error("payout multiplier must be at least 1")]
    ZeroPayout,
    #[error("reel timing {0} must be at least 1")]
    ZeroTiming(&'static str),
    #[error("{phase} phase lasts {ms}ms, longer than {max}ms")]
    PhaseTooLong {
        phase: &'static str,
        ms: u64,
        max: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotsConfig {
    pub default_coins: u64,
    pub default_bet: u64,
    pub payout_multiplier: u64,
    pub max_defeat: u32,
    pub timing: ReelTiming,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            default_coins: DEFAULT_COINS,
            default_bet: DEFAULT_BET,
            payout_multiplier: PAYOUT_MULTIPLIER,
            max_defeat: MAX_DEFEAT,
            timing: ReelTiming::default(),
        }
    }
}

impl SlotsConfig {
    /// Read the config file. A missing file yields defaults; a file that
    /// fails validation is logged and replaced by defaults.
    pub fn load() -> Self {
        let config: SlotsConfig = load_json_or_default(CONFIG_FILE);
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("invalid {}: {}; using defaults", CONFIG_FILE, e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_bet == 0 {
            return Err(ConfigError::ZeroBet);
        }
        if self.default_bet > self.default_coins {
            return Err(ConfigError::BetExceedsCoins {
                bet: self.default_bet,
                coins: self.default_coins,
            });
        }
        if self.payout_multiplier == 0 {
            return Err(ConfigError::ZeroPayout);
        }
        let timing = &self.timing;
        if timing.blur_duration_ms == 0 {
            return Err(ConfigError::ZeroTiming("blur_duration_ms"));
        }
        if timing.blur_iterations == 0 {
            return Err(ConfigError::ZeroTiming("blur_iterations"));
        }
        if timing.settle_duration_ms == 0 {
            return Err(ConfigError::ZeroTiming("settle_duration_ms"));
        }
        if timing.settle_base_iterations == 0 {
            return Err(ConfigError::ZeroTiming("settle_base_iterations"));
        }

        let blur_ms = timing.blur_total_ms();
        if blur_ms > MAX_PHASE_MS {
            return Err(ConfigError::PhaseTooLong {
                phase: "blur",
                ms: blur_ms,
                max: MAX_PHASE_MS,
            });
        }
        // The rightmost reel settles longest
        let settle_ms = timing.settle_total_ms(REEL_COUNT - 1);
        if settle_ms > MAX_PHASE_MS {
            return Err(ConfigError::PhaseTooLong {
                phase: "settle",
                ms: settle_ms,
                max: MAX_PHASE_MS,
            });
        }
        Ok(())
    }

    pub fn ledger_rules(&self) -> LedgerRules {
        LedgerRules {
            default_coins: self.default_coins,
            default_bet: self.default_bet,
            payout_multiplier: self.payout_multiplier,
        }
    }
}
