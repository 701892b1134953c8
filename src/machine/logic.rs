//! Spin sequencing.
//!
//! `spin` takes the stake, draws the outcome and starts the reels, then
//! returns. The reels play out over `tick` calls; when the last one lands
//! the spin is resolved against the ledger and the losing streak.

use super::types::{CoinCounter, PendingSpin, RoundResult, SlotMachine};
use crate::audio::{AudioCue, AudioSink};
use crate::core::config::SlotsConfig;
use crate::core::constants::{COIN_ROLL_MS, COIN_ROLL_WIN_MS, REEL_COUNT};
use crate::ledger::Ledger;
use crate::outcome::{generate, Outcome, OutcomeRules, SpinResult};
use crate::reels::{start_spin, tick_reels, ReelEngine, ReelEvent, ReelPhase};
use crate::store::KeyValueStore;
use crate::symbols::SymbolSet;
use rand::Rng;

impl SlotMachine {
    /// Mount the screen: load the ledger and rest every reel on symbol 0.
    pub fn new(config: &SlotsConfig, store: Box<dyn KeyValueStore>) -> Self {
        let symbols = SymbolSet::standard();
        let ledger = Ledger::initialize(store, config.ledger_rules());
        let coin_counter = CoinCounter::new(ledger.coins());
        Self {
            engine: ReelEngine::new(REEL_COUNT, symbols.len(), config.timing),
            rules: OutcomeRules {
                symbol_count: symbols.len(),
                reel_count: REEL_COUNT,
                max_defeat: config.max_defeat,
            },
            symbols,
            ledger,
            defeat_streak: 0,
            pending: None,
            last_round: None,
            coin_counter,
            started: false,
        }
    }

    /// Spinning needs an idle machine and at least one coin.
    pub fn can_spin(&self) -> bool {
        !self.ledger.spin_disabled() && self.ledger.coins() >= 1
    }

    pub fn can_new_game(&self) -> bool {
        self.ledger.can_reset()
    }

    /// Pull the lever. Returns false (and changes nothing) when spinning is
    /// not allowed right now.
    pub fn spin<R: Rng>(&mut self, rng: &mut R, audio: &mut dyn AudioSink) -> bool {
        if !self.can_spin() {
            return false;
        }
        let outcome = generate(self.defeat_streak, &self.rules, rng);
        self.spin_with_outcome(outcome, audio)
    }

    /// Spin towards an outcome decided elsewhere.
    ///
    /// Rejected when the result does not fit the machine (wrong reel count
    /// or unknown symbol), and when the streak has reached the pity
    /// threshold but the result is not a win.
    pub(crate) fn spin_with_outcome(
        &mut self,
        outcome: Outcome,
        audio: &mut dyn AudioSink,
    ) -> bool {
        if !self.can_spin() {
            return false;
        }
        if !self.rules.admits(&outcome.result) {
            log::warn!("rejected outcome {} for this machine", outcome.result);
            return false;
        }
        if self.defeat_streak >= self.rules.max_defeat && !outcome.result.is_win() {
            log::warn!(
                "rejected losing outcome {} after {} losses",
                outcome.result,
                self.defeat_streak
            );
            return false;
        }

        self.started = true;
        audio.play(AudioCue::SpinStart);
        audio.play(AudioCue::SpinHum);

        let stake = self.ledger.commit_spin();
        self.coin_counter.roll_to(self.ledger.coins(), COIN_ROLL_MS);

        if outcome.forced_win {
            self.defeat_streak = 0;
        }

        // Blur randomness comes from a separate RNG than the outcome
        start_spin(&mut self.engine, &outcome.result, &mut rand::thread_rng());

        log::debug!("staked {} on {}", stake, outcome.result);
        self.pending = Some(PendingSpin {
            result: outcome.result,
            forced_win: outcome.forced_win,
        });
        self.last_round = None;
        true
    }

    /// Advance animations by `dt_ms`. Returns the round result on the tick
    /// the last reel lands.
    pub fn tick(&mut self, dt_ms: u64, audio: &mut dyn AudioSink) -> Option<RoundResult> {
        self.coin_counter.tick(dt_ms);
        let events = tick_reels(&mut self.engine, dt_ms, audio);
        if events.contains(&ReelEvent::SpinFinished) {
            return self.resolve(audio);
        }
        None
    }

    fn resolve(&mut self, audio: &mut dyn AudioSink) -> Option<RoundResult> {
        let pending = self.pending.take()?;
        audio.stop(AudioCue::SpinHum);

        let won = pending.result.is_win();
        let bet = self.ledger.bet();
        let payout = self.ledger.resolve_spin(won, bet);

        let round = if won {
            self.defeat_streak = 0;
            self.coin_counter.roll_to(self.ledger.coins(), COIN_ROLL_WIN_MS);
            audio.play(AudioCue::Win);
            log::info!(
                "won {} on {}{}",
                payout,
                pending.result,
                if pending.forced_win { " (forced)" } else { "" }
            );
            RoundResult::Won {
                result: pending.result,
                payout,
                forced: pending.forced_win,
            }
        } else {
            self.defeat_streak += 1;
            log::debug!("lost on {}, streak {}", pending.result, self.defeat_streak);
            RoundResult::Lost {
                result: pending.result,
            }
        };

        self.last_round = Some(round.clone());
        Some(round)
    }

    /// Change the bet; invalid amounts are ignored.
    pub fn set_bet(&mut self, amount: u64) -> bool {
        self.ledger.place_bet(amount)
    }

    /// Start over with the default balance.
    pub fn new_game(&mut self) -> bool {
        if !self.ledger.reset() {
            return false;
        }
        self.coin_counter.roll_to(self.ledger.coins(), COIN_ROLL_MS);
        self.last_round = None;
        true
    }

    pub fn coins(&self) -> u64 {
        self.ledger.coins()
    }

    pub fn bet(&self) -> u64 {
        self.ledger.bet()
    }

    pub fn spin_disabled(&self) -> bool {
        self.ledger.spin_disabled()
    }

    pub fn payout_multiplier(&self) -> u64 {
        self.ledger.rules().payout_multiplier
    }

    pub fn defeat_streak(&self) -> u32 {
        self.defeat_streak
    }

    /// Coin total as currently rolled on screen.
    pub fn shown_coins(&self) -> u64 {
        self.coin_counter.value()
    }

    pub fn reel_positions(&self) -> Vec<f64> {
        self.engine.positions()
    }

    pub fn reel_phase(&self) -> ReelPhase {
        self.engine.phase
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    pub fn last_round(&self) -> Option<&RoundResult> {
        self.last_round.as_ref()
    }

    /// One-line message for the status bar.
    pub fn status_text(&self) -> String {
        if self.pending.is_some() {
            return "Spinning...".to_string();
        }
        if self.ledger.coins() == 0 {
            return "Out of coins - start a NEW GAME".to_string();
        }
        if !self.started {
            return "Press SPIN to start the game".to_string();
        }
        match &self.last_round {
            Some(RoundResult::Won { result, payout, .. }) => {
                format!("WIN! {} pays {} coins", self.describe(result), payout)
            }
            Some(RoundResult::Lost { result }) => format!("{} - no match", self.describe(result)),
            None => String::new(),
        }
    }

    fn describe(&self, result: &SpinResult) -> String {
        result
            .symbols()
            .iter()
            .map(|&i| self.symbols.get(i).map(|s| s.name).unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
