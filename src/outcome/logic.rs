//! Outcome draw with the anti-frustration rule.

use super::types::{Outcome, OutcomeRules, SpinResult};
use rand::Rng;

/// Draw the result of the next spin.
///
/// Below the streak threshold each reel is drawn independently and
/// uniformly, so a natural win has probability `1/N²`. Once
/// `defeat_streak` reaches `rules.max_defeat` a single symbol is drawn and
/// placed on every reel; the caller must then reset its streak.
pub fn generate<R: Rng>(defeat_streak: u32, rules: &OutcomeRules, rng: &mut R) -> Outcome {
    let symbol_count = rules.symbol_count.max(1);

    if defeat_streak >= rules.max_defeat {
        let symbol = rng.gen_range(0..symbol_count);
        log::debug!(
            "forced win after {} losses: symbol {}",
            defeat_streak,
            symbol
        );
        return Outcome {
            result: SpinResult::uniform(symbol, rules.reel_count),
            forced_win: true,
        };
    }

    let symbols = (0..rules.reel_count)
        .map(|_| rng.gen_range(0..symbol_count))
        .collect();
    Outcome {
        result: SpinResult::new(symbols),
        forced_win: false,
    }
}
