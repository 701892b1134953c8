//! Spin outcome data structures.

use crate::core::constants::{MAX_DEFEAT, REEL_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol index per reel, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpinResult {
    symbols: Vec<usize>,
}

impl SpinResult {
    pub fn new(symbols: Vec<usize>) -> Self {
        Self { symbols }
    }

    /// Every reel shows the same symbol.
    pub fn uniform(symbol: usize, reels: usize) -> Self {
        Self {
            symbols: vec![symbol; reels],
        }
    }

    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// A spin wins when every reel shows the same symbol.
    pub fn is_win(&self) -> bool {
        match self.symbols.split_first() {
            Some((first, rest)) => rest.iter().all(|s| s == first),
            None => false,
        }
    }
}

impl fmt::Display for SpinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Generated result plus whether the pity rule produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: SpinResult,
    pub forced_win: bool,
}

impl Outcome {
    /// A non-forced outcome with fixed symbols.
    #[cfg(test)]
    pub(crate) fn natural(symbols: Vec<usize>) -> Self {
        Self {
            result: SpinResult::new(symbols),
            forced_win: false,
        }
    }
}

/// Parameters of the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeRules {
    pub symbol_count: usize,
    pub reel_count: usize,
    /// Losing streak length that forces the next spin to win.
    pub max_defeat: u32,
}

impl Default for OutcomeRules {
    fn default() -> Self {
        Self {
            symbol_count: 8,
            reel_count: REEL_COUNT,
            max_defeat: MAX_DEFEAT,
        }
    }
}

impl OutcomeRules {
    /// One index per reel, each naming a symbol that exists.
    pub fn admits(&self, result: &SpinResult) -> bool {
        result.len() == self.reel_count && result.symbols().iter().all(|&s| s < self.symbol_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_win() {
        assert!(SpinResult::new(vec![4, 4, 4]).is_win());
        assert!(!SpinResult::new(vec![3, 5, 7]).is_win());
        assert!(!SpinResult::new(vec![2, 2, 6]).is_win());
        assert!(!SpinResult::new(Vec::new()).is_win());
    }

    #[test]
    fn test_uniform() {
        let result = SpinResult::uniform(6, 3);
        assert_eq!(result.symbols(), &[6, 6, 6]);
        assert!(result.is_win());
    }

    #[test]
    fn test_admits_only_in_range_results() {
        let rules = OutcomeRules::default();
        assert!(rules.admits(&SpinResult::new(vec![0, 7, 3])));
        assert!(!rules.admits(&SpinResult::new(vec![99, 99, 99])));
        assert!(!rules.admits(&SpinResult::new(vec![8, 1, 1])));
        assert!(!rules.admits(&SpinResult::new(vec![1, 1])));
        assert!(!rules.admits(&SpinResult::new(vec![1, 1, 1, 1])));
    }

    #[test]
    fn test_display() {
        assert_eq!(SpinResult::new(vec![3, 5, 7]).to_string(), "3-5-7");
    }
}
