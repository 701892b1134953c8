// Ledger defaults
pub const DEFAULT_COINS: u64 = 10_000;
pub const DEFAULT_BET: u64 = 100;
pub const PAYOUT_MULTIPLIER: u64 = 15;
pub const COINS_KEY: &str = "coins";

// Pity mechanism: consecutive losses before the next spin is forced to win
pub const MAX_DEFEAT: u32 = 15;

// Reel layout
pub const REEL_COUNT: usize = 3;
/// Height of one symbol cell on the strip, in terminal rows.
pub const SLOT_HEIGHT: f64 = 3.0;
/// Symbols visible in a reel window (above, payline, below).
pub const VISIBLE_SLOTS: usize = 3;

// Reel animation timing
pub const BLUR_DURATION_MS: u64 = 400;
pub const BLUR_ITERATIONS: u32 = 5;
pub const SETTLE_DURATION_MS: u64 = 200;
pub const SETTLE_BASE_ITERATIONS: u32 = 3;
/// Upper bound on a configured blur or settle phase.
pub const MAX_PHASE_MS: u64 = 60_000;
/// Longest slice of time a single tick may advance the reels.
pub const MAX_TICK_MS: u64 = 100;

// Coin counter roll durations
pub const COIN_ROLL_MS: u64 = 500;
pub const COIN_ROLL_WIN_MS: u64 = 3_000;

// Front-end
pub const REALTIME_FRAME_MS: u64 = 16; // ~60 FPS
pub const BET_STEP: u64 = 10;
pub const CUE_FEED_LEN: usize = 6;
