//! Reel animation data structures.

use crate::core::constants::{
    BLUR_DURATION_MS, BLUR_ITERATIONS, SETTLE_BASE_ITERATIONS, SETTLE_DURATION_MS, SLOT_HEIGHT,
};
use serde::{Deserialize, Serialize};

/// Loop durations and counts for both spin phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReelTiming {
    pub blur_duration_ms: u64,
    pub blur_iterations: u32,
    pub settle_duration_ms: u64,
    /// Settle loops for reel 0; each reel to the right adds one.
    pub settle_base_iterations: u32,
}

impl Default for ReelTiming {
    fn default() -> Self {
        Self {
            blur_duration_ms: BLUR_DURATION_MS,
            blur_iterations: BLUR_ITERATIONS,
            settle_duration_ms: SETTLE_DURATION_MS,
            settle_base_iterations: SETTLE_BASE_ITERATIONS,
        }
    }
}

impl ReelTiming {
    /// Settle loops for the given reel: 3, 4, 5 with the default timing.
    pub fn settle_iterations(&self, reel: usize) -> u32 {
        let extra = u32::try_from(reel).unwrap_or(u32::MAX);
        self.settle_base_iterations.saturating_add(extra)
    }

    pub fn blur_total_ms(&self) -> u64 {
        self.blur_duration_ms.saturating_mul(self.blur_iterations as u64)
    }

    pub fn settle_total_ms(&self, reel: usize) -> u64 {
        self.settle_duration_ms.saturating_mul(self.settle_iterations(reel) as u64)
    }
}

/// Engine state for one spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelPhase {
    Idle,
    Blurring,
    Settling,
    Done,
}

/// Notable moments reported by a tick, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelEvent {
    /// Every reel finished its blur loops; settling has begun.
    BlurFinished,
    /// The reel at this index landed on its target symbol.
    ReelStopped(usize),
    /// The last reel landed. Reported exactly once per spin.
    SpinFinished,
}

/// A looping tween of one reel position.
///
/// Each loop restarts at `from` and eases to `to`; once all loops have
/// elapsed the value holds at `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReelChannel {
    pub from: f64,
    pub to: f64,
    pub loop_ms: u64,
    pub iterations: u32,
    pub elapsed_ms: u64,
}

impl ReelChannel {
    pub fn new(from: f64, to: f64, loop_ms: u64, iterations: u32) -> Self {
        Self {
            from,
            to,
            loop_ms: loop_ms.max(1),
            iterations: iterations.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn total_ms(&self) -> u64 {
        self.loop_ms.saturating_mul(self.iterations as u64)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.total_ms()
    }

    pub fn advance(&mut self, dt_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms).min(self.total_ms());
    }

    /// Position at the current elapsed time.
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let into_loop = self.elapsed_ms % self.loop_ms;
        let t = into_loop as f64 / self.loop_ms as f64;
        self.from + (self.to - self.from) * ease_in_out(t)
    }
}

/// Symmetric cubic ease-in-out on `t` in `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Strip offset that centres symbol `index` on the payline.
pub fn position_for(index: usize) -> f64 {
    -(index as f64) * SLOT_HEIGHT
}

/// One reel column.
#[derive(Debug, Clone, PartialEq)]
pub struct ReelState {
    /// Signed strip translation; `position_for(i)` shows symbol `i`.
    pub position: f64,
    pub channel: Option<ReelChannel>,
    /// Landed on its target during the current settle.
    pub stopped: bool,
}

impl ReelState {
    /// A reel resting on symbol 0.
    pub fn new() -> Self {
        Self {
            position: position_for(0),
            channel: None,
            stopped: true,
        }
    }
}

impl Default for ReelState {
    fn default() -> Self {
        Self::new()
    }
}

/// The three reel columns and the phase they are in.
#[derive(Debug, Clone)]
pub struct ReelEngine {
    pub reels: Vec<ReelState>,
    pub phase: ReelPhase,
    /// Symbol each reel must land on this spin.
    pub targets: Vec<usize>,
    /// Blur destination per reel, drawn fresh each spin.
    pub blur_offsets: Vec<f64>,
    pub timing: ReelTiming,
    pub symbol_count: usize,
}

impl ReelEngine {
    pub fn new(reel_count: usize, symbol_count: usize, timing: ReelTiming) -> Self {
        Self {
            reels: vec![ReelState::new(); reel_count],
            phase: ReelPhase::Idle,
            targets: Vec::new(),
            blur_offsets: Vec::new(),
            timing,
            symbol_count,
        }
    }

    /// Current position of every reel, for rendering.
    pub fn positions(&self) -> Vec<f64> {
        self.reels.iter().map(|r| r.position).collect()
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, ReelPhase::Blurring | ReelPhase::Settling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing() {
        let timing = ReelTiming::default();
        assert_eq!(timing.blur_total_ms(), 2000);
        assert_eq!(timing.settle_iterations(0), 3);
        assert_eq!(timing.settle_iterations(1), 4);
        assert_eq!(timing.settle_iterations(2), 5);
        assert_eq!(timing.settle_total_ms(2), 1000);
    }

    #[test]
    fn test_huge_timing_saturates() {
        let timing = ReelTiming {
            blur_duration_ms: u64::MAX / 2,
            blur_iterations: 5,
            settle_duration_ms: u64::MAX / 2,
            settle_base_iterations: u32::MAX,
        };
        assert_eq!(timing.blur_total_ms(), u64::MAX);
        assert_eq!(timing.settle_iterations(2), u32::MAX);
        assert_eq!(timing.settle_total_ms(0), u64::MAX);
    }

    #[test]
    fn test_huge_channel_advances_without_overflow() {
        let mut channel = ReelChannel::new(0.0, -21.0, u64::MAX / 2, 5);
        assert_eq!(channel.total_ms(), u64::MAX);
        channel.advance(100);
        channel.advance(u64::MAX);
        assert!(channel.is_finished());
        assert_eq!(channel.value(), -21.0);
    }

    #[test]
    fn test_position_for() {
        assert_eq!(position_for(0), 0.0);
        assert_eq!(position_for(4), -4.0 * SLOT_HEIGHT);
    }

    #[test]
    fn test_ease_endpoints() {
        assert!(ease_in_out(0.0).abs() < f64::EPSILON);
        assert!((ease_in_out(1.0) - 1.0).abs() < f64::EPSILON);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-9);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn test_channel_restarts_each_loop() {
        let mut channel = ReelChannel::new(0.0, -30.0, 100, 3);
        channel.advance(50);
        let mid_first = channel.value();
        channel.advance(100);
        let mid_second = channel.value();
        assert!((mid_first - mid_second).abs() < 1e-9);
        assert!(!channel.is_finished());
    }

    #[test]
    fn test_channel_holds_target_when_finished() {
        let mut channel = ReelChannel::new(-6.0, -21.0, 200, 3);
        channel.advance(10_000);
        assert!(channel.is_finished());
        assert_eq!(channel.elapsed_ms, 600);
        assert_eq!(channel.value(), -21.0);
    }

    #[test]
    fn test_new_engine_rests_on_symbol_zero() {
        let engine = ReelEngine::new(3, 8, ReelTiming::default());
        assert_eq!(engine.phase, ReelPhase::Idle);
        assert_eq!(engine.positions(), vec![0.0, 0.0, 0.0]);
        assert!(!engine.is_animating());
    }
}
