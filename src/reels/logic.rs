//! Reel engine transitions: starting a spin and advancing it in time.

use super::types::{position_for, ReelChannel, ReelEngine, ReelEvent, ReelPhase, ReelState};
use crate::audio::{AudioCue, AudioSink};
use crate::core::constants::MAX_TICK_MS;
use crate::outcome::SpinResult;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draw which large offset each reel blurs towards.
///
/// The three candidates sit near the far end of the strip; shuffling them
/// keeps the reels from moving in lockstep. This uses its own RNG so the
/// visual draw never touches the outcome draw.
pub fn draw_blur_offsets<R: Rng>(symbol_count: usize, reel_count: usize, rng: &mut R) -> Vec<f64> {
    let last = symbol_count.saturating_sub(1);
    let mut candidates = [
        position_for(last),
        position_for(last.saturating_sub(1)),
        position_for(last.saturating_sub(2)),
    ];
    candidates.shuffle(rng);
    (0..reel_count)
        .map(|reel| candidates[reel % candidates.len()])
        .collect()
}

/// Track at least `count` reels; new ones start on symbol 0.
pub fn ensure_reels(engine: &mut ReelEngine, count: usize) {
    while engine.reels.len() < count {
        engine.reels.push(ReelState::new());
    }
}

/// Begin the blur phase towards `result`. Returns immediately; the spin
/// plays out over subsequent `tick_reels` calls.
pub fn start_spin<R: Rng>(engine: &mut ReelEngine, result: &SpinResult, rng: &mut R) {
    ensure_reels(engine, result.len());

    engine.targets = result.symbols().to_vec();
    engine.blur_offsets = draw_blur_offsets(engine.symbol_count, engine.reels.len(), rng);

    let timing = engine.timing;
    for (reel, offset) in engine.reels.iter_mut().zip(&engine.blur_offsets) {
        reel.channel = Some(ReelChannel::new(
            reel.position,
            *offset,
            timing.blur_duration_ms,
            timing.blur_iterations,
        ));
        reel.stopped = false;
    }
    engine.phase = ReelPhase::Blurring;
    log::debug!("reels blurring towards {}", result);
}

/// Advance the animation by `dt_ms` and report what happened.
///
/// A single call never advances more than `MAX_TICK_MS`, so a stalled frame
/// cannot skip a phase. Reel stops are reported (and their cue played) in
/// reel order; `SpinFinished` follows the last one exactly once.
pub fn tick_reels(engine: &mut ReelEngine, dt_ms: u64, audio: &mut dyn AudioSink) -> Vec<ReelEvent> {
    let dt_ms = dt_ms.min(MAX_TICK_MS);
    let mut events = Vec::new();

    match engine.phase {
        ReelPhase::Idle | ReelPhase::Done => {}
        ReelPhase::Blurring => {
            let mut all_done = true;
            for reel in &mut engine.reels {
                if let Some(channel) = reel.channel.as_mut() {
                    channel.advance(dt_ms);
                    reel.position = channel.value();
                    all_done &= channel.is_finished();
                }
            }
            if all_done {
                begin_settle(engine);
                events.push(ReelEvent::BlurFinished);
            }
        }
        ReelPhase::Settling => {
            for (index, reel) in engine.reels.iter_mut().enumerate() {
                if reel.stopped {
                    continue;
                }
                let Some(channel) = reel.channel.as_mut() else {
                    reel.stopped = true;
                    continue;
                };
                channel.advance(dt_ms);
                reel.position = channel.value();
                if channel.is_finished() {
                    reel.stopped = true;
                    reel.channel = None;
                    audio.play(AudioCue::ReelStop);
                    events.push(ReelEvent::ReelStopped(index));
                }
            }
            if engine.reels.iter().all(|r| r.stopped) {
                engine.phase = ReelPhase::Done;
                events.push(ReelEvent::SpinFinished);
                log::debug!("reels settled on {:?}", engine.targets);
            }
        }
    }

    events
}

/// Switch every reel from its blurred position to a settle loop onto its
/// target. Later reels take more loops, so they land later.
fn begin_settle(engine: &mut ReelEngine) {
    let timing = engine.timing;
    for (index, reel) in engine.reels.iter_mut().enumerate() {
        match engine.targets.get(index) {
            Some(&target) => {
                reel.channel = Some(ReelChannel::new(
                    reel.position,
                    position_for(target),
                    timing.settle_duration_ms,
                    timing.settle_iterations(index),
                ));
                reel.stopped = false;
            }
            // Extra reels without a target stay where the blur left them
            None => {
                reel.channel = None;
                reel.stopped = true;
            }
        }
    }
    engine.phase = ReelPhase::Settling;
    log::debug!("reels settling");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::reels::types::ReelTiming;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn engine() -> ReelEngine {
        ReelEngine::new(3, 8, ReelTiming::default())
    }

    fn run_to_end(engine: &mut ReelEngine) -> Vec<(u64, ReelEvent)> {
        let mut audio = NullAudio;
        let mut log = Vec::new();
        let mut now = 0;
        while engine.phase != ReelPhase::Done && now < 60_000 {
            now += 16;
            for event in tick_reels(engine, 16, &mut audio) {
                log.push((now, event));
            }
        }
        log
    }

    #[test]
    fn test_blur_offsets_are_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let mut offsets = draw_blur_offsets(8, 3, &mut rng);
            offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(offsets, vec![position_for(7), position_for(6), position_for(5)]);
        }
    }

    #[test]
    fn test_start_enters_blurring() {
        let mut engine = engine();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        start_spin(&mut engine, &SpinResult::new(vec![1, 2, 3]), &mut rng);
        assert_eq!(engine.phase, ReelPhase::Blurring);
        assert!(engine.is_animating());
        assert!(engine.reels.iter().all(|r| r.channel.is_some() && !r.stopped));
    }

    #[test]
    fn test_lands_on_targets() {
        let mut engine = engine();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        start_spin(&mut engine, &SpinResult::new(vec![3, 5, 7]), &mut rng);
        run_to_end(&mut engine);
        assert_eq!(
            engine.positions(),
            vec![position_for(3), position_for(5), position_for(7)]
        );
    }

    #[test]
    fn test_blur_precedes_settle_and_stops_are_ordered() {
        let mut engine = engine();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        start_spin(&mut engine, &SpinResult::new(vec![0, 0, 0]), &mut rng);
        let events: Vec<ReelEvent> = run_to_end(&mut engine).into_iter().map(|(_, e)| e).collect();
        assert_eq!(
            events,
            vec![
                ReelEvent::BlurFinished,
                ReelEvent::ReelStopped(0),
                ReelEvent::ReelStopped(1),
                ReelEvent::ReelStopped(2),
                ReelEvent::SpinFinished,
            ]
        );
    }

    #[test]
    fn test_stagger_timing() {
        let mut engine = engine();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        start_spin(&mut engine, &SpinResult::new(vec![2, 4, 6]), &mut rng);
        let log = run_to_end(&mut engine);
        let at = |wanted: ReelEvent| log.iter().find(|(_, e)| *e == wanted).map(|(t, _)| *t);

        let blur = at(ReelEvent::BlurFinished).unwrap();
        let stop0 = at(ReelEvent::ReelStopped(0)).unwrap();
        let stop1 = at(ReelEvent::ReelStopped(1)).unwrap();
        let stop2 = at(ReelEvent::ReelStopped(2)).unwrap();

        // 16ms frames round each boundary up to the next frame
        assert!(blur >= 2000 && blur < 2016);
        assert!(stop0 - blur >= 600 && stop0 - blur < 616);
        assert!(stop1 - stop0 >= 184 && stop1 - stop0 <= 216);
        assert!(stop2 - stop1 >= 184 && stop2 - stop1 <= 216);
    }

    #[test]
    fn test_spin_finished_reported_once() {
        let mut engine = engine();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        start_spin(&mut engine, &SpinResult::new(vec![1, 1, 2]), &mut rng);
        let mut finished = run_to_end(&mut engine)
            .iter()
            .filter(|(_, e)| *e == ReelEvent::SpinFinished)
            .count();
        let mut audio = NullAudio;
        for _ in 0..100 {
            finished += tick_reels(&mut engine, 16, &mut audio)
                .iter()
                .filter(|e| **e == ReelEvent::SpinFinished)
                .count();
        }
        assert_eq!(finished, 1);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut engine = engine();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        start_spin(&mut engine, &SpinResult::new(vec![1, 2, 3]), &mut rng);
        let mut audio = NullAudio;
        let events = tick_reels(&mut engine, 60_000, &mut audio);
        assert!(events.is_empty());
        assert_eq!(engine.phase, ReelPhase::Blurring);
    }

    #[test]
    fn test_huge_timing_ticks_without_overflow() {
        let timing = ReelTiming {
            blur_duration_ms: u64::MAX / 2,
            settle_base_iterations: u32::MAX,
            ..ReelTiming::default()
        };
        let mut engine = ReelEngine::new(3, 8, timing);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        start_spin(&mut engine, &SpinResult::new(vec![1, 2, 3]), &mut rng);
        let mut audio = NullAudio;
        for _ in 0..100 {
            assert!(tick_reels(&mut engine, 16, &mut audio).is_empty());
        }
        assert_eq!(engine.phase, ReelPhase::Blurring);
    }

    #[test]
    fn test_growth_initializes_new_reels_at_symbol_zero() {
        let mut engine = ReelEngine::new(1, 8, ReelTiming::default());
        engine.reels[0].position = position_for(5);
        ensure_reels(&mut engine, 3);
        assert_eq!(engine.reels.len(), 3);
        assert_eq!(engine.reels[0].position, position_for(5));
        assert_eq!(engine.reels[1].position, position_for(0));
        assert_eq!(engine.reels[2].position, position_for(0));
    }

    #[test]
    fn test_start_grows_engine_to_result_length() {
        let mut engine = ReelEngine::new(0, 8, ReelTiming::default());
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        start_spin(&mut engine, &SpinResult::new(vec![1, 2, 3]), &mut rng);
        assert_eq!(engine.reels.len(), 3);
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut engine = engine();
        let mut audio = NullAudio;
        assert!(tick_reels(&mut engine, 16, &mut audio).is_empty());
        assert_eq!(engine.phase, ReelPhase::Idle);
    }
}
