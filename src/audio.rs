//! Audio cue boundary.
//!
//! The core never waits on sound: cues are fire-and-forget calls into an
//! `AudioSink`. The terminal front-end uses `CueFeed`, which keeps the most
//! recent cues around so the UI can show them.

use std::collections::VecDeque;

/// Distinct sounds the machine asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Tick played as each reel lands.
    ReelStop,
    /// Whoosh when the lever is pulled.
    SpinStart,
    /// Continuous hum while the reels turn.
    SpinHum,
    /// Fanfare on a winning line.
    Win,
}

impl AudioCue {
    pub fn label(self) -> &'static str {
        match self {
            AudioCue::ReelStop => "reel stop",
            AudioCue::SpinStart => "spin start",
            AudioCue::SpinHum => "spin hum",
            AudioCue::Win => "win fanfare",
        }
    }
}

/// Receiver of audio cues.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);

    /// Stop a looping cue. One-shot cues ignore this.
    fn stop(&mut self, _cue: AudioCue) {}
}

/// Sink that drops every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// One entry in the cue feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueEntry {
    pub cue: AudioCue,
    /// False when the entry records a `stop`.
    pub started: bool,
}

/// Bounded log of the latest cues, newest last.
#[derive(Debug, Clone)]
pub struct CueFeed {
    entries: VecDeque<CueEntry>,
    capacity: usize,
}

impl CueFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &CueEntry> {
        self.entries.iter()
    }

    fn push(&mut self, entry: CueEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }
}

impl AudioSink for CueFeed {
    fn play(&mut self, cue: AudioCue) {
        log::debug!("cue: {}", cue.label());
        self.push(CueEntry { cue, started: true });
    }

    fn stop(&mut self, cue: AudioCue) {
        log::debug!("cue stopped: {}", cue.label());
        self.push(CueEntry {
            cue,
            started: false,
        });
    }
}
