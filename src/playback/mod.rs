//! VCR-style playback controller over a precomputed trace
//!
//! [`Playback`] owns the cursor into a [`crate::trace::Trace`] and the
//! play/pause/speed state. It never touches the trace itself; the UI reads
//! the snapshot at [`Playback::current_step`] after every operation.
//!
//! The controller is single-threaded and cooperative. Auto-advance is an
//! [`Instant`] deadline polled from the event loop via [`Playback::tick`];
//! there is no timer thread, and cancelling the pending tick is simply
//! clearing the armed deadline. Every manual seek cancels the pending tick
//! before moving the cursor, so cursor changes are linear and a queued tick
//! can never double-apply on top of a seek.

use std::time::{Duration, Instant};

/// Default delay between auto-advance ticks at speed 1.0.
pub const BASE_INTERVAL: Duration = Duration::from_millis(600);

/// Discrete speed settings the UI steps through with +/-.
pub const SPEED_LADDER: [f64; 6] = [0.25, 0.5, 1.0, 2.0, 4.0, 8.0];

/// Playback state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Before the first step; cursor is -1 and nothing is highlighted.
    Idle,
    /// Auto-advancing on a timer.
    Playing,
    /// Stopped mid-trace with the cursor retained.
    Paused,
    /// Cursor is on the final step; the timer is disarmed.
    AtEnd,
}

/// Playback controller for one trace.
///
/// The cursor ranges over `[-1, len-1]`, where `-1` means "not started".
/// All operations clamp; none panic.
#[derive(Debug)]
pub struct Playback {
    len: usize,
    cursor: isize,
    state: PlaybackState,
    speed: f64,
    /// When the pending auto-advance tick was armed. `None` = no tick pending.
    armed: Option<Instant>,
}

impl Playback {
    /// Create an idle controller for a trace of `len` steps.
    pub fn new(len: usize) -> Self {
        Playback {
            len,
            cursor: -1,
            state: PlaybackState::Idle,
            speed: 1.0,
            armed: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw cursor in `[-1, len-1]`.
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// The index of the snapshot to render, or `None` before the first step.
    pub fn current_step(&self) -> Option<usize> {
        if self.cursor < 0 {
            None
        } else {
            Some(self.cursor as usize)
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn at_end(&self) -> bool {
        self.state == PlaybackState::AtEnd
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Delay between auto-advance ticks at the current speed.
    pub fn interval(&self) -> Duration {
        BASE_INTERVAL.div_f64(self.speed)
    }

    /// Begin auto-advancing from the start. The cursor stays at -1; the
    /// first tick moves it to step 0.
    pub fn start(&mut self, now: Instant) {
        if self.state != PlaybackState::Idle {
            return;
        }
        if self.len == 0 {
            self.state = PlaybackState::AtEnd;
            return;
        }
        self.state = PlaybackState::Playing;
        self.armed = Some(now);
    }

    /// Resume auto-advancing after a pause. No-op unless paused mid-trace.
    pub fn resume(&mut self, now: Instant) {
        if self.state == PlaybackState::Paused && self.cursor < self.last_index() {
            self.state = PlaybackState::Playing;
            self.armed = Some(now);
        }
    }

    /// Stop auto-advancing, retaining the cursor.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            self.armed = None;
        }
    }

    /// Space-bar behavior: pause if playing, otherwise start or resume.
    pub fn toggle(&mut self, now: Instant) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Idle => self.start(now),
            PlaybackState::Paused => self.resume(now),
            PlaybackState::AtEnd => {}
        }
    }

    /// Advance by one step if the armed deadline has elapsed. Returns `true`
    /// when the cursor moved. Call this from the event loop on every pass.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        let Some(armed) = self.armed else {
            return false;
        };
        if now.duration_since(armed) < self.interval() {
            return false;
        }
        self.cursor += 1;
        if self.cursor >= self.last_index() {
            self.cursor = self.last_index();
            self.state = PlaybackState::AtEnd;
            self.armed = None;
        } else {
            self.armed = Some(now);
        }
        true
    }

    /// Manual step forward by one. Acts as a pause.
    pub fn step_forward(&mut self) {
        self.seek(self.cursor + 1);
    }

    /// Manual step back by one. Acts as a pause.
    pub fn step_back(&mut self) {
        self.seek(self.cursor - 1);
    }

    /// Seek to `index`, clamped to `[-1, len-1]`. Cancels any pending tick.
    /// Idempotent: seeking to the current cursor changes nothing.
    pub fn go_to(&mut self, index: isize) {
        self.seek(index);
    }

    /// Jump to the pre-start state (cursor -1).
    pub fn go_to_start(&mut self) {
        self.seek(-1);
    }

    /// Jump to the terminal step.
    pub fn go_to_end(&mut self) {
        self.seek(self.last_index());
    }

    /// Discard playback state for a regenerated trace of `new_len` steps.
    pub fn reset(&mut self, new_len: usize) {
        self.len = new_len;
        self.cursor = -1;
        self.state = PlaybackState::Idle;
        self.armed = None;
    }

    /// Set the speed multiplier. Non-positive or non-finite values are
    /// ignored. While playing, the pending tick is re-armed with the new
    /// interval; the cursor is untouched.
    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() && speed > 0.0 {
            self.speed = speed;
        }
    }

    /// Step up to the next entry in [`SPEED_LADDER`].
    pub fn speed_up(&mut self) {
        if let Some(&s) = SPEED_LADDER.iter().find(|&&s| s > self.speed) {
            self.speed = s;
        }
    }

    /// Step down to the previous entry in [`SPEED_LADDER`].
    pub fn speed_down(&mut self) {
        if let Some(&s) = SPEED_LADDER.iter().rev().find(|&&s| s < self.speed) {
            self.speed = s;
        }
    }

    fn last_index(&self) -> isize {
        self.len as isize - 1
    }

    fn seek(&mut self, index: isize) {
        // Cancel before moving, so a pending tick can never stack on a seek.
        self.armed = None;
        self.cursor = index.clamp(-1, self.last_index().max(-1));
        self.state = if self.cursor < 0 {
            PlaybackState::Idle
        } else if self.cursor == self.last_index() {
            PlaybackState::AtEnd
        } else {
            PlaybackState::Paused
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_clamps_both_ends() {
        let mut pb = Playback::new(5);
        pb.go_to(100);
        assert_eq!(pb.cursor(), 4);
        assert_eq!(pb.state(), PlaybackState::AtEnd);
        pb.go_to(-100);
        assert_eq!(pb.cursor(), -1);
        assert_eq!(pb.state(), PlaybackState::Idle);
    }

    #[test]
    fn empty_trace_never_advances() {
        let mut pb = Playback::new(0);
        let now = Instant::now();
        pb.start(now);
        assert_eq!(pb.state(), PlaybackState::AtEnd);
        assert!(!pb.tick(now + BASE_INTERVAL * 2));
        assert_eq!(pb.cursor(), -1);
    }
}
