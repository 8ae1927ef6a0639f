use algoscope::playback::{Playback, PlaybackState, BASE_INTERVAL, SPEED_LADDER};
use std::time::{Duration, Instant};

#[test]
fn starts_idle_before_the_first_step() {
    let pb = Playback::new(10);
    assert_eq!(pb.state(), PlaybackState::Idle);
    assert_eq!(pb.cursor(), -1);
    assert_eq!(pb.current_step(), None);
}

#[test]
fn start_then_ticks_walk_the_whole_trace() {
    let mut pb = Playback::new(3);
    let t0 = Instant::now();
    pb.start(t0);
    assert!(pb.is_playing());
    assert_eq!(pb.cursor(), -1);

    // Not due yet: nothing moves.
    assert!(!pb.tick(t0 + Duration::from_millis(1)));
    assert_eq!(pb.cursor(), -1);

    let t1 = t0 + BASE_INTERVAL;
    assert!(pb.tick(t1));
    assert_eq!(pb.current_step(), Some(0));

    let t2 = t1 + BASE_INTERVAL;
    assert!(pb.tick(t2));
    assert_eq!(pb.current_step(), Some(1));

    let t3 = t2 + BASE_INTERVAL;
    assert!(pb.tick(t3));
    assert_eq!(pb.current_step(), Some(2));
    assert_eq!(pb.state(), PlaybackState::AtEnd);

    // The timer is disarmed at the end.
    assert!(!pb.tick(t3 + BASE_INTERVAL * 10));
    assert_eq!(pb.current_step(), Some(2));
}

#[test]
fn pause_retains_the_cursor_and_cancels_the_tick() {
    let mut pb = Playback::new(5);
    let t0 = Instant::now();
    pb.start(t0);
    assert!(pb.tick(t0 + BASE_INTERVAL));
    pb.pause();
    assert_eq!(pb.state(), PlaybackState::Paused);
    assert_eq!(pb.current_step(), Some(0));

    // A long-overdue tick does nothing while paused.
    assert!(!pb.tick(t0 + BASE_INTERVAL * 100));
    assert_eq!(pb.current_step(), Some(0));
}

#[test]
fn resume_only_applies_mid_trace() {
    let mut pb = Playback::new(2);
    let t0 = Instant::now();
    pb.go_to_end();
    pb.resume(t0);
    assert_eq!(pb.state(), PlaybackState::AtEnd);

    pb.go_to(0);
    assert_eq!(pb.state(), PlaybackState::Paused);
    pb.resume(t0);
    assert!(pb.is_playing());
}

#[test]
fn manual_seek_acts_as_a_pause() {
    let mut pb = Playback::new(10);
    let t0 = Instant::now();
    pb.start(t0);
    pb.step_forward();
    assert_eq!(pb.state(), PlaybackState::Paused);
    assert_eq!(pb.current_step(), Some(0));

    // The cancelled tick must not double-apply on top of the seek.
    assert!(!pb.tick(t0 + BASE_INTERVAL * 100));
    assert_eq!(pb.current_step(), Some(0));
}

#[test]
fn seeks_clamp_to_the_trace_bounds() {
    let mut pb = Playback::new(4);
    pb.go_to(1000);
    assert_eq!(pb.cursor(), 3);
    assert_eq!(pb.state(), PlaybackState::AtEnd);

    pb.go_to(-1000);
    assert_eq!(pb.cursor(), -1);
    assert_eq!(pb.state(), PlaybackState::Idle);

    pb.step_back();
    assert_eq!(pb.cursor(), -1);
}

#[test]
fn go_to_is_idempotent() {
    let mut pb = Playback::new(8);
    pb.go_to(3);
    let cursor = pb.cursor();
    let state = pb.state();
    pb.go_to(3);
    assert_eq!(pb.cursor(), cursor);
    assert_eq!(pb.state(), state);
}

#[test]
fn go_to_start_restores_the_pre_start_state() {
    let mut pb = Playback::new(6);
    pb.go_to_end();
    pb.go_to_start();
    assert_eq!(pb.cursor(), -1);
    assert_eq!(pb.current_step(), None);
    assert_eq!(pb.state(), PlaybackState::Idle);
}

#[test]
fn speed_scales_the_interval_without_moving_the_cursor() {
    let mut pb = Playback::new(10);
    let t0 = Instant::now();
    pb.start(t0);
    assert!(pb.tick(t0 + BASE_INTERVAL));
    let cursor = pb.cursor();

    pb.set_speed(4.0);
    assert_eq!(pb.cursor(), cursor);
    assert!(pb.is_playing());
    assert_eq!(pb.interval(), BASE_INTERVAL / 4);

    // At 4x the next tick is due after a quarter interval.
    assert!(pb.tick(t0 + BASE_INTERVAL + BASE_INTERVAL / 4));
    assert_eq!(pb.cursor(), cursor + 1);
}

#[test]
fn invalid_speeds_are_ignored() {
    let mut pb = Playback::new(3);
    pb.set_speed(0.0);
    assert_eq!(pb.speed(), 1.0);
    pb.set_speed(-2.0);
    assert_eq!(pb.speed(), 1.0);
    pb.set_speed(f64::NAN);
    assert_eq!(pb.speed(), 1.0);
}

#[test]
fn speed_ladder_steps_saturate_at_the_ends() {
    let mut pb = Playback::new(3);
    for _ in 0..SPEED_LADDER.len() + 2 {
        pb.speed_up();
    }
    assert_eq!(pb.speed(), *SPEED_LADDER.last().expect("non-empty ladder"));
    for _ in 0..SPEED_LADDER.len() + 2 {
        pb.speed_down();
    }
    assert_eq!(pb.speed(), SPEED_LADDER[0]);
}

#[test]
fn toggle_cycles_play_and_pause() {
    let mut pb = Playback::new(5);
    let t0 = Instant::now();
    pb.toggle(t0);
    assert!(pb.is_playing());
    pb.toggle(t0);
    assert_eq!(pb.state(), PlaybackState::Paused);
    pb.toggle(t0);
    assert!(pb.is_playing());
}

#[test]
fn reset_discards_playback_state() {
    let mut pb = Playback::new(5);
    let t0 = Instant::now();
    pb.start(t0);
    pb.tick(t0 + BASE_INTERVAL);
    pb.set_speed(2.0);
    pb.reset(9);
    assert_eq!(pb.len(), 9);
    assert_eq!(pb.cursor(), -1);
    assert_eq!(pb.state(), PlaybackState::Idle);
    // Speed survives a reset; it is a user preference, not trace state.
    assert_eq!(pb.speed(), 2.0);
}
