//! # Introduction
//!
//! algoscope runs a classic algorithm to completion, capturing a snapshot
//! of the full visualization state at every step.  The snapshot sequence
//! is then navigated forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Inputs → Trace Generator → Trace → Playback Controller → TUI
//! ```
//!
//! 1. [`algorithms`] — pure, deterministic trace generators, one per
//!    visualizer. Inputs are validated first; invalid input produces an
//!    [`algorithms::errors::InputError`] and no trace.
//! 2. [`trace`] — the immutable, fully-materialized step sequence.
//! 3. [`playback`] — the VCR state machine (play/pause/seek/speed) over a
//!    trace; cooperative, timer-by-`Instant`-deadline.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Visualizers
//!
//! Linear and binary search, bubble/selection/insertion sort, Tower of
//! Hanoi, FCFS and Round Robin CPU scheduling, FCFS/SSTF/SCAN disk
//! scheduling, FIFO and LRU page replacement.

pub mod algorithms;
pub mod playback;
pub mod trace;
pub mod ui;
