//! Pure trace generators for each visualizer
//!
//! Every generator follows the same contract: validate the inputs, run the
//! algorithm to completion, and emit one immutable snapshot per observable
//! decision into a [`crate::trace::Trace`]. Generators are deterministic
//! and side-effect free; any randomness (random input arrays, reference
//! strings) happens strictly before trace generation through the seeded
//! helpers in this module.
//!
//! Each snapshot clones the working state before recording it, so earlier
//! steps stay valid while the algorithm keeps mutating.
//!
//! # Generators
//!
//! - [`search`]: linear and binary search over an array
//! - [`sort`]: bubble, selection, and insertion sort
//! - [`hanoi`]: Tower of Hanoi solver
//! - [`cpu`]: FCFS and Round Robin CPU scheduling with a Gantt timeline
//! - [`disk`]: FCFS, SSTF, and SCAN disk-head scheduling
//! - [`paging`]: FIFO and LRU page replacement

pub mod cpu;
pub mod disk;
pub mod errors;
pub mod hanoi;
pub mod paging;
pub mod search;
pub mod sort;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest array the search and sort visualizers accept.
pub const MAX_ARRAY_LEN: usize = 40;

/// Generate a random array of `len` values in `1..=99` from an explicit seed.
pub fn random_array(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(1..=99)).collect()
}

/// Generate a random sorted array with distinct values, for binary search.
pub fn random_sorted_array(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(len);
    let mut next = 0i64;
    for _ in 0..len {
        next += rng.gen_range(1..=9);
        values.push(next);
    }
    values
}

/// Generate a random page reference string over `0..pages`.
pub fn random_reference_string(len: usize, pages: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..pages.max(1))).collect()
}
