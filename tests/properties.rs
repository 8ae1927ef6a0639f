use algoscope::algorithms::paging::{paging_trace, PagingKind};
use algoscope::algorithms::search::binary_search_trace;
use algoscope::algorithms::sort::{sort_trace, SortKind};
use algoscope::playback::{Playback, PlaybackState};
use proptest::prelude::*;

proptest! {
    /// Trace generation is deterministic: same input, same step sequence.
    #[test]
    fn sort_traces_are_deterministic(
        values in prop::collection::vec(-50i64..50, 1..=40),
        kind_idx in 0usize..3,
    ) {
        let kind = [SortKind::Bubble, SortKind::Selection, SortKind::Insertion][kind_idx];
        let a = sort_trace(kind, &values).expect("valid input");
        let b = sort_trace(kind, &values).expect("valid input");
        prop_assert_eq!(a, b);
    }

    /// Binary search over any sorted array either finds the target's
    /// position or probes without ever widening the window.
    #[test]
    fn binary_search_windows_only_shrink(
        mut values in prop::collection::vec(0i64..1000, 1..=40),
        target in 0i64..1000,
    ) {
        values.sort();
        let trace = binary_search_trace(&values, target).expect("valid input");
        prop_assert!(!trace.is_empty());
        let mut prev_width = values.len();
        for step in &trace {
            let width = step.high - step.low + 1;
            prop_assert!(width <= prev_width);
            prev_width = width;
        }
        let found = trace.last().expect("non-empty").found;
        match found {
            Some(i) => prop_assert_eq!(values[i], target),
            None => prop_assert!(!values.contains(&target)),
        }
    }

    /// Each paging step is a self-contained snapshot: replaying a prefix
    /// and jumping straight to its last step agree.
    #[test]
    fn paging_snapshots_are_self_contained(
        refs in prop::collection::vec(0u32..8, 1..=30),
        frames in 1usize..=4,
    ) {
        let trace = paging_trace(PagingKind::Lru, frames, &refs).expect("valid input");
        for k in 0..trace.len() {
            let prefix = paging_trace(PagingKind::Lru, frames, &refs[..=k]).expect("valid input");
            prop_assert_eq!(prefix.get(k), trace.get(k));
        }
    }

    /// `go_to` clamps to `[-1, len-1]` and is idempotent.
    #[test]
    fn go_to_clamps_and_is_idempotent(len in 0usize..100, target in -200isize..200) {
        let mut pb = Playback::new(len);
        pb.go_to(target);
        let cursor = pb.cursor();
        prop_assert!(cursor >= -1);
        prop_assert!(cursor <= len as isize - 1 || cursor == -1);
        let state = pb.state();
        pb.go_to(target);
        prop_assert_eq!(pb.cursor(), cursor);
        prop_assert_eq!(pb.state(), state);
    }

    /// Any sequence of manual seeks keeps the state machine consistent
    /// with the cursor position.
    #[test]
    fn seek_sequences_keep_state_consistent(
        len in 1usize..50,
        seeks in prop::collection::vec(-60isize..60, 0..20),
    ) {
        let mut pb = Playback::new(len);
        for s in seeks {
            pb.go_to(s);
            match pb.state() {
                PlaybackState::Idle => prop_assert_eq!(pb.cursor(), -1),
                PlaybackState::AtEnd => prop_assert_eq!(pb.cursor(), len as isize - 1),
                PlaybackState::Paused => {
                    prop_assert!(pb.cursor() >= 0);
                    prop_assert!(pb.cursor() < len as isize - 1);
                }
                PlaybackState::Playing => prop_assert!(false, "seeks never start playback"),
            }
        }
    }
}
