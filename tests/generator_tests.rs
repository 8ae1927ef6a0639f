use algoscope::algorithms::cpu::{cpu_trace, CpuKind, Process};
use algoscope::algorithms::disk::{disk_trace, DiskKind};
use algoscope::algorithms::errors::InputError;
use algoscope::algorithms::hanoi::hanoi_trace;
use algoscope::algorithms::paging::{paging_trace, PagingKind};
use algoscope::algorithms::search::{binary_search_trace, linear_search_trace, ProbeOutcome};
use algoscope::algorithms::sort::{sort_trace, SortKind};
use algoscope::algorithms::{random_array, random_sorted_array};

fn process(name: &str, arrival: u32, burst: u32) -> Process {
    Process {
        name: name.to_string(),
        arrival,
        burst,
    }
}

#[test]
fn binary_search_finds_nine_in_one_probe() {
    let trace = binary_search_trace(&[1, 5, 9, 13, 21], 9).expect("valid input");
    assert_eq!(trace.len(), 1);
    let step = trace.get(0).expect("step 0");
    assert_eq!(step.probe, 2);
    assert_eq!(step.outcome, ProbeOutcome::Match);
    assert_eq!(step.found, Some(2));
}

#[test]
fn binary_search_narrows_the_window() {
    let array = [2, 4, 6, 8, 10, 12, 14];
    let trace = binary_search_trace(&array, 14).expect("valid input");
    // 14 sits at the right edge: every probe moves right.
    let mut prev_low = 0;
    for step in &trace {
        assert!(step.low >= prev_low);
        assert!(step.low <= step.high);
        prev_low = step.low;
    }
    assert_eq!(trace.last().expect("non-empty").found, Some(6));
}

#[test]
fn linear_search_probe_count_matches_position() {
    let array = [10, 20, 30, 40];
    let trace = linear_search_trace(&array, 30).expect("valid input");
    assert_eq!(trace.len(), 3);
    assert_eq!(trace.last().expect("non-empty").found, Some(2));
}

#[test]
fn search_rejects_empty_and_oversized_arrays() {
    assert_eq!(
        linear_search_trace(&[], 1),
        Err(InputError::EmptyArray)
    );
    let big: Vec<i64> = (0..100).collect();
    assert!(matches!(
        binary_search_trace(&big, 5),
        Err(InputError::ArrayTooLarge { got: 100, .. })
    ));
}

#[test]
fn random_sorted_array_is_sorted_and_seeded() {
    let a = random_sorted_array(20, 7);
    let b = random_sorted_array(20, 7);
    assert_eq!(a, b);
    assert!(a.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn sorts_agree_on_the_final_ordering() {
    let input = random_array(25, 99);
    let mut expected = input.clone();
    expected.sort();
    for kind in [SortKind::Bubble, SortKind::Selection, SortKind::Insertion] {
        let trace = sort_trace(kind, &input).expect("valid input");
        assert_eq!(trace.last().expect("non-empty").array, expected);
    }
}

#[test]
fn sort_steps_preserve_the_multiset() {
    let input = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let trace = sort_trace(SortKind::Insertion, &input).expect("valid input");
    let mut reference = input.clone();
    reference.sort();
    for step in &trace {
        let mut snapshot = step.array.clone();
        snapshot.sort();
        assert_eq!(snapshot, reference);
    }
}

#[test]
fn hanoi_three_disks_matches_the_classic_solution() {
    let trace = hanoi_trace(3).expect("valid input");
    assert_eq!(trace.len(), 7);

    let first = trace.get(0).expect("step 0");
    assert_eq!(first.disk, 1);
    assert_eq!(first.from, 0);
    assert_eq!(first.to, 2);

    let last = trace.last().expect("non-empty");
    assert!(last.pegs[0].is_empty());
    assert!(last.pegs[1].is_empty());
    assert_eq!(last.pegs[2], vec![3, 2, 1]);
}

#[test]
fn hanoi_never_places_a_larger_disk_on_a_smaller_one() {
    let trace = hanoi_trace(5).expect("valid input");
    for step in &trace {
        for peg in &step.pegs {
            assert!(peg.windows(2).all(|w| w[0] > w[1]));
        }
    }
}

#[test]
fn round_robin_zero_quantum_fails_fast() {
    let err = cpu_trace(
        CpuKind::RoundRobin { quantum: 0 },
        &[process("P1", 0, 3)],
    )
    .expect_err("zero quantum must be rejected");
    assert_eq!(err.to_string(), "Time quantum must be a positive integer");
}

#[test]
fn empty_process_list_fails_fast() {
    assert_eq!(cpu_trace(CpuKind::Fcfs, &[]), Err(InputError::NoProcesses));
}

#[test]
fn gantt_segments_are_contiguous_and_ordered() {
    let processes = [
        process("P1", 0, 5),
        process("P2", 1, 3),
        process("P3", 2, 8),
    ];
    for kind in [CpuKind::Fcfs, CpuKind::RoundRobin { quantum: 2 }] {
        let trace = cpu_trace(kind, &processes).expect("valid input");
        let last = trace.last().expect("non-empty");
        let mut t = 0;
        for seg in &last.gantt {
            assert_eq!(seg.start, t, "{}", kind.name());
            assert!(seg.end > seg.start);
            t = seg.end;
        }
        // All burst time accounted for.
        assert_eq!(t, 16);
        assert!(last.remaining.iter().all(|&r| r == 0));
    }
}

#[test]
fn cpu_metrics_appear_only_on_the_terminal_step() {
    let trace = cpu_trace(CpuKind::Fcfs, &[process("P1", 0, 2), process("P2", 0, 2)])
        .expect("valid input");
    for (i, step) in trace.iter().enumerate() {
        assert_eq!(step.metrics.is_some(), i == trace.len() - 1);
    }
}

#[test]
fn sstf_total_movement_beats_fcfs_on_the_textbook_queue() {
    let requests = [98, 183, 37, 122, 14, 124, 65, 67];
    let fcfs = disk_trace(DiskKind::Fcfs, 200, 53, &requests).expect("valid input");
    let sstf = disk_trace(DiskKind::Sstf, 200, 53, &requests).expect("valid input");
    let fcfs_total = fcfs.last().expect("non-empty").total_movement;
    let sstf_total = sstf.last().expect("non-empty").total_movement;
    assert_eq!(fcfs_total, 640);
    assert_eq!(sstf_total, 236);
}

#[test]
fn scan_services_every_request_exactly_once() {
    let requests = [98, 183, 37, 122, 14, 124, 65, 67];
    let trace = disk_trace(DiskKind::Scan, 200, 53, &requests).expect("valid input");
    assert_eq!(trace.len(), requests.len());
    let mut serviced: Vec<u32> = trace.iter().map(|s| s.serviced).collect();
    serviced.sort_unstable();
    let mut expected = requests.to_vec();
    expected.sort_unstable();
    assert_eq!(serviced, expected);
    assert!(trace.last().expect("non-empty").pending.is_empty());
}

#[test]
fn disk_rejects_out_of_range_head_and_requests() {
    assert!(disk_trace(DiskKind::Fcfs, 100, 100, &[10]).is_err());
    assert!(disk_trace(DiskKind::Sstf, 100, 50, &[100]).is_err());
}

#[test]
fn fifo_belady_reference_string_fault_counts() {
    // The classic 3-frame example from OS textbooks.
    let refs = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];
    let trace = paging_trace(PagingKind::Fifo, 3, &refs).expect("valid input");
    assert_eq!(trace.last().expect("non-empty").faults, 15);
}

#[test]
fn lru_beats_fifo_on_the_classic_string() {
    let refs = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];
    let trace = paging_trace(PagingKind::Lru, 3, &refs).expect("valid input");
    assert_eq!(trace.last().expect("non-empty").faults, 12);
}

#[test]
fn paging_fault_count_is_monotonic() {
    let refs = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
    let trace = paging_trace(PagingKind::Fifo, 3, &refs).expect("valid input");
    let mut prev = 0;
    for step in &trace {
        assert!(step.faults >= prev);
        assert!(step.faults <= prev + 1);
        prev = step.faults;
    }
}
