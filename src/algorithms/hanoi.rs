//! Tower of Hanoi trace generator
//!
//! The recursive solver emits one step per move, so the trace for `n` disks
//! has exactly `2^n - 1` steps. Disks are numbered 1 (smallest) to `n`
//! (largest); each peg is stored bottom-to-top. The cap of [`MAX_DISKS`]
//! keeps the longest trace at 255 steps.

use super::errors::InputError;
use crate::trace::Trace;

/// Most disks the visualizer accepts.
pub const MAX_DISKS: usize = 8;

/// One move of the solution, with the resulting peg configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HanoiStep {
    /// Pegs after the move, each bottom-to-top.
    pub pegs: [Vec<u32>; 3],
    /// Disk moved this step, 1 = smallest.
    pub disk: u32,
    pub from: usize,
    pub to: usize,
    /// 1-based move number.
    pub move_number: usize,
    pub description: String,
}

/// Solve the puzzle for `disks` disks, moving peg 0 to peg 2.
pub fn hanoi_trace(disks: usize) -> Result<Trace<HanoiStep>, InputError> {
    if disks == 0 || disks > MAX_DISKS {
        return Err(InputError::DiskCountOutOfRange {
            got: disks,
            max: MAX_DISKS,
        });
    }

    let mut pegs: [Vec<u32>; 3] = [
        (1..=disks as u32).rev().collect(),
        Vec::new(),
        Vec::new(),
    ];
    let mut steps = Vec::with_capacity((1usize << disks) - 1);
    solve(disks as u32, 0, 2, 1, &mut pegs, &mut steps);
    Ok(Trace::new(steps))
}

fn solve(
    n: u32,
    from: usize,
    to: usize,
    via: usize,
    pegs: &mut [Vec<u32>; 3],
    steps: &mut Vec<HanoiStep>,
) {
    if n == 0 {
        return;
    }
    solve(n - 1, from, via, to, pegs, steps);
    let disk = pegs[from].pop().unwrap_or(n);
    pegs[to].push(disk);
    let move_number = steps.len() + 1;
    steps.push(HanoiStep {
        pegs: pegs.clone(),
        disk,
        from,
        to,
        move_number,
        description: format!("Move disk {disk} from peg {from} to peg {to}"),
    });
    solve(n - 1, via, to, from, pegs, steps);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_disks_take_seven_moves() {
        let trace = hanoi_trace(3).unwrap();
        assert_eq!(trace.len(), 7);

        let first = trace.get(0).unwrap();
        assert_eq!((first.disk, first.from, first.to), (1, 0, 2));

        let last = trace.last().unwrap();
        assert_eq!(last.pegs[0], Vec::<u32>::new());
        assert_eq!(last.pegs[1], Vec::<u32>::new());
        assert_eq!(last.pegs[2], vec![3, 2, 1]);
    }

    #[test]
    fn trace_length_is_exact() {
        for n in 1..=MAX_DISKS {
            let trace = hanoi_trace(n).unwrap();
            assert_eq!(trace.len(), (1 << n) - 1);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(hanoi_trace(0).is_err());
        assert!(hanoi_trace(MAX_DISKS + 1).is_err());
    }
}
