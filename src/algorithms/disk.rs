//! Disk-head scheduling trace generators: FCFS, SSTF, and SCAN
//!
//! The disk is a cylinder range `0..cylinders`. One step is emitted per
//! serviced request, recording the head position, the distance travelled
//! for that request, and the cumulative head movement. SCAN sweeps toward
//! the highest cylinder first, visits the edge if any request remains on
//! the far side, then reverses; the edge trip is folded into the movement
//! of the first request after the reversal.

use super::errors::InputError;
use crate::trace::Trace;

/// Most cylinders the visualizer accepts.
pub const MAX_CYLINDERS: u32 = 200;

/// Which disk-scheduling algorithm to trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskKind {
    Fcfs,
    Sstf,
    Scan,
}

impl DiskKind {
    pub fn name(&self) -> &'static str {
        match self {
            DiskKind::Fcfs => "FCFS",
            DiskKind::Sstf => "SSTF",
            DiskKind::Scan => "SCAN",
        }
    }
}

/// One serviced request, with the head state after the seek.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskStep {
    /// Head position after servicing (equals `serviced`).
    pub head: u32,
    /// The request serviced this step.
    pub serviced: u32,
    /// Requests serviced so far, in service order.
    pub order: Vec<u32>,
    /// Requests still pending, in submission order.
    pub pending: Vec<u32>,
    /// Cylinders travelled for this request (includes any edge trip).
    pub moved: u32,
    /// Cumulative head movement.
    pub total_movement: u32,
    pub description: String,
}

fn validate(cylinders: u32, head: u32, requests: &[u32]) -> Result<(), InputError> {
    if cylinders == 0 || cylinders > MAX_CYLINDERS {
        return Err(InputError::CylinderCountOutOfRange {
            got: cylinders,
            max: MAX_CYLINDERS,
        });
    }
    if requests.is_empty() {
        return Err(InputError::NoRequests);
    }
    if head >= cylinders {
        return Err(InputError::CylinderOutOfRange {
            cylinder: head,
            cylinders,
        });
    }
    if let Some(&r) = requests.iter().find(|&&r| r >= cylinders) {
        return Err(InputError::CylinderOutOfRange {
            cylinder: r,
            cylinders,
        });
    }
    Ok(())
}

/// Service `requests` with the chosen algorithm, head starting at `head`.
pub fn disk_trace(
    kind: DiskKind,
    cylinders: u32,
    head: u32,
    requests: &[u32],
) -> Result<Trace<DiskStep>, InputError> {
    validate(cylinders, head, requests)?;

    let order: Vec<(u32, u32)> = match kind {
        DiskKind::Fcfs => requests.iter().map(|&r| (r, 0)).collect(),
        DiskKind::Sstf => sstf_order(head, requests),
        DiskKind::Scan => scan_order(cylinders, head, requests),
    };

    let mut steps = Vec::with_capacity(order.len());
    let mut pos = head;
    let mut total = 0u32;
    let mut serviced: Vec<u32> = Vec::new();
    let mut pending: Vec<u32> = requests.to_vec();
    for (target, detour) in order {
        let moved = pos.abs_diff(target) + 2 * detour;
        total += moved;
        // Remove one occurrence; duplicates are serviced once each.
        if let Some(i) = pending.iter().position(|&r| r == target) {
            pending.remove(i);
        }
        serviced.push(target);
        let description = if detour > 0 {
            format!(
                "Seek {pos} -> {target} via edge: {moved} cylinders (total {total})"
            )
        } else {
            format!("Seek {pos} -> {target}: {moved} cylinders (total {total})")
        };
        pos = target;
        steps.push(DiskStep {
            head: pos,
            serviced: target,
            order: serviced.clone(),
            pending: pending.clone(),
            moved,
            total_movement: total,
            description,
        });
    }
    Ok(Trace::new(steps))
}

/// Shortest-seek-time-first order; ties go to the lower cylinder.
/// Returns `(request, extra_detour)` pairs; SSTF never detours.
fn sstf_order(head: u32, requests: &[u32]) -> Vec<(u32, u32)> {
    let mut pending = requests.to_vec();
    let mut order = Vec::with_capacity(pending.len());
    let mut pos = head;
    while !pending.is_empty() {
        let mut best = 0;
        for (i, &r) in pending.iter().enumerate() {
            let closer = r.abs_diff(pos) < pending[best].abs_diff(pos)
                || (r.abs_diff(pos) == pending[best].abs_diff(pos) && r < pending[best]);
            if closer {
                best = i;
            }
        }
        pos = pending.remove(best);
        order.push((pos, 0));
    }
    order
}

/// SCAN order sweeping upward first. The first request after the reversal
/// carries the detour from the last upward request to the disk edge.
fn scan_order(cylinders: u32, head: u32, requests: &[u32]) -> Vec<(u32, u32)> {
    let mut up: Vec<u32> = requests.iter().copied().filter(|&r| r >= head).collect();
    let mut down: Vec<u32> = requests.iter().copied().filter(|&r| r < head).collect();
    up.sort_unstable();
    down.sort_unstable_by(|a, b| b.cmp(a));

    let edge = cylinders - 1;
    let last_up = up.last().copied().unwrap_or(head);
    let mut order: Vec<(u32, u32)> = up.into_iter().map(|r| (r, 0)).collect();
    let mut down = down.into_iter();
    if let Some(first_down) = down.next() {
        // Head travels last_up -> edge -> first_down; the overshoot past
        // last_up is walked twice, which the caller counts as 2 * detour.
        order.push((first_down, edge - last_up));
        order.extend(down.map(|r| (r, 0)));
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fcfs_services_in_submission_order() {
        let trace = disk_trace(DiskKind::Fcfs, 200, 50, &[60, 40]).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(0).unwrap().serviced, 60);
        assert_eq!(trace.last().unwrap().total_movement, 10 + 20);
    }

    #[test]
    fn sstf_picks_nearest_request() {
        let trace = disk_trace(DiskKind::Sstf, 200, 50, &[80, 55, 10]).unwrap();
        let order: Vec<u32> = trace.iter().map(|s| s.serviced).collect();
        assert_eq!(order, vec![55, 80, 10]);
        assert_eq!(trace.last().unwrap().total_movement, 5 + 25 + 70);
    }

    #[test]
    fn scan_sweeps_up_then_reverses_via_edge() {
        let trace = disk_trace(DiskKind::Scan, 200, 100, &[120, 60, 180]).unwrap();
        let order: Vec<u32> = trace.iter().map(|s| s.serviced).collect();
        assert_eq!(order, vec![120, 180, 60]);
        // 100->120 (20), 120->180 (60), 180->199->60 (19 + 139).
        assert_eq!(trace.last().unwrap().total_movement, 20 + 60 + 19 + 139);
    }

    #[test]
    fn out_of_range_request_is_rejected() {
        let err = disk_trace(DiskKind::Fcfs, 100, 50, &[150]).unwrap_err();
        assert_eq!(
            err,
            InputError::CylinderOutOfRange {
                cylinder: 150,
                cylinders: 100
            }
        );
    }
}
