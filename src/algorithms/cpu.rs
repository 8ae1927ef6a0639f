//! CPU scheduling trace generators: FCFS and Round Robin
//!
//! One step is emitted per scheduling decision (a slice of CPU time given
//! to a process, or an idle gap while waiting for the next arrival). Each
//! step snapshots the Gantt timeline built so far, the ready queue, and
//! the remaining burst of every process. The terminal step additionally
//! carries per-process completion, turnaround, and waiting times.

use super::errors::InputError;
use crate::trace::Trace;
use std::collections::VecDeque;

/// Most processes the visualizer accepts.
pub const MAX_PROCESSES: usize = 10;

/// A process submitted to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub name: String,
    pub arrival: u32,
    pub burst: u32,
}

/// Which scheduling algorithm to trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuKind {
    Fcfs,
    RoundRobin { quantum: u32 },
}

impl CpuKind {
    pub fn name(&self) -> &'static str {
        match self {
            CpuKind::Fcfs => "FCFS",
            CpuKind::RoundRobin { .. } => "Round Robin",
        }
    }
}

/// One interval on the Gantt timeline. `process` is `None` for idle time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttSegment {
    pub process: Option<usize>,
    pub start: u32,
    pub end: u32,
}

/// Final accounting for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub completion: u32,
    pub turnaround: u32,
    pub waiting: u32,
}

/// One scheduling decision, with the full timeline state so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuStep {
    pub gantt: Vec<GanttSegment>,
    /// Simulation clock after this decision.
    pub time: u32,
    /// Process indices waiting in the ready queue, front first.
    pub ready: Vec<usize>,
    /// Remaining burst per process, indexed like the input list.
    pub remaining: Vec<u32>,
    /// Per-process metrics, present on the terminal step only.
    pub metrics: Option<Vec<ProcessMetrics>>,
    pub description: String,
}

fn validate(processes: &[Process], kind: CpuKind) -> Result<(), InputError> {
    if processes.is_empty() {
        return Err(InputError::NoProcesses);
    }
    if processes.len() > MAX_PROCESSES {
        return Err(InputError::TooManyProcesses {
            got: processes.len(),
            max: MAX_PROCESSES,
        });
    }
    if let Some(p) = processes.iter().find(|p| p.burst == 0) {
        return Err(InputError::ZeroBurstTime {
            name: p.name.clone(),
        });
    }
    if let CpuKind::RoundRobin { quantum } = kind {
        if quantum == 0 {
            return Err(InputError::InvalidTimeQuantum);
        }
    }
    Ok(())
}

/// Run the chosen scheduler over `processes` and capture every decision.
pub fn cpu_trace(kind: CpuKind, processes: &[Process]) -> Result<Trace<CpuStep>, InputError> {
    validate(processes, kind)?;
    let steps = match kind {
        CpuKind::Fcfs => fcfs(processes),
        CpuKind::RoundRobin { quantum } => round_robin(processes, quantum),
    };
    Ok(Trace::new(steps))
}

struct Sim<'a> {
    processes: &'a [Process],
    gantt: Vec<GanttSegment>,
    remaining: Vec<u32>,
    completion: Vec<Option<u32>>,
    time: u32,
    steps: Vec<CpuStep>,
}

impl<'a> Sim<'a> {
    fn new(processes: &'a [Process]) -> Self {
        Sim {
            processes,
            gantt: Vec::new(),
            remaining: processes.iter().map(|p| p.burst).collect(),
            completion: vec![None; processes.len()],
            time: 0,
            steps: Vec::new(),
        }
    }

    fn record(&mut self, ready: Vec<usize>, description: String) {
        self.steps.push(CpuStep {
            gantt: self.gantt.clone(),
            time: self.time,
            ready,
            remaining: self.remaining.clone(),
            metrics: None,
            description,
        });
    }

    fn idle_until(&mut self, t: u32, ready: Vec<usize>) {
        self.gantt.push(GanttSegment {
            process: None,
            start: self.time,
            end: t,
        });
        let description = format!("CPU idle from t={} to t={}", self.time, t);
        self.time = t;
        self.record(ready, description);
    }

    fn run_slice(&mut self, idx: usize, span: u32, ready: Vec<usize>) {
        let start = self.time;
        self.time += span;
        self.remaining[idx] -= span;
        self.gantt.push(GanttSegment {
            process: Some(idx),
            start,
            end: self.time,
        });
        let name = &self.processes[idx].name;
        let description = if self.remaining[idx] == 0 {
            self.completion[idx] = Some(self.time);
            format!("{name} runs t={start}..{}: finished", self.time)
        } else {
            format!(
                "{name} runs t={start}..{}: {} burst left",
                self.time, self.remaining[idx]
            )
        };
        self.record(ready, description);
    }

    fn finish(mut self) -> Vec<CpuStep> {
        let metrics: Vec<ProcessMetrics> = self
            .processes
            .iter()
            .zip(&self.completion)
            .map(|(p, c)| {
                let completion = c.unwrap_or(self.time);
                let turnaround = completion - p.arrival;
                ProcessMetrics {
                    completion,
                    turnaround,
                    waiting: turnaround - p.burst,
                }
            })
            .collect();
        if let Some(last) = self.steps.last_mut() {
            last.metrics = Some(metrics);
            last.description.push_str("; all processes complete");
        }
        self.steps
    }
}

fn fcfs(processes: &[Process]) -> Vec<CpuStep> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| (processes[i].arrival, i));

    let mut sim = Sim::new(processes);
    for (pos, &idx) in order.iter().enumerate() {
        if processes[idx].arrival > sim.time {
            let arrival = processes[idx].arrival;
            sim.idle_until(arrival, vec![idx]);
        }
        // The ready queue is snapshotted at slice end, so it includes
        // processes that arrive while this slice runs.
        let end = sim.time + processes[idx].burst;
        let pending: Vec<usize> = order[pos + 1..]
            .iter()
            .copied()
            .filter(|&j| processes[j].arrival <= end)
            .collect();
        sim.run_slice(idx, processes[idx].burst, pending);
    }
    sim.finish()
}

fn round_robin(processes: &[Process], quantum: u32) -> Vec<CpuStep> {
    let mut arrivals: Vec<usize> = (0..processes.len()).collect();
    arrivals.sort_by_key(|&i| (processes[i].arrival, i));
    let mut arrivals: VecDeque<usize> = arrivals.into();

    let mut sim = Sim::new(processes);
    let mut queue: VecDeque<usize> = VecDeque::new();

    // Move every process that has arrived by time t into the ready queue.
    let admit = |t: u32, arrivals: &mut VecDeque<usize>, queue: &mut VecDeque<usize>| {
        while arrivals
            .front()
            .is_some_and(|&i| processes[i].arrival <= t)
        {
            let i = arrivals.pop_front().unwrap_or_default();
            queue.push_back(i);
        }
    };

    admit(sim.time, &mut arrivals, &mut queue);
    while !queue.is_empty() || !arrivals.is_empty() {
        let Some(idx) = queue.pop_front() else {
            // Queue drained but processes are still due: jump to the next arrival.
            let next = arrivals
                .front()
                .map(|&i| processes[i].arrival)
                .unwrap_or(sim.time);
            sim.idle_until(next, Vec::new());
            admit(sim.time, &mut arrivals, &mut queue);
            continue;
        };
        let span = quantum.min(sim.remaining[idx]);
        let end = sim.time + span;
        // Arrivals during the slice enter the queue before the preempted
        // process re-joins at the back.
        admit(end, &mut arrivals, &mut queue);
        let will_rejoin = sim.remaining[idx] > span;
        let mut ready: Vec<usize> = queue.iter().copied().collect();
        if will_rejoin {
            ready.push(idx);
        }
        sim.run_slice(idx, span, ready);
        if will_rejoin {
            queue.push_back(idx);
        }
    }
    sim.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str, arrival: u32, burst: u32) -> Process {
        Process {
            name: name.to_string(),
            arrival,
            burst,
        }
    }

    #[test]
    fn zero_quantum_is_rejected() {
        let err = cpu_trace(CpuKind::RoundRobin { quantum: 0 }, &[p("P1", 0, 3)]).unwrap_err();
        assert_eq!(err, InputError::InvalidTimeQuantum);
        assert_eq!(err.to_string(), "Time quantum must be a positive integer");
    }

    #[test]
    fn fcfs_runs_in_arrival_order() {
        let trace = cpu_trace(CpuKind::Fcfs, &[p("P1", 0, 4), p("P2", 1, 3)]).unwrap();
        let last = trace.last().unwrap();
        assert_eq!(last.time, 7);
        let metrics = last.metrics.as_ref().unwrap();
        assert_eq!(metrics[0].completion, 4);
        assert_eq!(metrics[1].completion, 7);
        assert_eq!(metrics[1].waiting, 3);
    }

    #[test]
    fn round_robin_interleaves_with_quantum() {
        let trace =
            cpu_trace(CpuKind::RoundRobin { quantum: 2 }, &[p("P1", 0, 5), p("P2", 0, 3)]).unwrap();
        let last = trace.last().unwrap();
        // P1 0..2, P2 2..4, P1 4..6, P2 6..7, P1 7..8
        assert_eq!(last.time, 8);
        let gantt: Vec<(Option<usize>, u32, u32)> = last
            .gantt
            .iter()
            .map(|s| (s.process, s.start, s.end))
            .collect();
        assert_eq!(
            gantt,
            vec![
                (Some(0), 0, 2),
                (Some(1), 2, 4),
                (Some(0), 4, 6),
                (Some(1), 6, 7),
                (Some(0), 7, 8),
            ]
        );
    }

    #[test]
    fn fcfs_ready_queue_sees_arrivals_during_a_slice() {
        // P2 arrives at t=1 while P1's slice runs to t=5; the recorded
        // step carries time 5, so P2 must already be waiting in it.
        let trace = cpu_trace(CpuKind::Fcfs, &[p("P1", 0, 5), p("P2", 1, 3)]).unwrap();
        let first = trace.get(0).unwrap();
        assert_eq!(first.time, 5);
        assert_eq!(first.ready, vec![1]);
    }

    #[test]
    fn idle_gap_appears_on_late_arrival() {
        let trace = cpu_trace(CpuKind::Fcfs, &[p("P1", 3, 2)]).unwrap();
        let first = trace.get(0).unwrap();
        assert_eq!(first.gantt[0].process, None);
        assert_eq!((first.gantt[0].start, first.gantt[0].end), (0, 3));
    }
}
