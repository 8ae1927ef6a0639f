//! Page replacement trace generators: FIFO and LRU
//!
//! One step is emitted per reference in the reference string, recording the
//! frame contents after the reference, whether it hit, which page was
//! evicted on a fault, and the running fault count. LRU recency is tracked
//! with an `FxHashMap` from page to the index of its last use.

use super::errors::InputError;
use crate::trace::Trace;
use rustc_hash::FxHashMap;

/// Most frames the visualizer accepts.
pub const MAX_FRAMES: usize = 10;

/// Which replacement policy to trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingKind {
    Fifo,
    Lru,
}

impl PagingKind {
    pub fn name(&self) -> &'static str {
        match self {
            PagingKind::Fifo => "FIFO",
            PagingKind::Lru => "LRU",
        }
    }
}

/// One processed reference, with the frame contents after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingStep {
    /// The page referenced this step.
    pub reference: u32,
    /// Frame contents after the reference; `None` = still empty.
    pub frames: Vec<Option<u32>>,
    pub hit: bool,
    /// Page evicted on a fault, if any frame had to be reclaimed.
    pub evicted: Option<u32>,
    /// Faults so far, including this step.
    pub faults: usize,
    pub description: String,
}

/// Replay `references` against `frame_count` frames under the chosen policy.
pub fn paging_trace(
    kind: PagingKind,
    frame_count: usize,
    references: &[u32],
) -> Result<Trace<PagingStep>, InputError> {
    if frame_count == 0 || frame_count > MAX_FRAMES {
        return Err(InputError::FrameCountOutOfRange {
            got: frame_count,
            max: MAX_FRAMES,
        });
    }
    if references.is_empty() {
        return Err(InputError::EmptyReferenceString);
    }

    let mut frames: Vec<Option<u32>> = vec![None; frame_count];
    let mut last_used: FxHashMap<u32, usize> = FxHashMap::default();
    let mut fifo_next = 0usize;
    let mut faults = 0usize;
    let mut steps = Vec::with_capacity(references.len());

    for (i, &page) in references.iter().enumerate() {
        let hit = frames.iter().any(|f| *f == Some(page));
        let mut evicted = None;
        if hit {
            last_used.insert(page, i);
        } else {
            faults += 1;
            let slot = if let Some(empty) = frames.iter().position(|f| f.is_none()) {
                empty
            } else {
                match kind {
                    PagingKind::Fifo => {
                        let slot = fifo_next;
                        fifo_next = (fifo_next + 1) % frame_count;
                        slot
                    }
                    PagingKind::Lru => lru_victim(&frames, &last_used),
                }
            };
            evicted = frames[slot];
            if let Some(old) = evicted {
                last_used.remove(&old);
            }
            frames[slot] = Some(page);
            last_used.insert(page, i);
            if kind == PagingKind::Fifo && evicted.is_none() {
                // Filling an empty frame advances the FIFO hand too.
                fifo_next = (fifo_next + 1) % frame_count;
            }
        }
        let description = match (hit, evicted) {
            (true, _) => format!("Reference {page}: hit"),
            (false, Some(old)) => {
                format!("Reference {page}: fault, evict page {old} ({faults} faults)")
            }
            (false, None) => format!("Reference {page}: fault, fill empty frame ({faults} faults)"),
        };
        steps.push(PagingStep {
            reference: page,
            frames: frames.clone(),
            hit,
            evicted,
            faults,
            description,
        });
    }
    Ok(Trace::new(steps))
}

/// The occupied frame whose page was used longest ago.
fn lru_victim(frames: &[Option<u32>], last_used: &FxHashMap<u32, usize>) -> usize {
    let mut victim = 0;
    let mut oldest = usize::MAX;
    for (slot, frame) in frames.iter().enumerate() {
        if let Some(page) = frame {
            let used = last_used.get(page).copied().unwrap_or(0);
            if used < oldest {
                oldest = used;
                victim = slot;
            }
        }
    }
    victim
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_evicts_oldest_arrival() {
        // Classic 3-frame FIFO example prefix.
        let trace = paging_trace(PagingKind::Fifo, 3, &[7, 0, 1, 2, 0]).unwrap();
        let fourth = trace.get(3).unwrap();
        assert!(!fourth.hit);
        assert_eq!(fourth.evicted, Some(7));
        let fifth = trace.get(4).unwrap();
        assert!(fifth.hit);
        assert_eq!(fifth.faults, 4);
    }

    #[test]
    fn lru_evicts_least_recently_used() {
        let trace = paging_trace(PagingKind::Lru, 3, &[1, 2, 3, 1, 4]).unwrap();
        // At the reference to 4, page 2 is the least recently used.
        let last = trace.last().unwrap();
        assert_eq!(last.evicted, Some(2));
        assert_eq!(last.faults, 4);
    }

    #[test]
    fn frame_count_bounds_are_enforced() {
        assert!(paging_trace(PagingKind::Fifo, 0, &[1]).is_err());
        assert!(paging_trace(PagingKind::Fifo, MAX_FRAMES + 1, &[1]).is_err());
    }
}
