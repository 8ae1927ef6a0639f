//! Linear and binary search trace generators
//!
//! Both generators emit one step per probed index. A successful probe
//! records the found index on its own step; an unsuccessful search ends on
//! the last probe with `found` still `None`. Binary search requires the
//! input to be sorted ascending and probes O(log n) indices; linear search
//! scans left to right in O(n).

use super::errors::InputError;
use super::MAX_ARRAY_LEN;
use crate::trace::Trace;

/// What a probe found at its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The probed value equals the target.
    Match,
    /// The probed value is less than the target.
    Less,
    /// The probed value is greater than the target.
    Greater,
}

/// One probe of the search, with the full state needed to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStep {
    /// Array snapshot at this step (searches never mutate it, but each step
    /// stays self-contained).
    pub array: Vec<i64>,
    /// Inclusive window still under consideration. Linear search keeps the
    /// whole array; binary search narrows it per probe.
    pub low: usize,
    pub high: usize,
    /// Index probed at this step.
    pub probe: usize,
    pub outcome: ProbeOutcome,
    /// Set on the step whose probe matched the target.
    pub found: Option<usize>,
    pub description: String,
}

fn validate(array: &[i64]) -> Result<(), InputError> {
    if array.is_empty() {
        return Err(InputError::EmptyArray);
    }
    if array.len() > MAX_ARRAY_LEN {
        return Err(InputError::ArrayTooLarge {
            got: array.len(),
            max: MAX_ARRAY_LEN,
        });
    }
    Ok(())
}

/// Run linear search and capture its probe sequence.
pub fn linear_search_trace(array: &[i64], target: i64) -> Result<Trace<SearchStep>, InputError> {
    validate(array)?;
    let mut steps = Vec::new();
    for (i, &value) in array.iter().enumerate() {
        if value == target {
            steps.push(SearchStep {
                array: array.to_vec(),
                low: 0,
                high: array.len() - 1,
                probe: i,
                outcome: ProbeOutcome::Match,
                found: Some(i),
                description: format!("a[{i}] = {value} matches {target}: found at index {i}"),
            });
            return Ok(Trace::new(steps));
        }
        let outcome = if value < target {
            ProbeOutcome::Less
        } else {
            ProbeOutcome::Greater
        };
        steps.push(SearchStep {
            array: array.to_vec(),
            low: 0,
            high: array.len() - 1,
            probe: i,
            outcome,
            found: None,
            description: format!("a[{i}] = {value} does not match {target}, move on"),
        });
    }
    if let Some(last) = steps.last_mut() {
        last.description = format!("a[{}] was the last element: {target} is not present", last.probe);
    }
    Ok(Trace::new(steps))
}

/// Run binary search and capture its probe sequence.
pub fn binary_search_trace(array: &[i64], target: i64) -> Result<Trace<SearchStep>, InputError> {
    validate(array)?;
    if array.windows(2).any(|w| w[0] > w[1]) {
        return Err(InputError::UnsortedArray);
    }

    let mut steps = Vec::new();
    let mut low = 0usize;
    let mut high = array.len() - 1;
    loop {
        let mid = low + (high - low) / 2;
        let value = array[mid];
        if value == target {
            steps.push(SearchStep {
                array: array.to_vec(),
                low,
                high,
                probe: mid,
                outcome: ProbeOutcome::Match,
                found: Some(mid),
                description: format!("mid = {mid}: a[{mid}] = {value} matches {target}, found"),
            });
            return Ok(Trace::new(steps));
        }
        let (outcome, description) = if value < target {
            (
                ProbeOutcome::Less,
                format!("mid = {mid}: a[{mid}] = {value} < {target}, search right half"),
            )
        } else {
            (
                ProbeOutcome::Greater,
                format!("mid = {mid}: a[{mid}] = {value} > {target}, search left half"),
            )
        };
        steps.push(SearchStep {
            array: array.to_vec(),
            low,
            high,
            probe: mid,
            outcome,
            found: None,
            description,
        });
        if value < target {
            if mid == high {
                break;
            }
            low = mid + 1;
        } else {
            if mid == low {
                break;
            }
            high = mid - 1;
        }
        if low > high {
            break;
        }
    }
    if let Some(last) = steps.last_mut() {
        last.description = format!("Window is empty: {target} is not present");
    }
    Ok(Trace::new(steps))
}
