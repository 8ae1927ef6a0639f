//! Sorting trace generators: bubble, selection, and insertion sort
//!
//! One step is emitted per comparison (carrying a `swapped` flag when the
//! comparison triggered a swap), plus a terminal step showing the fully
//! sorted array. Each step clones the working array, so seeking backward
//! always renders the exact intermediate ordering.

use super::errors::InputError;
use super::MAX_ARRAY_LEN;
use crate::trace::Trace;

/// Which sorting algorithm to trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Bubble,
    Selection,
    Insertion,
}

impl SortKind {
    pub fn name(&self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble sort",
            SortKind::Selection => "Selection sort",
            SortKind::Insertion => "Insertion sort",
        }
    }
}

/// One comparison (or the terminal state) of a sorting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortStep {
    /// Array snapshot after this step's effect (post-swap if `swapped`).
    pub array: Vec<i64>,
    /// The pair of indices compared, `None` on the terminal step.
    pub compared: Option<(usize, usize)>,
    /// Whether this comparison swapped its pair.
    pub swapped: bool,
    /// Indices below this are settled (selection sort's sorted head,
    /// insertion sort's sorted prefix).
    pub settled_prefix: usize,
    /// Indices at or above this are settled (bubble sort's sorted tail).
    pub settled_suffix: usize,
    pub description: String,
}

/// Run the chosen sort and capture every comparison.
pub fn sort_trace(kind: SortKind, array: &[i64]) -> Result<Trace<SortStep>, InputError> {
    if array.is_empty() {
        return Err(InputError::EmptyArray);
    }
    if array.len() > MAX_ARRAY_LEN {
        return Err(InputError::ArrayTooLarge {
            got: array.len(),
            max: MAX_ARRAY_LEN,
        });
    }
    let steps = match kind {
        SortKind::Bubble => bubble(array.to_vec()),
        SortKind::Selection => selection(array.to_vec()),
        SortKind::Insertion => insertion(array.to_vec()),
    };
    Ok(Trace::new(steps))
}

fn terminal_step(array: Vec<i64>) -> SortStep {
    let n = array.len();
    SortStep {
        array,
        compared: None,
        swapped: false,
        settled_prefix: n,
        settled_suffix: 0,
        description: "Array is sorted".to_string(),
    }
}

fn bubble(mut a: Vec<i64>) -> Vec<SortStep> {
    let n = a.len();
    let mut steps = Vec::new();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped_any = false;
        for j in 0..n - 1 - pass {
            let swap = a[j] > a[j + 1];
            let description = if swap {
                format!("a[{j}] = {} > a[{}] = {}: swap", a[j], j + 1, a[j + 1])
            } else {
                format!("a[{j}] = {} <= a[{}] = {}: keep", a[j], j + 1, a[j + 1])
            };
            if swap {
                a.swap(j, j + 1);
                swapped_any = true;
            }
            steps.push(SortStep {
                array: a.clone(),
                compared: Some((j, j + 1)),
                swapped: swap,
                settled_prefix: 0,
                settled_suffix: n - pass,
                description,
            });
        }
        if !swapped_any {
            break;
        }
    }
    steps.push(terminal_step(a));
    steps
}

fn selection(mut a: Vec<i64>) -> Vec<SortStep> {
    let n = a.len();
    let mut steps = Vec::new();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            let smaller = a[j] < a[min];
            let description = if smaller {
                format!("a[{j}] = {} < a[{min}] = {}: new minimum", a[j], a[min])
            } else {
                format!("a[{j}] = {} >= a[{min}] = {}: minimum stays", a[j], a[min])
            };
            steps.push(SortStep {
                array: a.clone(),
                compared: Some((min, j)),
                swapped: false,
                settled_prefix: i,
                settled_suffix: n,
                description,
            });
            if smaller {
                min = j;
            }
        }
        if min != i {
            a.swap(i, min);
            steps.push(SortStep {
                array: a.clone(),
                compared: Some((i, min)),
                swapped: true,
                settled_prefix: i + 1,
                settled_suffix: n,
                description: format!("Swap minimum {} into position {i}", a[i]),
            });
        }
    }
    steps.push(terminal_step(a));
    steps
}

fn insertion(mut a: Vec<i64>) -> Vec<SortStep> {
    let n = a.len();
    let mut steps = Vec::new();
    for i in 1..n {
        let mut j = i;
        while j > 0 {
            let swap = a[j - 1] > a[j];
            // The key lands either on a failed comparison or at index 0.
            let landed = !swap || j == 1;
            let description = if swap {
                format!("a[{}] = {} > key {}: shift right", j - 1, a[j - 1], a[j])
            } else {
                format!("a[{}] = {} <= key {}: insert here", j - 1, a[j - 1], a[j])
            };
            if swap {
                a.swap(j - 1, j);
            }
            steps.push(SortStep {
                array: a.clone(),
                compared: Some((j - 1, j)),
                swapped: swap,
                // Mid-shift only the region below the key is sorted; the
                // whole prefix is settled once the key lands.
                settled_prefix: if landed { i + 1 } else { j - 1 },
                settled_suffix: n,
                description,
            });
            if !swap {
                break;
            }
            j -= 1;
        }
    }
    steps.push(terminal_step(a));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sort_ends_sorted() {
        let input = vec![5, 1, 4, 2, 8];
        for kind in [SortKind::Bubble, SortKind::Selection, SortKind::Insertion] {
            let trace = sort_trace(kind, &input).unwrap();
            let last = trace.last().unwrap();
            assert_eq!(last.array, vec![1, 2, 4, 5, 8], "{}", kind.name());
            assert!(last.compared.is_none());
        }
    }

    #[test]
    fn single_element_is_already_sorted() {
        let trace = sort_trace(SortKind::Bubble, &[7]).unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.get(0).unwrap().array, vec![7]);
    }

    #[test]
    fn insertion_settled_prefix_is_always_sorted() {
        // After the first swap of key 1 the array reads [3, 1, 5]; the
        // claimed prefix must not cover the out-of-place key.
        let trace = sort_trace(SortKind::Insertion, &[3, 5, 1]).unwrap();
        let mid = trace
            .iter()
            .find(|s| s.array == vec![3, 1, 5])
            .expect("mid-shift step");
        assert!(mid.settled_prefix <= 1);

        let trace = sort_trace(SortKind::Insertion, &[9, 7, 5, 3, 1, 8, 2]).unwrap();
        for step in &trace {
            let prefix = &step.array[..step.settled_prefix];
            assert!(
                prefix.windows(2).all(|w| w[0] <= w[1]),
                "unsorted settled prefix {prefix:?} in {:?}",
                step.array
            );
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(sort_trace(SortKind::Insertion, &[]), Err(InputError::EmptyArray));
    }
}
