//! Merge sort
//!
//! Top-down over index ranges of the shared working array. Merging compares
//! the halves as they were before the merge began (the comparison indices
//! point at the original slots) and then writes the merged run back one
//! `overwrite` at a time.

use crate::engine::tracer::Tracer;
use crate::engine::AlgorithmResult;
use std::fmt::Display;

const DESCRIPTION: &str = "Merge Sort divides the array into halves, sorts each half, and then merges the sorted halves back together. It follows the divide-and-conquer paradigm.";

pub fn sort<T: Ord + Clone + Display>(input: &[T]) -> AlgorithmResult<T> {
    let mut t = Tracer::new(input);
    let n = t.len();
    sort_range(&mut t, 0, n);
    t.finish("O(n log n)", "O(n)", DESCRIPTION)
}

fn sort_range<T: Ord + Clone + Display>(t: &mut Tracer<T>, start: usize, end: usize) {
    if end - start <= 1 {
        return;
    }

    let mid = start + (end - start) / 2;
    t.split(start, end, mid);

    sort_range(t, start, mid);
    sort_range(t, mid, end);
    merge(t, start, mid, end);
}

fn merge<T: Ord + Clone + Display>(t: &mut Tracer<T>, start: usize, mid: usize, end: usize) {
    let left = t.slice(start, mid);
    let right = t.slice(mid, end);
    let mut merged = Vec::with_capacity(end - start);
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        t.compare(
            start + i,
            mid + j,
            format!("Comparing {} and {}", left[i], right[j]),
        );

        // Left wins ties, which keeps the sort stable
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    for (k, value) in merged.into_iter().enumerate() {
        let description = format!("Placing {} at position {}", value, start + k);
        t.overwrite(start + k, value, description);
    }
}
