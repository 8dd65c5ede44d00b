//! Insertion sort
//!
//! Each leftward shift is recorded as a `swap` of adjacent positions. The key
//! always sits at `j + 1` while it moves, so the run of swaps produces the
//! same permutation as shifting the prefix right and dropping the key in.

use crate::engine::tracer::Tracer;
use crate::engine::AlgorithmResult;
use std::fmt::Display;

const DESCRIPTION: &str = "Insertion Sort builds the sorted array one item at a time by repeatedly taking the next element and inserting it into its correct position in the sorted portion.";

pub fn sort<T: Ord + Clone + Display>(input: &[T]) -> AlgorithmResult<T> {
    let mut t = Tracer::new(input);
    let n = t.len();

    if n > 0 {
        let description = format!("Starting with first element {} as sorted", t.get(0));
        t.sorted(vec![0], description);
    }

    for i in 1..n {
        let key = t.get(i).clone();
        t.pivot(i, format!("Inserting element {} into the sorted portion", key));

        let mut j = i;
        while j > 0 && *t.get(j - 1) > key {
            t.compare(j - 1, j, format!("Comparing {} and {}", t.get(j - 1), key));
            let description = format!("Shifting {} to the right", t.get(j - 1));
            t.swap(j - 1, j, description);
            j -= 1;
        }

        t.sorted(
            (0..=i).collect(),
            format!("Elements up to index {} are now sorted", i),
        );
    }

    t.finish("O(n²)", "O(1)", DESCRIPTION)
}
