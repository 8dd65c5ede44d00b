//! Bubble sort

use crate::engine::tracer::Tracer;
use crate::engine::AlgorithmResult;
use std::fmt::Display;

const DESCRIPTION: &str = "Bubble Sort repeatedly steps through the list, compares adjacent elements, and swaps them if they are in the wrong order. The pass through the list is repeated until the list is sorted.";

pub fn sort<T: Ord + Clone + Display>(input: &[T]) -> AlgorithmResult<T> {
    let mut t = Tracer::new(input);
    let n = t.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            t.compare(j, j + 1, format!("Comparing {} and {}", t.get(j), t.get(j + 1)));

            if t.get(j) > t.get(j + 1) {
                let description = format!("Swapping {} and {}", t.get(j), t.get(j + 1));
                t.swap(j, j + 1, description);
            }
        }

        // The largest remaining element has bubbled to the end
        t.settle(n - i - 1);
    }

    t.finish("O(n²)", "O(1)", DESCRIPTION)
}
