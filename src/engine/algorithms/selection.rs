//! Selection sort

use crate::engine::tracer::Tracer;
use crate::engine::AlgorithmResult;
use std::fmt::Display;

const DESCRIPTION: &str = "Selection Sort divides the array into a sorted and an unsorted region, and repeatedly selects the smallest element from the unsorted region and moves it to the sorted region.";

pub fn sort<T: Ord + Clone + Display>(input: &[T]) -> AlgorithmResult<T> {
    let mut t = Tracer::new(input);
    let n = t.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        t.pivot(i, format!("Finding minimum element to place at position {}", i));

        for j in i + 1..n {
            t.compare(
                min_index,
                j,
                format!("Comparing {} and {}", t.get(min_index), t.get(j)),
            );
            if t.get(j) < t.get(min_index) {
                min_index = j;
            }
        }

        if min_index != i {
            let description = format!("Swapping {} and {}", t.get(i), t.get(min_index));
            t.swap(i, min_index, description);
        }

        t.settle(i);
    }

    if n > 0 {
        t.settle(n - 1);
    }

    t.finish("O(n²)", "O(1)", DESCRIPTION)
}
