//! Heap sort over an implicit max-heap

use crate::engine::tracer::Tracer;
use crate::engine::AlgorithmResult;
use std::fmt::Display;

const DESCRIPTION: &str = "Heap Sort builds a max heap from the array and then repeatedly extracts the maximum element from the heap and places it at the end of the array.";

pub fn sort<T: Ord + Clone + Display>(input: &[T]) -> AlgorithmResult<T> {
    let mut t = Tracer::new(input);
    let n = t.len();

    t.info("Building max heap".to_string());
    for root in (0..n / 2).rev() {
        heapify(&mut t, n, root);
    }

    for end in (1..n).rev() {
        let description = format!("Moving largest element {} to the end", t.get(0));
        t.swap(0, end, description);
        t.settle(end);
        heapify(&mut t, end, 0);
    }

    if n > 0 {
        t.settle(0);
    }

    t.finish("O(n log n)", "O(1)", DESCRIPTION)
}

/// Sift `root` down within the first `size` elements
fn heapify<T: Ord + Clone + Display>(t: &mut Tracer<T>, size: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < size {
        t.compare(
            largest,
            left,
            format!("Comparing {} with left child {}", t.get(largest), t.get(left)),
        );
        if t.get(left) > t.get(largest) {
            largest = left;
        }
    }

    if right < size {
        t.compare(
            largest,
            right,
            format!("Comparing {} with right child {}", t.get(largest), t.get(right)),
        );
        if t.get(right) > t.get(largest) {
            largest = right;
        }
    }

    if largest != root {
        let description = format!("Swapping {} and {}", t.get(root), t.get(largest));
        t.swap(root, largest, description);
        heapify(t, size, largest);
    }
}
