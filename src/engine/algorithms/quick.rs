//! Quick sort (Lomuto partition, last element as pivot)

use crate::engine::tracer::Tracer;
use crate::engine::AlgorithmResult;
use std::fmt::Display;

const DESCRIPTION: &str = "Quick Sort selects a pivot element and partitions the array around it, then recursively sorts the sub-arrays. It follows the divide-and-conquer paradigm.";

pub fn sort<T: Ord + Clone + Display>(input: &[T]) -> AlgorithmResult<T> {
    let mut t = Tracer::new(input);
    let n = t.len();
    sort_range(&mut t, 0, n);
    t.finish("O(n log n)", "O(log n)", DESCRIPTION)
}

/// Sort the half-open range `low..end`
fn sort_range<T: Ord + Clone + Display>(t: &mut Tracer<T>, low: usize, end: usize) {
    match end.saturating_sub(low) {
        0 => {}
        1 => {
            let description = format!("Element {} is in its sorted position", t.get(low));
            t.sorted(vec![low], description);
        }
        _ => {
            let p = partition(t, low, end - 1);
            sort_range(t, low, p);
            sort_range(t, p + 1, end);
        }
    }
}

/// Partition `low..=high` around `a[high]` and return the pivot's final index
fn partition<T: Ord + Clone + Display>(t: &mut Tracer<T>, low: usize, high: usize) -> usize {
    let pivot = t.get(high).clone();
    t.pivot(high, format!("Choosing pivot element {}", pivot));

    // Next slot of the low partition
    let mut boundary = low;

    for j in low..high {
        t.compare(
            j,
            high,
            format!("Comparing {} with pivot {}", t.get(j), pivot),
        );

        if *t.get(j) <= pivot {
            if boundary != j {
                let description = format!("Swapping {} and {}", t.get(boundary), t.get(j));
                t.swap(boundary, j, description);
            }
            boundary += 1;
        }
    }

    if boundary != high {
        let description = format!(
            "Swapping {} and {} (pivot)",
            t.get(boundary),
            t.get(high)
        );
        t.swap(boundary, high, description);
    }

    t.sorted(
        vec![boundary],
        format!("Pivot {} is now in its sorted position", pivot),
    );
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepKind;

    #[test]
    fn test_one_pivot_per_partition() {
        let result = sort(&[3, 1, 2]);
        let pivots: Vec<usize> = result
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Pivot)
            .map(|s| s.indices[0])
            .collect();
        // Partition 0..=2 seats 2 at index 1, leaving two singletons
        assert_eq!(pivots, vec![2]);
        assert_eq!(result.sorted_array, vec![1, 2, 3]);
    }

    #[test]
    fn test_no_self_swaps() {
        let result = sort(&[1, 2, 3, 4]);
        assert!(result
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Swap)
            .all(|s| s.indices[0] != s.indices[1]));
    }
}
