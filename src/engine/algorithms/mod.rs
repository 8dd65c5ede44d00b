//! The six instrumented sorts
//!
//! Each submodule exposes `sort(input) -> AlgorithmResult<T>` and writes every
//! operation through the shared tracer. The comparisons used for ties are
//! part of each algorithm's contract:
//!
//! | Algorithm | Moves an element when | Stable |
//! |-----------|-----------------------|--------|
//! | bubble    | `a[j] > a[j+1]`       | yes    |
//! | selection | `a[j] < a[min]`       | no     |
//! | insertion | `a[j] > key`          | yes    |
//! | merge     | left wins on `<=`     | yes    |
//! | quick     | `a[j] <= pivot`       | no     |
//! | heap      | child `>` largest     | no     |

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
