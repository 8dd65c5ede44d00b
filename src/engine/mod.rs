//! Instrumented sorting engine
//!
//! This module runs one of six comparison sorts while recording every
//! primitive operation it performs:
//! - [`step`]: the [`Step`] record and its value-level semantics
//! - [`algorithms`]: bubble, selection, insertion, merge, quick and heap sort
//! - [`errors`]: [`EngineError`]
//!
//! # Determinism
//!
//! The algorithms contain no randomness. Ties follow the comparisons each
//! algorithm is defined with, so merge sort is stable and the others are not
//! necessarily stable.
//!
//! # Replay
//!
//! A trace is complete: applying its steps in order to a copy of the input
//! (see [`replay`]) reproduces [`AlgorithmResult::sorted_array`].

pub mod algorithms;
pub mod errors;
pub mod step;
mod tracer;

pub use errors::EngineError;
pub use step::{Step, StepKind};

use serde::Serialize;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Element type used by the application
pub type Value = i32;

/// Output of one instrumented run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult<T = Value> {
    pub steps: Vec<Step<T>>,
    pub sorted_array: Vec<T>,
    pub time_complexity: String,
    pub space_complexity: String,
    pub description: String,
}

/// Catalog metadata shown before a run starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub key: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub summary: &'static str,
}

/// The fixed catalog of instrumented sorts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Key used on the command line and in [`run`]
    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Algorithm::Bubble => AlgorithmInfo {
                name: "Bubble Sort",
                key: "bubble",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                summary: "A simple comparison-based algorithm that repeatedly steps through the list, compares adjacent elements, and swaps them if they are in the wrong order.",
            },
            Algorithm::Selection => AlgorithmInfo {
                name: "Selection Sort",
                key: "selection",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                summary: "An in-place comparison sorting algorithm that divides the input list into two parts: a sorted sublist and an unsorted sublist, then repeatedly selects the smallest element from the unsorted sublist.",
            },
            Algorithm::Insertion => AlgorithmInfo {
                name: "Insertion Sort",
                key: "insertion",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                summary: "A simple sorting algorithm that builds the final sorted array one item at a time, efficient for small data sets or nearly sorted data.",
            },
            Algorithm::Merge => AlgorithmInfo {
                name: "Merge Sort",
                key: "merge",
                time_complexity: "O(n log n)",
                space_complexity: "O(n)",
                summary: "An efficient, stable, comparison-based, divide and conquer algorithm that divides the array, sorts the halves, and then merges them.",
            },
            Algorithm::Quick => AlgorithmInfo {
                name: "Quick Sort",
                key: "quick",
                time_complexity: "O(n log n)",
                space_complexity: "O(log n)",
                summary: "An efficient, in-place sorting algorithm that uses divide and conquer strategy by selecting a pivot element and partitioning the array around it.",
            },
            Algorithm::Heap => AlgorithmInfo {
                name: "Heap Sort",
                key: "heap",
                time_complexity: "O(n log n)",
                space_complexity: "O(1)",
                summary: "A comparison-based sorting algorithm that uses a binary heap data structure to build a max-heap and then repeatedly extracts the maximum.",
            },
        }
    }

    /// Next algorithm in catalog order (wraps around)
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in catalog order (wraps around)
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Sort a copy of `input`, recording every primitive operation
    pub fn run<T: Ord + Clone + Display>(self, input: &[T]) -> AlgorithmResult<T> {
        match self {
            Algorithm::Bubble => algorithms::bubble::sort(input),
            Algorithm::Selection => algorithms::selection::sort(input),
            Algorithm::Insertion => algorithms::insertion::sort(input),
            Algorithm::Merge => algorithms::merge::sort(input),
            Algorithm::Quick => algorithms::quick::sort(input),
            Algorithm::Heap => algorithms::heap::sort(input),
        }
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| EngineError::UnknownAlgorithm { key: s.to_string() })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

/// Run the algorithm named by `algorithm_key` over a copy of `input`
pub fn run<T: Ord + Clone + Display>(
    algorithm_key: &str,
    input: &[T],
) -> Result<AlgorithmResult<T>, EngineError> {
    let algorithm: Algorithm = algorithm_key.parse()?;
    Ok(algorithm.run(input))
}

/// Apply the value-changing steps of a trace to a copy of `input`
pub fn replay<T: Clone>(input: &[T], steps: &[Step<T>]) -> Vec<T> {
    let mut array = input.to_vec();
    for step in steps.iter().filter(|s| s.kind.mutates()) {
        step.apply_values(&mut array);
    }
    array
}

/// Check if a slice is sorted in non-decreasing order
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
