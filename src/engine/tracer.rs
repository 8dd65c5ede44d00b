//! Recording buffer shared by the instrumented algorithms
//!
//! The tracer owns a private copy of the input and the growing step list.
//! Each recording method appends the step first and then performs the
//! matching mutation, so descriptions always describe the array as it was
//! when the operation happened.

use super::step::Step;
use super::AlgorithmResult;
use std::fmt::Display;

pub(crate) struct Tracer<T> {
    arr: Vec<T>,
    steps: Vec<Step<T>>,
}

impl<T: Ord + Clone + Display> Tracer<T> {
    pub fn new(input: &[T]) -> Self {
        Tracer {
            arr: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arr.len()
    }

    pub fn get(&self, index: usize) -> &T {
        &self.arr[index]
    }

    /// Copy of a contiguous run of the working array
    pub fn slice(&self, start: usize, end: usize) -> Vec<T> {
        self.arr[start..end].to_vec()
    }

    pub fn compare(&mut self, a: usize, b: usize, description: String) {
        self.steps.push(Step::comparison(a, b, description));
    }

    pub fn swap(&mut self, a: usize, b: usize, description: String) {
        self.steps.push(Step::swap(a, b, description));
        self.arr.swap(a, b);
    }

    pub fn overwrite(&mut self, index: usize, value: T, description: String) {
        self.steps
            .push(Step::overwrite(index, value.clone(), description));
        self.arr[index] = value;
    }

    pub fn sorted(&mut self, indices: Vec<usize>, description: String) {
        self.steps.push(Step::sorted(indices, description));
    }

    /// Mark a single index as settled, using the standard wording
    pub fn settle(&mut self, index: usize) {
        let description = format!("Element {} is now in its sorted position", self.arr[index]);
        self.sorted(vec![index], description);
    }

    pub fn pivot(&mut self, index: usize, description: String) {
        self.steps.push(Step::pivot(index, description));
    }

    pub fn split(&mut self, start: usize, end: usize, mid: usize) {
        self.steps.push(Step::split(
            (start..end).collect(),
            mid,
            format!("Splitting array at index {}", mid),
        ));
    }

    pub fn info(&mut self, description: String) {
        self.steps.push(Step::info(description));
    }

    /// Append the terminal `allSorted` step and package the result
    pub fn finish(
        mut self,
        time_complexity: &str,
        space_complexity: &str,
        description: &str,
    ) -> AlgorithmResult<T> {
        self.steps.push(Step::all_sorted());
        AlgorithmResult {
            steps: self.steps,
            sorted_array: self.arr,
            time_complexity: time_complexity.to_string(),
            space_complexity: space_complexity.to_string(),
            description: description.to_string(),
        }
    }
}
