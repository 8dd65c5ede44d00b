//! Trace steps emitted by the instrumented algorithms
//!
//! A [`Step`] records one primitive operation in the order it was performed.
//! Only two kinds change array contents:
//!
//! - [`StepKind::Swap`] exchanges the values at its two indices
//! - [`StepKind::Overwrite`] writes `values[k]` at `indices[k]`
//!
//! Every other kind is an annotation (highlighting, sortedness, captions).
//! Replaying the value-changing steps against a copy of the input reproduces
//! the algorithm's output; see [`Step::apply_values`].

use serde::Serialize;
use tracing::warn;

/// The kind of primitive operation a step records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepKind {
    Comparison,
    Swap,
    Sorted,
    Pivot,
    Overwrite,
    Split,
    Info,
    AllSorted,
}

impl StepKind {
    /// Short lowercase label, matching the serialized name
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Comparison => "comparison",
            StepKind::Swap => "swap",
            StepKind::Sorted => "sorted",
            StepKind::Pivot => "pivot",
            StepKind::Overwrite => "overwrite",
            StepKind::Split => "split",
            StepKind::Info => "info",
            StepKind::AllSorted => "allSorted",
        }
    }

    /// Whether replaying this kind changes array contents
    pub fn mutates(self) -> bool {
        matches!(self, StepKind::Swap | StepKind::Overwrite)
    }
}

/// One observable primitive operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step<T> {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub indices: Vec<usize>,
    /// Written values, aligned with `indices` (overwrite only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<T>,
    /// Boundary between the left and right halves (split only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid_index: Option<usize>,
    pub description: String,
}

impl<T> Step<T> {
    fn annotation(kind: StepKind, indices: Vec<usize>, description: String) -> Self {
        Step {
            kind,
            indices,
            values: Vec::new(),
            mid_index: None,
            description,
        }
    }

    pub fn comparison(a: usize, b: usize, description: String) -> Self {
        Self::annotation(StepKind::Comparison, vec![a, b], description)
    }

    pub fn swap(a: usize, b: usize, description: String) -> Self {
        Self::annotation(StepKind::Swap, vec![a, b], description)
    }

    pub fn sorted(indices: Vec<usize>, description: String) -> Self {
        Self::annotation(StepKind::Sorted, indices, description)
    }

    pub fn pivot(index: usize, description: String) -> Self {
        Self::annotation(StepKind::Pivot, vec![index], description)
    }

    pub fn overwrite(index: usize, value: T, description: String) -> Self {
        Step {
            kind: StepKind::Overwrite,
            indices: vec![index],
            values: vec![value],
            mid_index: None,
            description,
        }
    }

    pub fn split(indices: Vec<usize>, mid_index: usize, description: String) -> Self {
        Step {
            kind: StepKind::Split,
            indices,
            values: Vec::new(),
            mid_index: Some(mid_index),
            description,
        }
    }

    pub fn info(description: String) -> Self {
        Self::annotation(StepKind::Info, Vec::new(), description)
    }

    pub fn all_sorted() -> Self {
        Self::annotation(
            StepKind::AllSorted,
            Vec::new(),
            "Array is now sorted".to_string(),
        )
    }
}

impl<T: Clone> Step<T> {
    /// Apply the value-level effect of this step to `array`.
    ///
    /// Indices outside the array are skipped: a swap touching one is dropped
    /// entirely, an overwrite only loses the offending position.
    pub fn apply_values(&self, array: &mut [T]) {
        match self.kind {
            StepKind::Swap => match self.indices.as_slice() {
                [a, b] if *a < array.len() && *b < array.len() => array.swap(*a, *b),
                indices => warn!(?indices, len = array.len(), "ignoring malformed swap"),
            },
            StepKind::Overwrite => {
                for (&index, value) in self.indices.iter().zip(&self.values) {
                    match array.get_mut(index) {
                        Some(slot) => *slot = value.clone(),
                        None => warn!(index, len = array.len(), "ignoring out-of-range overwrite"),
                    }
                }
            }
            _ => {}
        }
    }
}
