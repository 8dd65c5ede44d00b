//! Playback session state and step application
//!
//! A [`PlaybackSession`] is the mutable half of playback: the trace being
//! played, the cursor into it, the working array as it looks after the last
//! applied step, the permanently sorted indices and the transient highlight
//! marks. It is owned exclusively by the
//! [`Controller`](super::controller::Controller), which performs all state
//! transitions; this module only knows how one step changes the session.

use crate::constants::{MAX_SPEED, MIN_SPEED};
use crate::engine::{Algorithm, AlgorithmResult, Step, StepKind, Value};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{trace, warn};

/// Lifecycle state of playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

impl PlaybackState {
    /// Whether a run is in progress (started and not yet finished)
    pub fn is_active(self) -> bool {
        matches!(self, PlaybackState::Running | PlaybackState::Paused)
    }
}

/// How playback advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    /// Advance autonomously on a timer
    #[default]
    Continuous,
    /// Advance one step per explicit request
    Step,
}

/// Transient highlight applied to an index by the most recent step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Comparing,
    Swapping,
    Pivot,
    LeftSplit,
    RightSplit,
    Written,
}

/// The transient marks a step asks for, before filtering out sorted indices
pub fn transient_marks<T>(step: &Step<T>) -> Vec<(usize, Mark)> {
    let uniform = |mark: Mark| -> Vec<(usize, Mark)> {
        step.indices.iter().map(|&i| (i, mark)).collect()
    };
    match step.kind {
        StepKind::Comparison => uniform(Mark::Comparing),
        StepKind::Swap => uniform(Mark::Swapping),
        StepKind::Pivot => uniform(Mark::Pivot),
        StepKind::Overwrite => uniform(Mark::Written),
        StepKind::Split => {
            let mid = step.mid_index.unwrap_or(usize::MAX);
            step.indices
                .iter()
                .map(|&i| {
                    let mark = if i < mid {
                        Mark::LeftSplit
                    } else {
                        Mark::RightSplit
                    };
                    (i, mark)
                })
                .collect()
        }
        StepKind::Sorted | StepKind::AllSorted | StepKind::Info => Vec::new(),
    }
}

/// Apply one step to the display state of an array.
///
/// Shared by the session and by renderers that keep their own copy of the
/// marks. `info` steps leave the marks untouched; every other kind clears the
/// previous marks before setting its own. Indices outside `len` are ignored.
pub fn apply_marks<T>(
    step: &Step<T>,
    len: usize,
    sorted: &mut FxHashSet<usize>,
    marks: &mut FxHashMap<usize, Mark>,
) {
    if step.kind == StepKind::Info {
        return;
    }
    marks.clear();

    match step.kind {
        StepKind::Sorted => {
            for &index in &step.indices {
                if index < len {
                    sorted.insert(index);
                } else {
                    warn!(index, len, "ignoring out-of-range sorted index");
                }
            }
        }
        StepKind::AllSorted => sorted.extend(0..len),
        _ => {}
    }

    for (index, mark) in transient_marks(step) {
        if index >= len {
            warn!(index, len, kind = step.kind.label(), "ignoring out-of-range mark");
        } else if !sorted.contains(&index) {
            marks.insert(index, mark);
        }
    }
}

/// Everything the controller tracks about one playback run
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    pub(crate) algorithm: Option<Algorithm>,
    pub(crate) trace: Option<AlgorithmResult>,
    pub(crate) cursor: usize,
    pub(crate) mode: PlaybackMode,
    pub(crate) state: PlaybackState,
    pub(crate) speed: u8,
    pub(crate) working: Vec<Value>,
    pub(crate) sorted: FxHashSet<usize>,
    pub(crate) marks: FxHashMap<usize, Mark>,
    pub(crate) caption: String,
}

impl PlaybackSession {
    pub fn new(mode: PlaybackMode, speed: u8) -> Self {
        PlaybackSession {
            mode,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            ..Default::default()
        }
    }

    /// Install a fresh trace and rewind to its start
    pub(crate) fn begin(&mut self, algorithm: Algorithm, trace: AlgorithmResult, array: &[Value]) {
        self.algorithm = Some(algorithm);
        self.trace = Some(trace);
        self.cursor = 0;
        self.working = array.to_vec();
        self.sorted.clear();
        self.marks.clear();
        self.caption = algorithm.info().summary.to_string();
    }

    /// Drop the trace and restore the pre-sort array
    pub(crate) fn clear(&mut self, original: &[Value]) {
        self.trace = None;
        self.cursor = 0;
        self.state = PlaybackState::Idle;
        self.working = original.to_vec();
        self.sorted.clear();
        self.marks.clear();
        self.caption = self
            .algorithm
            .map(|a| a.info().summary.to_string())
            .unwrap_or_default();
    }

    /// Apply the step under the cursor and advance. Returns the cursor of the
    /// applied step, or `None` when the trace is exhausted.
    pub(crate) fn apply_next(&mut self) -> Option<usize> {
        let trace = self.trace.as_ref()?;
        let step = trace.steps.get(self.cursor)?;

        trace!(cursor = self.cursor, kind = step.kind.label(), "applying step");
        step.apply_values(&mut self.working);
        apply_marks(step, self.working.len(), &mut self.sorted, &mut self.marks);
        self.caption.clone_from(&step.description);

        let applied = self.cursor;
        self.cursor += 1;
        Some(applied)
    }

    /// Force every index into the sorted set
    pub(crate) fn mark_all_sorted(&mut self) {
        self.sorted.extend(0..self.working.len());
        self.marks.clear();
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    pub fn trace(&self) -> Option<&AlgorithmResult> {
        self.trace.as_ref()
    }

    /// The step most recently applied, if any
    pub fn current_step(&self) -> Option<&Step<Value>> {
        let trace = self.trace.as_ref()?;
        self.cursor.checked_sub(1).and_then(|i| trace.steps.get(i))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_steps(&self) -> usize {
        self.trace.as_ref().map_or(0, |t| t.steps.len())
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.total_steps()
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn working_array(&self) -> &[Value] {
        &self.working
    }

    pub fn sorted_set(&self) -> &FxHashSet<usize> {
        &self.sorted
    }

    pub fn marks(&self) -> &FxHashMap<usize, Mark> {
        &self.marks
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}
