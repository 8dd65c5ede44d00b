//! The terminal's visual surface
//!
//! [`BarView`] is the [`Renderer`] the controller drives in interactive mode.
//! It keeps its own copy of what is on screen (values, sorted indices and
//! highlights) and the panes draw from it each frame.

use crate::engine::{Step, Value};
use crate::playback::session::apply_marks;
use crate::playback::{Mark, Renderer};
use rustc_hash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default)]
pub struct BarView {
    pub values: Vec<Value>,
    pub sorted: FxHashSet<usize>,
    pub marks: FxHashMap<usize, Mark>,
    /// Description of the last rendered step
    pub caption: Option<String>,
    pub show_values: bool,
}

impl BarView {
    pub fn new() -> Self {
        BarView {
            show_values: true,
            ..Default::default()
        }
    }
}

impl Renderer for BarView {
    fn render(&mut self, step: &Step<Value>, working: &[Value], sorted: &FxHashSet<usize>) {
        self.values.clear();
        self.values.extend_from_slice(working);
        self.sorted.clone_from(sorted);
        // Recompute highlights from the step itself; `sorted` already
        // includes this step's additions
        let mut scratch = self.sorted.clone();
        apply_marks(step, self.values.len(), &mut scratch, &mut self.marks);
        self.caption = Some(step.description.clone());
    }

    fn redraw(&mut self, array: &[Value]) {
        self.values = array.to_vec();
        self.sorted.clear();
        self.marks.clear();
        self.caption = None;
    }

    fn mark_all_sorted(&mut self, array: &[Value]) {
        self.values = array.to_vec();
        self.sorted = (0..array.len()).collect();
        self.marks.clear();
        self.caption = Some("Sorting completed!".to_string());
    }
}
