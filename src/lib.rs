//! # Introduction
//!
//! sortty runs a sorting algorithm while recording every primitive operation
//! it performs, then plays the recording back as a terminal animation that
//! can be paused, stepped, sped up and reset.
//!
//! ## Pipeline
//!
//! ```text
//! Generator → Array → Engine → Trace → Controller → Renderer (TUI)
//! ```
//!
//! 1. [`generator`]: builds the input array under a named distribution.
//! 2. [`engine`]: runs one of six instrumented sorts and returns an
//!    [`engine::AlgorithmResult`]: the step trace, the sorted array and
//!    complexity metadata.
//! 3. [`playback`]: the [`playback::Controller`] state machine that replays a
//!    trace step by step against a [`playback::Renderer`].
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble, selection, insertion, merge, quick (Lomuto) and heap sort.

pub mod config;
pub mod constants;
pub mod engine;
pub mod generator;
pub mod playback;
pub mod ui;
