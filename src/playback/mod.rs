//! Trace playback
//!
//! Turns an [`AlgorithmResult`](crate::engine::AlgorithmResult) into an
//! animation:
//! - [`session`]: [`PlaybackSession`] state and how a single step changes it
//! - [`scheduler`]: delayed ticks with generation tokens for cancellation
//! - [`controller`]: the [`Controller`] state machine and the [`Renderer`] it drives
//!
//! # Execution Model
//!
//! Single-threaded and cooperative. The host loop calls
//! [`Controller::pump`] to fire due ticks; each tick applies exactly one step
//! and schedules the next. Pause and reset bump the controller's generation,
//! so any tick scheduled before them is ignored when it fires.

pub mod controller;
pub mod scheduler;
pub mod session;

pub use controller::{delay_for_speed, Controller, Renderer};
pub use scheduler::{ManualScheduler, Scheduler, TickToken, TimerScheduler};
pub use session::{Mark, PlaybackMode, PlaybackSession, PlaybackState};
