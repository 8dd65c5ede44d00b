//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as a bar chart, colored by sorted state and step marks
//! - [`info`]: algorithm metadata, run settings, step caption and legend
//! - [`status`]: status bar with step counter, keybindings and playback state
//!
//! Each module exports a `render_*` function taking the frame, its area and
//! the data to draw. Panes never touch the controller.

pub mod bars;
pub mod info;
pub mod status;

pub use bars::render_bars_pane;
pub use info::{render_info_pane, InfoRenderData};
pub use status::{render_status_bar, StatusRenderData};
