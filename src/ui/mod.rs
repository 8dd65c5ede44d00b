//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, scheduler pumping
//! - **[`view`]**: [`BarView`], the [`Renderer`] the playback controller drives
//! - **[`panes`]**: stateless render functions for each visible pane (bars,
//!   info, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with [`AppOptions`]
//! and call [`App::run`] to start the event loop.
//!
//! [`Renderer`]: crate::playback::Renderer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;
pub mod view;

pub use app::{App, AppOptions};
pub use view::BarView;
