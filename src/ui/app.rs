//! Main TUI application state and logic

use crate::constants::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::engine::{Algorithm, Value};
use crate::generator::{ArrayGenerator, Distribution};
use crate::playback::{Controller, PlaybackMode, PlaybackState, TimerScheduler};
use crate::ui::view::BarView;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Upper bound on how long the loop blocks waiting for input
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Settings the app starts with
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub algorithm: Algorithm,
    pub distribution: Distribution,
    pub size: usize,
    pub speed: u8,
    pub mode: PlaybackMode,
    /// Explicit starting array; generated when `None`
    pub values: Option<Vec<Value>>,
}

/// The main application state
pub struct App {
    /// Playback controller driving the bar view
    pub controller: Controller<BarView, TimerScheduler>,

    /// Algorithm used by the next start
    pub algorithm: Algorithm,

    /// Distribution used by the next generate
    pub distribution: Distribution,

    /// Size used by the next generate
    pub size: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app and load its first array
    pub fn new(options: AppOptions, generator: ArrayGenerator) -> Self {
        let controller = Controller::new(
            BarView::new(),
            TimerScheduler::new(),
            generator,
            options.mode,
            options.speed,
        );

        let mut app = App {
            controller,
            algorithm: options.algorithm,
            distribution: options.distribution,
            size: options.size,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };

        match options.values {
            Some(values) => {
                app.size = values.len();
                app.controller.load(&values);
            }
            None => {
                app.controller.generate(app.distribution, app.size);
            }
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let was_running = self.controller.state() == PlaybackState::Running;
            self.controller.pump();
            if was_running && self.controller.state() == PlaybackState::Finished {
                self.set_status("Sorting completed!");
            }

            // Sleep no longer than the next tick
            let timeout = self
                .controller
                .scheduler()
                .time_until_next()
                .map_or(POLL_INTERVAL, |until| until.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Array pane and info pane side by side, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        let session = self.controller.session();
        // Selecting an algorithm resets the run, so the selection is what is shown
        let info = self.algorithm.info();
        let view = self.controller.renderer();
        let caption = view.caption.as_deref().unwrap_or(info.summary);

        super::panes::render_bars_pane(frame, columns[0], view, info.name);

        super::panes::render_info_pane(
            frame,
            columns[1],
            super::panes::InfoRenderData {
                info,
                session,
                distribution: self.distribution,
                size: self.size,
                caption,
            },
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                cursor: session.cursor(),
                total_steps: session.total_steps(),
                state: session.state(),
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Start / pause / resume (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_playback();
                }
            }
            KeyCode::Char('n') | KeyCode::Right => self.next_step(),
            KeyCode::Char('r') => {
                self.controller.reset();
                self.set_status("Reset");
            }
            KeyCode::Char('g') => self.regenerate(),
            KeyCode::Char('d') => {
                self.distribution = self.distribution.next();
                self.regenerate();
            }
            KeyCode::Char('a') | KeyCode::Tab => self.select_algorithm(self.algorithm.next()),
            KeyCode::BackTab => self.select_algorithm(self.algorithm.prev()),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                let speed = self.controller.session().speed().saturating_add(1);
                self.controller.set_speed(speed);
                self.set_status(format!("Speed {}", self.controller.session().speed()));
            }
            KeyCode::Char('-') | KeyCode::Down => {
                let speed = self.controller.session().speed().saturating_sub(1);
                self.controller.set_speed(speed);
                self.set_status(format!("Speed {}", self.controller.session().speed()));
            }
            KeyCode::Char('m') => self.toggle_mode(),
            KeyCode::Char(']') => self.resize(self.size.saturating_add(5)),
            KeyCode::Char('[') => self.resize(self.size.saturating_sub(5)),
            KeyCode::Char('v') => {
                let view = self.controller.renderer_mut();
                view.show_values = !view.show_values;
            }
            _ => {}
        }
    }

    fn toggle_playback(&mut self) {
        match self.controller.state() {
            PlaybackState::Running => {
                self.controller.pause();
                self.set_status("Paused");
            }
            PlaybackState::Paused => {
                self.controller.resume();
                self.set_status("Playing...");
            }
            PlaybackState::Idle | PlaybackState::Finished => {
                if self.controller.state() == PlaybackState::Finished {
                    // Replay the same input from the top
                    self.controller.reset();
                }
                let array = self.controller.original().to_vec();
                let mode = self.controller.session().mode();
                match self.controller.start(self.algorithm.key(), &array, mode) {
                    Ok(()) => match mode {
                        PlaybackMode::Continuous => self.set_status("Playing..."),
                        PlaybackMode::Step => self.set_status("Step mode: press n to advance"),
                    },
                    Err(e) => self.set_error(e.to_string()),
                }
            }
        }
    }

    fn next_step(&mut self) {
        let session = self.controller.session();
        if session.state() != PlaybackState::Paused || session.mode() != PlaybackMode::Step {
            self.set_status("Next step needs step mode while paused (m, then space)");
            return;
        }
        self.controller.next_step();
        if self.controller.state() == PlaybackState::Finished {
            self.set_status("Sorting completed!");
        } else {
            self.set_status("Stepped forward");
        }
    }

    fn toggle_mode(&mut self) {
        let mode = match self.controller.session().mode() {
            PlaybackMode::Continuous => PlaybackMode::Step,
            PlaybackMode::Step => PlaybackMode::Continuous,
        };
        self.controller.set_mode(mode);
        match mode {
            PlaybackMode::Step => self.set_status("Step mode"),
            PlaybackMode::Continuous => self.set_status("Continuous mode"),
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.controller.reset();
        debug!(algorithm = algorithm.key(), "selected algorithm");
        self.set_status(format!("Selected {}", algorithm));
    }

    fn regenerate(&mut self) {
        self.controller.generate(self.distribution, self.size);
        self.set_status(format!("Generated {} array of {}", self.distribution, self.size));
    }

    fn resize(&mut self, size: usize) {
        self.size = size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
        self.regenerate();
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}
