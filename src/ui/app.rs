//! Main TUI application state and logic

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::engine::{Algorithm, RunState, SortEngine};

/// How far one keypress moves the speed setting
const SPEED_STEP: u32 = 5;

/// How far one keypress moves the array size
const SIZE_STEP: usize = 10;

/// The main application state
pub struct App {
    /// The sort engine instance
    pub engine: SortEngine,

    /// Index into [`Algorithm::ALL`] of the selected algorithm
    pub selected: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(engine: SortEngine) -> Self {
        App {
            engine,
            selected: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so the bars keep animating while the
            // worker runs
            if event::poll(Duration::from_millis(50))? {
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

        // Controls on top, bars in the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_controls_pane(
            frame,
            chunks[0],
            self.selected,
            self.engine.speed(),
            self.engine.len(),
            self.engine.state().is_active(),
        );

        let snapshot = self.engine.snapshot();
        super::panes::render_bars_pane(frame, chunks[1], &snapshot, self.engine.highlight());

        super::panes::render_status_bar(
            frame,
            chunks[2],
            self.engine.state(),
            self.engine.comparisons(),
            self.engine.swaps(),
            &self.status_message,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                let algorithm = Algorithm::ALL[self.selected];
                if self.engine.start(algorithm) {
                    self.status_message = format!("Running {}", algorithm);
                } else if self.engine.state().is_active() {
                    self.status_message = String::from("Already sorting");
                } else {
                    self.status_message = String::from("Press r to reset first");
                }
            }
            KeyCode::Char(' ') => match self.engine.state() {
                RunState::Running => {
                    self.engine.toggle_pause();
                    self.status_message = String::from("Paused at next step");
                }
                RunState::Paused => {
                    self.engine.toggle_pause();
                    self.status_message = String::from("Resumed");
                }
                _ => {
                    self.status_message = String::from("Nothing to pause");
                }
            },
            KeyCode::Char('c') | KeyCode::Char('C') => {
                if self.engine.cancel() {
                    self.status_message = String::from("Cancelling...");
                } else {
                    self.status_message = String::from("No run to cancel");
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.engine.reset();
                self.status_message = String::from("New array generated");
            }
            KeyCode::Left => {
                if self.engine.state().is_active() {
                    self.status_message = String::from("Finish or reset before switching");
                } else {
                    self.selected = (self.selected + Algorithm::ALL.len() - 1) % Algorithm::ALL.len();
                }
            }
            KeyCode::Right => {
                if self.engine.state().is_active() {
                    self.status_message = String::from("Finish or reset before switching");
                } else {
                    self.selected = (self.selected + 1) % Algorithm::ALL.len();
                }
            }
            KeyCode::Up => {
                self.engine.set_speed(self.engine.speed() + SPEED_STEP);
            }
            KeyCode::Down => {
                self.engine
                    .set_speed(self.engine.speed().saturating_sub(SPEED_STEP));
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if self.engine.resize(self.engine.len() + SIZE_STEP) {
                    self.status_message = format!("Array size {}", self.engine.len());
                } else {
                    self.status_message = String::from("Resize only while idle");
                }
            }
            KeyCode::Char('-') => {
                let target = self.engine.len().saturating_sub(SIZE_STEP);
                if self.engine.resize(target) {
                    self.status_message = format!("Array size {}", self.engine.len());
                } else {
                    self.status_message = String::from("Resize only while idle");
                }
            }
            _ => {}
        }
    }
}
