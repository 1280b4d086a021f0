//! TUI pane rendering modules
//!
//! - [`bars`]: the array as a vertical bar chart with highlight accents
//! - [`controls`]: algorithm selector tabs plus speed/size readouts
//! - [`status`]: status bar with run state, counters and keybindings

pub mod bars;
pub mod controls;
pub mod status;

pub use bars::render_bars_pane;
pub use controls::render_controls_pane;
pub use status::render_status_bar;
