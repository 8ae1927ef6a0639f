//! TUI pane rendering modules
//!
//! One scene module per visualizer family, plus the step log and the
//! status bar. Each module exports a `render_*_pane()` free function that
//! draws into a caller-supplied area; all playback state stays in
//! [`crate::ui::app::App`].
//!
//! - [`array`]: value bars for the search and sort visualizers
//! - [`towers`]: the three Hanoi pegs
//! - [`gantt`]: CPU scheduling timeline and process table
//! - [`disk`]: disk track with head position and request markers
//! - [`frames`]: page-frame grid over the reference string
//! - [`log`]: step descriptions with the current one highlighted
//! - [`status`]: status bar with step counter, speed, and keybindings

pub mod array;
pub mod disk;
pub mod frames;
pub mod gantt;
pub mod log;
pub mod status;
pub mod towers;

pub use array::{render_search_pane, render_sort_pane};
pub use disk::render_disk_pane;
pub use frames::render_paging_pane;
pub use gantt::render_cpu_pane;
pub use log::render_log_pane;
pub use status::render_status_bar;
pub use towers::render_hanoi_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// Standard bordered block with focus-dependent styling.
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style)
}
