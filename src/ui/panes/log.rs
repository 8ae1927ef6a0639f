//! Step log pane: every step's description, current one highlighted
//!
//! The log auto-follows the current step unless the user has scrolled it
//! manually; the app clears the manual offset whenever the cursor moves.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Render the step log. `current` is the highlighted step index;
/// `manual_scroll` overrides auto-follow when set.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    descriptions: &[&str],
    current: Option<usize>,
    manual_scroll: Option<usize>,
    is_focused: bool,
) {
    let block = super::pane_block("Steps", is_focused);

    let visible = area.height.saturating_sub(2).max(1) as usize;
    let total = descriptions.len();
    let max_scroll = total.saturating_sub(visible);

    // Auto-follow keeps the current step centered where possible.
    let offset = match manual_scroll {
        Some(s) => s.min(max_scroll),
        None => current
            .map(|c| c.saturating_sub(visible / 2))
            .unwrap_or(0)
            .min(max_scroll),
    };

    let lines: Vec<Line> = descriptions
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, text)| {
            let numbered = format!("{:>4}  {text}", i + 1);
            match current {
                Some(cur) if i == cur => Line::styled(
                    numbered,
                    Style::default()
                        .fg(DEFAULT_THEME.accent)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Some(cur) if i < cur => {
                    Line::styled(numbered, Style::default().fg(DEFAULT_THEME.fg))
                }
                _ => Line::styled(numbered, Style::default().fg(DEFAULT_THEME.comment)),
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
