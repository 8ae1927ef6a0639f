//! Value-bar rendering for the search and sort visualizers
//!
//! Each element is one row: index, value, and a horizontal bar scaled to
//! the largest value in the array. Colors mark the roles the current step
//! assigns (probe, active window, compared pair, settled region).

use crate::algorithms::search::{ProbeOutcome, SearchStep};
use crate::algorithms::sort::SortStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn bar_rows<'a>(
    array: &[i64],
    area: Rect,
    style_for: impl Fn(usize) -> Style,
) -> Vec<Line<'a>> {
    let max = array.iter().copied().max().unwrap_or(1).max(1);
    // Borders take 2 columns; index + value + padding take 10 more.
    let bar_space = (area.width.saturating_sub(12)).max(1) as i64;
    array
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let width = ((v * bar_space) / max).max(1) as usize;
            let style = style_for(i);
            Line::from(vec![
                Span::styled(format!("{i:>3} "), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(format!("{v:>4} "), style),
                Span::styled("█".repeat(width), style),
            ])
        })
        .collect()
}

/// Render the search scene. `step` is `None` before the first step.
pub fn render_search_pane(
    frame: &mut Frame,
    area: Rect,
    array: &[i64],
    target: i64,
    step: Option<&SearchStep>,
    is_focused: bool,
) {
    let title = format!("Search for {target}");
    let block = super::pane_block(&title, is_focused);

    let lines = match step {
        None => bar_rows(array, area, |_| Style::default().fg(DEFAULT_THEME.fg)),
        Some(step) => bar_rows(&step.array, area, |i| {
            if step.found == Some(i) {
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD)
            } else if i == step.probe {
                let color = if step.outcome == ProbeOutcome::Match {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.secondary
                };
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else if i >= step.low && i <= step.high {
                Style::default().fg(DEFAULT_THEME.primary)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            }
        }),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the sort scene. `step` is `None` before the first step.
pub fn render_sort_pane(
    frame: &mut Frame,
    area: Rect,
    array: &[i64],
    step: Option<&SortStep>,
    is_focused: bool,
) {
    let block = super::pane_block("Array", is_focused);

    let lines = match step {
        None => bar_rows(array, area, |_| Style::default().fg(DEFAULT_THEME.fg)),
        Some(step) => bar_rows(&step.array, area, |i| {
            let in_pair = step.compared.is_some_and(|(a, b)| i == a || i == b);
            if in_pair {
                let color = if step.swapped {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.secondary
                };
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else if i < step.settled_prefix || i >= step.settled_suffix {
                Style::default().fg(DEFAULT_THEME.success)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            }
        }),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
