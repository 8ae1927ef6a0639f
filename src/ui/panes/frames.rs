//! Page replacement scene: reference string and frame grid
//!
//! The reference string runs across the top with past references colored
//! by verdict (hit or fault) and the current one highlighted. The grid
//! below has one column per processed reference showing the frame contents
//! after it, clipped to the columns that fit the pane.

use crate::algorithms::paging::PagingStep;
use crate::trace::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the paging scene. `current` indexes into `trace`; `None` means
/// nothing has been referenced yet.
pub fn render_paging_pane(
    frame: &mut Frame,
    area: Rect,
    frame_count: usize,
    references: &[u32],
    trace: &Trace<PagingStep>,
    current: Option<usize>,
    is_focused: bool,
) {
    let block = super::pane_block("Page Frames", is_focused);
    let mut lines: Vec<Line> = Vec::new();

    // Reference string with verdict coloring.
    let mut ref_spans: Vec<Span> = vec![Span::styled(
        "refs: ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    for (i, &page) in references.iter().enumerate() {
        let style = match current {
            Some(cur) if i == cur => Style::default()
                .fg(DEFAULT_THEME.accent)
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD),
            Some(cur) if i < cur => {
                let hit = trace.get(i).map(|s| s.hit).unwrap_or(false);
                Style::default().fg(if hit {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.error
                })
            }
            _ => Style::default().fg(DEFAULT_THEME.comment),
        };
        ref_spans.push(Span::styled(format!("{page:>3}"), style));
    }
    lines.push(Line::from(ref_spans));
    lines.push(Line::raw(""));

    // Frame grid: one column per processed reference, newest on the right.
    let processed = current.map(|c| c + 1).unwrap_or(0);
    let col_w = 4;
    let max_cols = (area.width.saturating_sub(10) as usize / col_w).max(1);
    let first_col = processed.saturating_sub(max_cols);

    for row in 0..frame_count {
        let mut spans: Vec<Span> = vec![Span::styled(
            format!("f{row}:   "),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        for i in first_col..processed {
            let Some(step) = trace.get(i) else {
                continue;
            };
            let cell = match step.frames.get(row).copied().flatten() {
                Some(page) => format!("{page:>3} "),
                None => "  . ".to_string(),
            };
            let changed = !step.hit && step.frames.get(row).copied().flatten() == Some(step.reference);
            let style = if changed && i + 1 == processed {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            spans.push(Span::styled(cell, style));
        }
        lines.push(Line::from(spans));
    }

    if let Some(cur) = current {
        if let Some(step) = trace.get(cur) {
            lines.push(Line::raw(""));
            let verdict = if step.hit { "hit" } else { "fault" };
            let verdict_color = if step.hit {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.error
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("page {}: ", step.reference),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    verdict,
                    Style::default().fg(verdict_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("   faults: {}/{}", step.faults, cur + 1),
                    Style::default().fg(DEFAULT_THEME.value),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
