//! Tower of Hanoi peg rendering
//!
//! Three pegs drawn side by side, disks as centered blocks whose width
//! grows with the disk number. The disk moved by the current step is
//! highlighted.

use crate::algorithms::hanoi::HanoiStep;
use crate::ui::theme::{DEFAULT_THEME, SERIES};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the Hanoi scene. `step` is `None` before the first move, in
/// which case all `disks` disks sit on peg 0.
pub fn render_hanoi_pane(
    frame: &mut Frame,
    area: Rect,
    disks: usize,
    step: Option<&HanoiStep>,
    is_focused: bool,
) {
    let block = super::pane_block("Towers", is_focused);

    let initial: [Vec<u32>; 3] = [(1..=disks as u32).rev().collect(), Vec::new(), Vec::new()];
    let pegs = step.map(|s| &s.pegs).unwrap_or(&initial);
    let moved = step.map(|s| s.disk);

    // Column width fits the widest disk plus one space either side.
    let col = 2 * disks + 3;
    let mut lines: Vec<Line> = Vec::with_capacity(disks + 2);
    for row in (0..disks).rev() {
        let mut spans: Vec<Span> = Vec::with_capacity(3);
        for peg in pegs.iter() {
            match peg.get(row) {
                Some(&disk) => {
                    let width = 2 * disk as usize + 1;
                    let pad = (col - width) / 2;
                    let style = if moved == Some(disk) {
                        Style::default()
                            .fg(DEFAULT_THEME.secondary)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(SERIES[(disk as usize - 1) % SERIES.len()])
                    };
                    spans.push(Span::raw(" ".repeat(pad)));
                    spans.push(Span::styled("█".repeat(width), style));
                    spans.push(Span::raw(" ".repeat(col - pad - width)));
                }
                None => {
                    let pad = col / 2;
                    spans.push(Span::raw(" ".repeat(pad)));
                    spans.push(Span::styled("│", Style::default().fg(DEFAULT_THEME.comment)));
                    spans.push(Span::raw(" ".repeat(col - pad - 1)));
                }
            }
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled(
        "─".repeat(3 * col),
        Style::default().fg(DEFAULT_THEME.comment),
    ));
    lines.push(Line::from(
        (0..3)
            .map(|i| {
                Span::styled(
                    format!("{:^col$}", format!("peg {i}")),
                    Style::default().fg(DEFAULT_THEME.fg),
                )
            })
            .collect::<Vec<_>>(),
    ));
    if let Some(step) = step {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("move {} of {}", step.move_number, (1u32 << disks) - 1),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}
