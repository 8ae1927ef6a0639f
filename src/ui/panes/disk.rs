//! Disk scheduling scene: cylinder track, head marker, and service log
//!
//! The track is one ruler line spanning the cylinder range, with pending
//! requests, already-serviced requests, and the head position marked on
//! it. Below, the service order so far and the cumulative head movement.

use crate::algorithms::disk::DiskStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Track,
    Pending,
    Serviced,
    Head,
}

/// Render the disk scheduling scene. `step` is `None` before the first
/// seek; the head then sits at `start_head` with every request pending.
pub fn render_disk_pane(
    frame: &mut Frame,
    area: Rect,
    cylinders: u32,
    start_head: u32,
    requests: &[u32],
    step: Option<&DiskStep>,
    is_focused: bool,
) {
    let block = super::pane_block("Disk Track", is_focused);

    let track_w = area.width.saturating_sub(4).max(10) as usize;
    let col_of = |c: u32| -> usize {
        if cylinders <= 1 {
            0
        } else {
            (c as usize * (track_w - 1)) / (cylinders as usize - 1)
        }
    };

    let head = step.map(|s| s.head).unwrap_or(start_head);
    let pending: Vec<u32> = step.map(|s| s.pending.clone()).unwrap_or_else(|| requests.to_vec());
    let serviced: Vec<u32> = step.map(|s| s.order.clone()).unwrap_or_default();

    let mut marks = vec![Mark::Track; track_w];
    for &r in &serviced {
        marks[col_of(r)] = Mark::Serviced;
    }
    for &r in &pending {
        marks[col_of(r)] = Mark::Pending;
    }
    marks[col_of(head)] = Mark::Head;

    let track: Vec<Span> = marks
        .iter()
        .map(|m| match m {
            Mark::Track => Span::styled("─", Style::default().fg(DEFAULT_THEME.comment)),
            Mark::Pending => Span::styled("●", Style::default().fg(DEFAULT_THEME.primary)),
            Mark::Serviced => Span::styled("○", Style::default().fg(DEFAULT_THEME.comment)),
            Mark::Head => Span::styled(
                "▼",
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        })
        .collect();

    let edge_label = format!(
        "{:<w$}{}",
        0,
        cylinders - 1,
        w = track_w.saturating_sub((cylinders - 1).to_string().len())
    );

    let mut lines = vec![
        Line::from(track),
        Line::styled(edge_label, Style::default().fg(DEFAULT_THEME.comment)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("head: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                head.to_string(),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
        ]),
        Line::from(vec![
            Span::styled("pending: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format_list(&pending),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
        ]),
        Line::from(vec![
            Span::styled("serviced: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(format_list(&serviced), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
    ];

    if let Some(step) = step {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(
                "total movement: ",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!("{} cylinders", step.total_movement),
                Style::default()
                    .fg(DEFAULT_THEME.value)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn format_list(values: &[u32]) -> String {
    if values.is_empty() {
        "(none)".to_string()
    } else {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
