//! CPU scheduling scene: Gantt timeline and process table
//!
//! The timeline draws one colored segment per scheduling decision made so
//! far, scaled to the pane width over the full schedule span, with tick
//! labels underneath. The process table shows arrival, burst, remaining,
//! and (on the terminal step) completion/turnaround/waiting.

use crate::algorithms::cpu::{CpuStep, Process};
use crate::ui::theme::{DEFAULT_THEME, SERIES};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn series_color(idx: usize) -> Color {
    SERIES[idx % SERIES.len()]
}

/// Render the CPU scheduling scene. `total_span` is the end time of the
/// full schedule (from the trace's terminal step), used as a stable scale
/// so the timeline grows left to right during playback.
pub fn render_cpu_pane(
    frame: &mut Frame,
    area: Rect,
    processes: &[Process],
    step: Option<&CpuStep>,
    total_span: u32,
    is_focused: bool,
) {
    let block = super::pane_block("CPU Schedule", is_focused);
    let mut lines: Vec<Line> = Vec::new();

    let width = area.width.saturating_sub(4).max(10) as u32;
    let span = total_span.max(1);

    // Timeline bar and tick labels.
    let mut bar: Vec<Span> = Vec::new();
    let mut ticks = String::new();
    if let Some(step) = step {
        for seg in &step.gantt {
            let start_col = (seg.start * width / span) as usize;
            let end_col = ((seg.end * width / span) as usize).max(start_col + 1);
            let w = end_col - start_col;
            match seg.process {
                Some(idx) => {
                    let label = &processes[idx].name;
                    let text = if w >= label.len() + 2 {
                        format!("{label:^w$}")
                    } else {
                        "█".repeat(w)
                    };
                    bar.push(Span::styled(
                        text,
                        Style::default().fg(Color::Black).bg(series_color(idx)),
                    ));
                }
                None => {
                    bar.push(Span::styled(
                        "░".repeat(w),
                        Style::default().fg(DEFAULT_THEME.comment),
                    ));
                }
            }
            while ticks.len() < start_col {
                ticks.push(' ');
            }
            ticks.push_str(&seg.start.to_string());
        }
        if let Some(last) = step.gantt.last() {
            let end_col = (last.end * width / span) as usize;
            while ticks.len() < end_col {
                ticks.push(' ');
            }
            ticks.push_str(&last.end.to_string());
        }
    }
    lines.push(Line::from(bar));
    lines.push(Line::styled(ticks, Style::default().fg(DEFAULT_THEME.comment)));
    lines.push(Line::raw(""));

    // Process table.
    let header = if step.and_then(|s| s.metrics.as_ref()).is_some() {
        format!(
            "{:<8} {:>7} {:>5} {:>10} {:>10} {:>7}",
            "process", "arrival", "burst", "completion", "turnaround", "waiting"
        )
    } else {
        format!(
            "{:<8} {:>7} {:>5} {:>9}  {}",
            "process", "arrival", "burst", "remaining", "state"
        )
    };
    lines.push(Line::styled(
        header,
        Style::default()
            .fg(DEFAULT_THEME.comment)
            .add_modifier(Modifier::BOLD),
    ));

    for (idx, p) in processes.iter().enumerate() {
        let name_span = Span::styled(
            format!("{:<8} ", p.name),
            Style::default().fg(series_color(idx)),
        );
        let row = match step {
            Some(step) => match &step.metrics {
                Some(metrics) => {
                    let m = &metrics[idx];
                    format!(
                        "{:>7} {:>5} {:>10} {:>10} {:>7}",
                        p.arrival, p.burst, m.completion, m.turnaround, m.waiting
                    )
                }
                None => {
                    let remaining = step.remaining[idx];
                    let just_ran = step
                        .gantt
                        .last()
                        .is_some_and(|seg| seg.process == Some(idx));
                    let state = if remaining == 0 {
                        "done"
                    } else if just_ran {
                        "preempted"
                    } else if p.arrival > step.time {
                        "not arrived"
                    } else {
                        "ready"
                    };
                    format!("{:>7} {:>5} {:>9}  {}", p.arrival, p.burst, remaining, state)
                }
            },
            None => format!("{:>7} {:>5} {:>9}  waiting", p.arrival, p.burst, p.burst),
        };
        lines.push(Line::from(vec![
            name_span,
            Span::styled(row, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    if let Some(step) = step {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("t = {}", step.time),
            Style::default().fg(DEFAULT_THEME.value),
        ));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
