//! Main TUI application state and logic
//!
//! [`App`] owns one [`Scene`] (the generated trace plus the static inputs
//! needed to render the pre-start state) and one [`Playback`] controller.
//! The event loop polls input with a short timeout so the controller's
//! auto-advance tick fires between key events.

use crate::algorithms::cpu::{CpuKind, CpuStep, Process};
use crate::algorithms::disk::{DiskKind, DiskStep};
use crate::algorithms::hanoi::HanoiStep;
use crate::algorithms::paging::{PagingKind, PagingStep};
use crate::algorithms::search::SearchStep;
use crate::algorithms::sort::{SortKind, SortStep};
use crate::playback::Playback;
use crate::trace::Trace;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Scene,
    Log,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Scene => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Scene,
        }
    }
}

/// One visualizer's trace plus the inputs needed to render step "-1".
pub enum Scene {
    Search {
        trace: Trace<SearchStep>,
        array: Vec<i64>,
        target: i64,
        mode: &'static str,
    },
    Sort {
        trace: Trace<SortStep>,
        array: Vec<i64>,
        kind: SortKind,
    },
    Hanoi {
        trace: Trace<HanoiStep>,
        disks: usize,
    },
    Cpu {
        trace: Trace<CpuStep>,
        processes: Vec<Process>,
        kind: CpuKind,
    },
    Disk {
        trace: Trace<DiskStep>,
        cylinders: u32,
        head: u32,
        requests: Vec<u32>,
        kind: DiskKind,
    },
    Paging {
        trace: Trace<PagingStep>,
        frame_count: usize,
        references: Vec<u32>,
        kind: PagingKind,
    },
}

impl Scene {
    /// Number of steps in the underlying trace.
    pub fn len(&self) -> usize {
        match self {
            Scene::Search { trace, .. } => trace.len(),
            Scene::Sort { trace, .. } => trace.len(),
            Scene::Hanoi { trace, .. } => trace.len(),
            Scene::Cpu { trace, .. } => trace.len(),
            Scene::Disk { trace, .. } => trace.len(),
            Scene::Paging { trace, .. } => trace.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable name shown on startup.
    pub fn title(&self) -> String {
        match self {
            Scene::Search { mode, target, .. } => format!("{mode} search for {target}"),
            Scene::Sort { kind, array, .. } => {
                format!("{} over {} elements", kind.name(), array.len())
            }
            Scene::Hanoi { disks, .. } => format!("Tower of Hanoi with {disks} disks"),
            Scene::Cpu { kind, processes, .. } => {
                format!("{} over {} processes", kind.name(), processes.len())
            }
            Scene::Disk { kind, requests, .. } => {
                format!("{} over {} requests", kind.name(), requests.len())
            }
            Scene::Paging { kind, frame_count, .. } => {
                format!("{} with {frame_count} frames", kind.name())
            }
        }
    }

    /// Step descriptions in order, for the log pane.
    pub fn descriptions(&self) -> Vec<&str> {
        match self {
            Scene::Search { trace, .. } => {
                trace.iter().map(|s| s.description.as_str()).collect()
            }
            Scene::Sort { trace, .. } => trace.iter().map(|s| s.description.as_str()).collect(),
            Scene::Hanoi { trace, .. } => trace.iter().map(|s| s.description.as_str()).collect(),
            Scene::Cpu { trace, .. } => trace.iter().map(|s| s.description.as_str()).collect(),
            Scene::Disk { trace, .. } => trace.iter().map(|s| s.description.as_str()).collect(),
            Scene::Paging { trace, .. } => trace.iter().map(|s| s.description.as_str()).collect(),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, current: Option<usize>, is_focused: bool) {
        match self {
            Scene::Search {
                trace,
                array,
                target,
                ..
            } => {
                let step = current.and_then(|i| trace.get(i));
                super::panes::render_search_pane(frame, area, array, *target, step, is_focused);
            }
            Scene::Sort { trace, array, .. } => {
                let step = current.and_then(|i| trace.get(i));
                super::panes::render_sort_pane(frame, area, array, step, is_focused);
            }
            Scene::Hanoi { trace, disks } => {
                let step = current.and_then(|i| trace.get(i));
                super::panes::render_hanoi_pane(frame, area, *disks, step, is_focused);
            }
            Scene::Cpu {
                trace, processes, ..
            } => {
                let step = current.and_then(|i| trace.get(i));
                let total_span = trace.last().map(|s| s.time).unwrap_or(1);
                super::panes::render_cpu_pane(frame, area, processes, step, total_span, is_focused);
            }
            Scene::Disk {
                trace,
                cylinders,
                head,
                requests,
                ..
            } => {
                let step = current.and_then(|i| trace.get(i));
                super::panes::render_disk_pane(
                    frame, area, *cylinders, *head, requests, step, is_focused,
                );
            }
            Scene::Paging {
                trace,
                frame_count,
                references,
                ..
            } => {
                super::panes::render_paging_pane(
                    frame,
                    area,
                    *frame_count,
                    references,
                    trace,
                    current,
                    is_focused,
                );
            }
        }
    }
}

/// The main application state
pub struct App {
    pub scene: Scene,
    pub playback: Playback,
    pub focused_pane: FocusedPane,
    /// Manual log scroll; `None` = auto-follow the current step.
    pub log_scroll: Option<usize>,
    pub should_quit: bool,
    pub status_message: String,
    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app for the given scene.
    pub fn new(scene: Scene) -> Self {
        let playback = Playback::new(scene.len());
        let status_message = scene.title();
        App {
            scene,
            playback,
            focused_pane: FocusedPane::Scene,
            log_scroll: None,
            should_quit: false,
            status_message,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.playback.tick(Instant::now()) {
                self.log_scroll = None;
                self.status_message = if self.playback.at_end() {
                    "Playback complete".to_string()
                } else {
                    "Playing...".to_string()
                };
            }

            // Poll with timeout so the auto-advance tick keeps firing.
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

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        let current = self.playback.current_step();
        self.scene.render(
            frame,
            columns[0],
            current,
            self.focused_pane == FocusedPane::Scene,
        );

        let descriptions = self.scene.descriptions();
        super::panes::render_log_pane(
            frame,
            columns[1],
            &descriptions,
            current,
            self.log_scroll,
            self.focused_pane == FocusedPane::Log,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.playback,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                for _ in 0..n {
                    self.playback.step_forward();
                }
                self.log_scroll = None;
                self.status_message = format!("Stepped forward {n} step(s)");
            }
            KeyCode::Left => {
                self.playback.step_back();
                self.log_scroll = None;
                self.status_message = "Stepped backward".to_string();
            }
            KeyCode::Right => {
                self.playback.step_forward();
                self.log_scroll = None;
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.playback.toggle(Instant::now());
                    self.status_message = if self.playback.is_playing() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter | KeyCode::End => {
                self.playback.go_to_end();
                self.log_scroll = None;
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace | KeyCode::Home => {
                self.playback.go_to_start();
                self.log_scroll = None;
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.playback.speed_up();
                self.status_message = format!("Speed {}x", self.playback.speed());
            }
            KeyCode::Char('-') => {
                self.playback.speed_down();
                self.status_message = format!("Speed {}x", self.playback.speed());
            }
            KeyCode::Char('r') => {
                let len = self.scene.len();
                self.playback.reset(len);
                self.log_scroll = None;
                self.status_message = "Reset to start".to_string();
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Log {
                    let base = self.current_log_offset();
                    self.log_scroll = Some(base.saturating_sub(1));
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Log {
                    let base = self.current_log_offset();
                    self.log_scroll = Some(base.saturating_add(1));
                }
            }
            _ => {}
        }
    }

    fn current_log_offset(&self) -> usize {
        self.log_scroll
            .or(self.playback.current_step())
            .unwrap_or(0)
    }
}
