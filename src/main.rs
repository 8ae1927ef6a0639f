// algoscope: terminal step-through visualizer for classic algorithms

mod algorithms;
mod playback;
mod trace;
mod ui;

use std::io;

use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algorithms::cpu::{cpu_trace, CpuKind, Process};
use algorithms::disk::{disk_trace, DiskKind};
use algorithms::errors::InputError;
use algorithms::hanoi::hanoi_trace;
use algorithms::paging::{paging_trace, PagingKind};
use algorithms::search::{binary_search_trace, linear_search_trace};
use algorithms::sort::{sort_trace, SortKind};
use ui::{App, Scene};

#[derive(Parser)]
#[command(name = "algoscope", version, about = "Step through classic algorithms in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a sorted array for a target value
    Search {
        #[arg(long, value_enum, default_value_t = SearchMode::Binary)]
        mode: SearchMode,
        /// Comma-separated values; random sorted array when omitted
        #[arg(long, value_delimiter = ',')]
        values: Option<Vec<i64>>,
        /// Size of the generated array
        #[arg(long, default_value_t = 15)]
        size: usize,
        /// Seed for array generation
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Target value; defaults to an element two thirds into the array
        #[arg(long)]
        target: Option<i64>,
    },
    /// Sort an array, one comparison at a time
    Sort {
        #[arg(long, value_enum, default_value_t = SortAlg::Bubble)]
        algorithm: SortAlg,
        /// Comma-separated values; random array when omitted
        #[arg(long, value_delimiter = ',')]
        values: Option<Vec<i64>>,
        /// Size of the generated array
        #[arg(long, default_value_t = 16)]
        size: usize,
        /// Seed for array generation
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Solve the Tower of Hanoi
    Hanoi {
        #[arg(long, default_value_t = 4)]
        disks: usize,
    },
    /// Schedule CPU processes onto a Gantt timeline
    Cpu {
        #[arg(long, value_enum, default_value_t = CpuAlg::Fcfs)]
        algorithm: CpuAlg,
        /// Time quantum (round-robin only)
        #[arg(long, default_value_t = 2)]
        quantum: u32,
        /// Process as name:arrival:burst; repeatable. A textbook default
        /// set is used when omitted.
        #[arg(long = "process", value_parser = parse_process)]
        processes: Vec<Process>,
    },
    /// Service a disk request queue
    Disk {
        #[arg(long, value_enum, default_value_t = DiskAlg::Sstf)]
        algorithm: DiskAlg,
        #[arg(long, default_value_t = 200)]
        cylinders: u32,
        /// Starting head position
        #[arg(long, default_value_t = 53)]
        head: u32,
        /// Comma-separated request queue
        #[arg(long, value_delimiter = ',', default_values_t = vec![98u32, 183, 37, 122, 14, 124, 65, 67])]
        requests: Vec<u32>,
    },
    /// Replay a page reference string against fixed frames
    Paging {
        #[arg(long, value_enum, default_value_t = PagingAlg::Fifo)]
        algorithm: PagingAlg,
        #[arg(long, default_value_t = 3)]
        frames: usize,
        /// Comma-separated reference string; random when omitted
        #[arg(long = "refs", value_delimiter = ',')]
        references: Option<Vec<u32>>,
        /// Length of the generated reference string
        #[arg(long, default_value_t = 20)]
        size: usize,
        /// Seed for reference string generation
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SearchMode {
    Linear,
    Binary,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortAlg {
    Bubble,
    Selection,
    Insertion,
}

#[derive(Clone, Copy, ValueEnum)]
enum CpuAlg {
    Fcfs,
    Rr,
}

#[derive(Clone, Copy, ValueEnum)]
enum DiskAlg {
    Fcfs,
    Sstf,
    Scan,
}

#[derive(Clone, Copy, ValueEnum)]
enum PagingAlg {
    Fifo,
    Lru,
}

fn parse_process(s: &str) -> Result<Process, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [name, arrival, burst] = parts[..] else {
        return Err(format!("expected name:arrival:burst, got '{s}'"));
    };
    Ok(Process {
        name: name.to_string(),
        arrival: arrival
            .parse()
            .map_err(|_| format!("invalid arrival time '{arrival}'"))?,
        burst: burst
            .parse()
            .map_err(|_| format!("invalid burst time '{burst}'"))?,
    })
}

fn default_processes() -> Vec<Process> {
    [("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8), ("P4", 3, 6)]
        .into_iter()
        .map(|(name, arrival, burst)| Process {
            name: name.to_string(),
            arrival,
            burst,
        })
        .collect()
}

fn build_scene(command: Command) -> Result<Scene, InputError> {
    match command {
        Command::Search {
            mode,
            values,
            size,
            seed,
            target,
        } => {
            let array = values.unwrap_or_else(|| algorithms::random_sorted_array(size, seed));
            let target =
                target.unwrap_or_else(|| array.get(array.len() * 2 / 3).copied().unwrap_or(0));
            let (trace, mode) = match mode {
                SearchMode::Linear => (linear_search_trace(&array, target)?, "Linear"),
                SearchMode::Binary => (binary_search_trace(&array, target)?, "Binary"),
            };
            Ok(Scene::Search {
                trace,
                array,
                target,
                mode,
            })
        }
        Command::Sort {
            algorithm,
            values,
            size,
            seed,
        } => {
            let array = values.unwrap_or_else(|| algorithms::random_array(size, seed));
            let kind = match algorithm {
                SortAlg::Bubble => SortKind::Bubble,
                SortAlg::Selection => SortKind::Selection,
                SortAlg::Insertion => SortKind::Insertion,
            };
            let trace = sort_trace(kind, &array)?;
            Ok(Scene::Sort { trace, array, kind })
        }
        Command::Hanoi { disks } => {
            let trace = hanoi_trace(disks)?;
            Ok(Scene::Hanoi { trace, disks })
        }
        Command::Cpu {
            algorithm,
            quantum,
            processes,
        } => {
            let processes = if processes.is_empty() {
                default_processes()
            } else {
                processes
            };
            let kind = match algorithm {
                CpuAlg::Fcfs => CpuKind::Fcfs,
                CpuAlg::Rr => CpuKind::RoundRobin { quantum },
            };
            let trace = cpu_trace(kind, &processes)?;
            Ok(Scene::Cpu {
                trace,
                processes,
                kind,
            })
        }
        Command::Disk {
            algorithm,
            cylinders,
            head,
            requests,
        } => {
            let kind = match algorithm {
                DiskAlg::Fcfs => DiskKind::Fcfs,
                DiskAlg::Sstf => DiskKind::Sstf,
                DiskAlg::Scan => DiskKind::Scan,
            };
            let trace = disk_trace(kind, cylinders, head, &requests)?;
            Ok(Scene::Disk {
                trace,
                cylinders,
                head,
                requests,
                kind,
            })
        }
        Command::Paging {
            algorithm,
            frames,
            references,
            size,
            seed,
        } => {
            let references =
                references.unwrap_or_else(|| algorithms::random_reference_string(size, 8, seed));
            let kind = match algorithm {
                PagingAlg::Fifo => PagingKind::Fifo,
                PagingAlg::Lru => PagingKind::Lru,
            };
            let trace = paging_trace(kind, frames, &references)?;
            Ok(Scene::Paging {
                trace,
                frame_count: frames,
                references,
                kind,
            })
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Validate inputs and build the full trace before touching the terminal.
    let scene = match build_scene(cli.command) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(scene);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}
