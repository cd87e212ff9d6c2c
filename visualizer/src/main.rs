//! Terminal pathfinding visualizer.
//!
//! Run: cargo run --bin pathviz -- --algorithm astar --maze dfs-maze

use clap::Parser;
use pathviz_core::app::{App, AppConfig};
use pathviz_crossterm::CrosstermDriver;
use pathviz_mazes::MazeType;
use pathviz_paths::Algorithm;
use visualizer::{DEFAULT_COLS, DEFAULT_ROWS, Visualizer, VisualizerConfig};

#[derive(Debug, Parser)]
#[command(
    name = "pathviz",
    version,
    about = "Watch BFS, DFS, greedy and A* explore a grid in the terminal"
)]
struct Cli {
    /// Search algorithm selected at start-up (bfs, dfs, greedy, astar)
    #[arg(short, long, default_value = "bfs")]
    algorithm: Algorithm,

    /// Wall pattern generated at start-up (e.g. random, spiral, dfs-maze)
    #[arg(short, long, default_value = "none")]
    maze: MazeType,

    /// Board rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Board columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Seed for maze generation
    #[arg(long)]
    seed: Option<u64>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,
}

fn main() {
    let cli = Cli::parse();
    let model = Visualizer::new(VisualizerConfig {
        rows: cli.rows,
        cols: cli.cols,
        algorithm: cli.algorithm,
        maze: cli.maze,
        seed: cli.seed,
        ..VisualizerConfig::default()
    });

    let (rows, cols) = CrosstermDriver::terminal_size().unwrap_or_else(|_| model.screen_size());
    let driver = CrosstermDriver::new().with_mouse(!cli.no_mouse);
    let mut app = App::new(AppConfig {
        model,
        driver,
        rows,
        cols,
    });

    if let Err(e) = app.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
