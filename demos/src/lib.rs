//! Terminal front end for the pathviz search engine.
//!
//! Two modes:
//! - interactive (default): paint walls with the mouse, pick an algorithm
//!   and watch the search unfold. The engine runs on a worker thread and
//!   ships frames to the UI thread over a channel.
//! - `--compare`: run every algorithm headless on one grid and print a
//!   table.

pub mod compare;
pub mod term;
pub mod viewer;

use std::error::Error;

use clap::Parser;
use pathviz_build::{DEFAULT_SIZE, Layout, MazeGen};
use pathviz_core::Grid;
use pathviz_paths::{Algorithm, DEFAULT_SPEED, SearchConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Command-line options.
#[derive(Parser, Debug, Clone)]
#[command(name = "pathviz", version, about = "Animated grid path search in the terminal")]
pub struct Args {
    /// Algorithm to start with: astar, dijkstra, bfs, dfs, greedy or bellman-ford.
    #[arg(short, long, default_value_t = Algorithm::AStar)]
    pub algorithm: Algorithm,

    /// Animation speed from 0 (slowest) to 100 (no delay).
    #[arg(short, long, default_value_t = DEFAULT_SPEED,
          value_parser = clap::value_parser!(u32).range(0..=100))]
    pub speed: u32,

    /// Side length of the square grid.
    #[arg(long, default_value_t = DEFAULT_SIZE,
          value_parser = clap::value_parser!(i32).range(2..=100))]
    pub size: i32,

    /// Seed for the maze generator. Fresh entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from an empty grid instead of a random maze.
    #[arg(long)]
    pub empty: bool,

    /// Run every algorithm without animation and print a comparison table.
    #[arg(long)]
    pub compare: bool,
}

impl Args {
    pub fn layout(&self) -> Layout {
        Layout::square(self.size)
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig::with_speed(self.algorithm, self.speed)
    }
}

/// A maze generator seeded from `seed`, or from the OS when absent.
pub fn maze_gen(seed: Option<u64>) -> MazeGen<StdRng> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    MazeGen::new(rng)
}

/// The grid the session starts with.
pub fn initial_grid(args: &Args, maze: &mut MazeGen<StdRng>) -> Grid {
    let layout = args.layout();
    if args.empty {
        return layout.build();
    }
    let (grid, walls) = maze.random_maze(&layout);
    log::info!("generated {}x{} maze with {walls} walls", layout.width, layout.height);
    grid
}

/// Entry point shared by the binary.
pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.compare {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init();
        let mut maze = maze_gen(args.seed);
        let grid = initial_grid(&args, &mut maze);
        let rows = compare::compare(&grid)?;
        println!("{}", grid.to_ascii());
        println!();
        print!("{}", compare::Table(&rows));
        return Ok(());
    }
    viewer::Viewer::new(&args).run()
}
