//! Animated grid path search in the terminal.
//!
//! Run: cargo run --bin pathviz -- --algorithm dijkstra --speed 90
//!      cargo run --bin pathviz -- --compare --seed 7

use clap::Parser;
use pathviz_demos::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pathviz_demos::run(Args::parse())
}
