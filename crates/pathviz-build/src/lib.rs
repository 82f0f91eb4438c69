//! Grid editing for pathviz.
//!
//! - [`Layout`]: grid size and default endpoint placement.
//! - [`clear_path`] / [`clear_all`]: the two reset buttons.
//! - [`Brush`]: press-and-drag wall painting.
//! - [`MazeGen`]: random walls plus a few line and L-shaped segments.

pub mod brush;
pub mod layout;
pub mod mazegen;

pub use brush::{Brush, BrushMode};
pub use layout::{DEFAULT_SIZE, Layout, clear_all, clear_path};
pub use mazegen::MazeGen;
