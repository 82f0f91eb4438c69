//! **pathviz-core**: grid model for the pathviz search engine.
//!
//! This crate provides geometry primitives, the [`Cell`] type with its
//! structural kind and per-run search annotations, and the [`Grid`] that
//! owns them. Search algorithms live in `pathviz-paths`; grid editing and
//! maze generation in `pathviz-build`.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind, VisitStatus};
pub use error::{ConfigError, GridParseError};
pub use geom::{Point, Range};
pub use grid::{Endpoints, Grid};
