//! **maze-core** — the grid model shared by the maze crates.
//!
//! This crate provides geometry primitives ([`Point`], [`Range`],
//! [`Direction`]) and the [`Maze`] itself: a rectangular grid of [`Cell`]s,
//! each carrying four independent wall flags.

pub mod geom;
pub mod maze;

pub use geom::{Direction, Point, Range};
pub use maze::{Cell, Maze, MazeError};
