//! Search algorithms for walled maze grids.
//!
//! This crate finds routes through a [`Maze`](maze_core::Maze) from a start
//! to a goal, or reports the order in which cells were visited while
//! searching:
//!
//! - **DFS** depth-first, North/East/South/West priority ([`PathRange::dfs_path`])
//! - **BFS** breadth-first, fewest moves ([`PathRange::bfs_path`])
//! - **A\*** Manhattan-guided, fewest moves ([`PathRange::astar_path`])
//!
//! Each has an *explore* variant returning the expansion order for
//! visualization. [`search`] dispatches on a [`Strategy`] and is what game
//! code normally calls.
//!
//! Every returned sequence excludes the start point. Path variants return an
//! empty sequence when the goal cannot be reached; explore variants return
//! everything they expanded.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | DFS, BFS |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod bfs;
mod dfs;
mod distance;
mod maze;
mod path;
mod pathrange;
mod strategy;
mod traits;

pub use distance::manhattan;
pub use pathrange::{Exploration, PathRange};
pub use strategy::{ParseStrategyError, Strategy, astar_exploration, list_strategies, search};
pub use traits::{AstarPather, Pather};
