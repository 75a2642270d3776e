//! Strategy selection: the entry point game code calls.

use std::fmt;
use std::str::FromStr;

use maze_core::{Maze, Point};

use crate::{Exploration, PathRange};

/// Which search to run and what to return.
///
/// `*Explore` variants return the order cells were expanded in, for
/// animating the search; the others return the route to walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Strategy {
    Dfs,
    DfsExplore,
    Bfs,
    BfsExplore,
    Astar,
    AstarExplore,
}

impl Strategy {
    /// Every strategy, in the order a selection menu lists them.
    pub const ALL: [Strategy; 6] = [
        Strategy::Dfs,
        Strategy::DfsExplore,
        Strategy::Bfs,
        Strategy::BfsExplore,
        Strategy::Astar,
        Strategy::AstarExplore,
    ];

    /// Stable identifier, e.g. `"BFS_EXPLORE"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::Dfs => "DFS",
            Strategy::DfsExplore => "DFS_EXPLORE",
            Strategy::Bfs => "BFS",
            Strategy::BfsExplore => "BFS_EXPLORE",
            Strategy::Astar => "ASTAR",
            Strategy::AstarExplore => "ASTAR_EXPLORE",
        }
    }

    /// Whether this strategy returns an expansion order rather than a path.
    pub const fn is_explore(self) -> bool {
        matches!(
            self,
            Strategy::DfsExplore | Strategy::BfsExplore | Strategy::AstarExplore
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// Error returned when parsing an unknown strategy identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search strategy \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseStrategyError {}

/// All strategies in menu order.
pub fn list_strategies() -> &'static [Strategy] {
    &Strategy::ALL
}

/// Run `strategy` over `maze` from `from` to `to`.
///
/// The result never contains `from`. Path strategies return the moves to
/// make, or nothing if `to` is unreachable; explore strategies return the
/// expansion order, which covers the whole reachable component when `to` is
/// never found. An empty maze, an out-of-bounds `from`, or `from == to` all
/// yield an empty result.
pub fn search(maze: &Maze, from: Point, to: Point, strategy: Strategy) -> Vec<Point> {
    if maze.is_empty() {
        log::trace!("{strategy}: empty maze, nothing to search");
        return Vec::new();
    }
    let pr = PathRange::new(maze.bounds());
    let result = match strategy {
        Strategy::Dfs => pr.dfs_path(maze, from, to),
        Strategy::DfsExplore => pr.dfs_explore(maze, from, to),
        Strategy::Bfs => pr.bfs_path(maze, from, to),
        Strategy::BfsExplore => pr.bfs_explore(maze, from, to),
        Strategy::Astar => pr.astar_path(maze, from, to),
        Strategy::AstarExplore => pr.astar_explore(maze, from, to).explored,
    };
    log::debug!(
        "{strategy} {from} -> {to} on {}x{}: {} points",
        maze.width(),
        maze.height(),
        result.len()
    );
    result
}

/// Run A* and return both the expansion order and the optimal path.
pub fn astar_exploration(maze: &Maze, from: Point, to: Point) -> Exploration {
    if maze.is_empty() {
        log::trace!("astar exploration: empty maze, nothing to search");
        return Exploration::default();
    }
    let e = PathRange::new(maze.bounds()).astar_explore(maze, from, to);
    log::debug!(
        "astar exploration {from} -> {to}: {} explored, {} path",
        e.explored.len(),
        e.path.len()
    );
    e
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_uses_identifiers() {
        let json = serde_json::to_string(&Strategy::AstarExplore).unwrap();
        assert_eq!(json, "\"ASTAR_EXPLORE\"");
        let back: Strategy = serde_json::from_str("\"DFS_EXPLORE\"").unwrap();
        assert_eq!(back, Strategy::DfsExplore);
    }
}
