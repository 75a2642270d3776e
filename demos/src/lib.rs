//! Shared helpers for the demo binaries.
//!
//! Draws search output on top of the ASCII rendering of a [`Maze`].

use maze_core::{Maze, Point};

/// Mark drawn for a cell the search expanded.
pub const EXPLORED: char = '.';
/// Mark drawn for a cell on the path.
pub const PATH: char = '*';

/// Render `maze` with `explored` and `path` cells marked, and the endpoints
/// drawn as `S` and `G`. Later marks win, so a path cell shows as [`PATH`]
/// even if it was also explored.
pub fn overlay(maze: &Maze, from: Point, to: Point, explored: &[Point], path: &[Point]) -> String {
    let mut lines: Vec<Vec<char>> = maze
        .to_string()
        .lines()
        .map(|l| l.chars().collect())
        .collect();

    let mut mark = |p: Point, ch: char| {
        if !maze.bounds().contains(p) {
            return;
        }
        let (row, col) = (2 * p.y as usize + 1, 2 * p.x as usize + 1);
        lines[row][col] = ch;
    };
    for &p in explored {
        mark(p, EXPLORED);
    }
    for &p in path {
        mark(p, PATH);
    }
    mark(from, 'S');
    mark(to, 'G');

    let mut out = String::new();
    for line in lines {
        out.extend(line);
        out.push('\n');
    }
    out
}
