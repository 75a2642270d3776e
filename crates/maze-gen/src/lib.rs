//! Maze generation for [`maze_core::Maze`].
//!
//! [`MazeGen::backtracker`] carves a *perfect* maze (exactly one route
//! between any two cells) with the recursive-backtracker algorithm;
//! [`MazeGen::remove_walls`] then knocks out extra interior walls so that
//! some cells gain alternative routes.

use maze_core::{Direction, Maze, Point};
use rand::Rng;

/// Maze generator driven by a caller-supplied random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect `width × height` maze, starting from a random cell.
    ///
    /// Uses an explicit stack: from the cell on top, step to a random
    /// unvisited neighbour and carve through, or pop when there is none.
    pub fn backtracker(&mut self, width: i32, height: i32) -> Maze {
        let mut maze = Maze::new(width, height);
        if maze.is_empty() {
            return maze;
        }
        let bounds = maze.bounds();
        let idx = |p: Point| (p.y * bounds.width() + p.x) as usize;
        let mut visited = vec![false; bounds.len()];

        let start = Point::new(
            self.rng.random_range(0..bounds.width()),
            self.rng.random_range(0..bounds.height()),
        );
        visited[idx(start)] = true;
        let mut stack = vec![start];
        let mut dirs = Vec::with_capacity(4);

        while let Some(&cur) = stack.last() {
            dirs.clear();
            dirs.extend(Direction::ALL.into_iter().filter(|&d| {
                let n = cur.step(d);
                bounds.contains(n) && !visited[idx(n)]
            }));
            if dirs.is_empty() {
                stack.pop();
                continue;
            }
            let dir = dirs[self.rng.random_range(0..dirs.len())];
            let next = cur.step(dir);
            maze.carve(cur, dir);
            visited[idx(next)] = true;
            stack.push(next);
        }
        maze
    }

    /// Remove up to `count` random interior walls, on both sides. Returns the
    /// number actually removed, which is smaller only when the maze runs out
    /// of interior walls.
    pub fn remove_walls(&mut self, maze: &mut Maze, count: usize) -> usize {
        let bounds = maze.bounds();
        let mut walls: Vec<(Point, Direction)> = maze
            .iter()
            .flat_map(|(p, cell)| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(move |&d| cell.blocks(d) && bounds.contains(p.step(d)))
                    .map(move |d| (p, d))
            })
            .collect();

        let mut removed = 0;
        while removed < count && !walls.is_empty() {
            let (p, dir) = walls.swap_remove(self.rng.random_range(0..walls.len()));
            maze.carve(p, dir);
            removed += 1;
        }
        removed
    }

    /// A perfect maze with `extra` additional walls removed.
    pub fn generate(&mut self, width: i32, height: i32, extra: usize) -> Maze {
        let mut maze = self.backtracker(width, height);
        self.remove_walls(&mut maze, extra);
        maze
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Open interior passages, each counted once.
    fn passages(maze: &Maze) -> usize {
        maze.iter()
            .map(|(p, _)| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&d| maze.can_move(p, d))
                    .count()
            })
            .sum()
    }

    fn reachable(maze: &Maze, from: Point) -> usize {
        let mut seen = vec![from];
        let mut stack = vec![from];
        while let Some(p) = stack.pop() {
            for d in Direction::ALL {
                let n = p.step(d);
                if maze.can_move(p, d) && !seen.contains(&n) {
                    seen.push(n);
                    stack.push(n);
                }
            }
        }
        seen.len()
    }

    fn walls_agree(maze: &Maze) -> bool {
        maze.iter().all(|(p, cell)| {
            Direction::ALL.into_iter().all(|d| match maze.at(p.step(d)) {
                Some(other) => cell.blocks(d) == other.blocks(d.opposite()),
                None => cell.blocks(d),
            })
        })
    }

    #[test]
    fn backtracker_builds_a_spanning_tree() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(7));
        let m = mg.backtracker(9, 6);
        assert_eq!(passages(&m), 9 * 6 - 1);
        assert_eq!(reachable(&m, Point::new(4, 3)), 9 * 6);
        assert!(walls_agree(&m));
    }

    #[test]
    fn remove_walls_adds_loops() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(11));
        let mut m = mg.backtracker(6, 6);
        assert_eq!(mg.remove_walls(&mut m, 5), 5);
        assert_eq!(passages(&m), 6 * 6 - 1 + 5);
        assert!(walls_agree(&m));
    }

    #[test]
    fn remove_walls_stops_when_none_left() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(3));
        let mut m = mg.backtracker(3, 2);
        // A 3x2 grid has 7 interior walls; 5 are carved by the backtracker.
        assert_eq!(mg.remove_walls(&mut m, 100), 2);
        assert_eq!(m, Maze::open(3, 2));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGen::new(StdRng::seed_from_u64(42)).generate(10, 10, 8);
        let b = MazeGen::new(StdRng::seed_from_u64(42)).generate(10, 10, 8);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_sizes() {
        let mut mg = MazeGen::new(rand::rng());
        assert!(mg.backtracker(0, 5).is_empty());
        assert!(mg.generate(-2, 3, 4).is_empty());
        assert_eq!(mg.backtracker(1, 1), Maze::new(1, 1));
    }
}
