use maze_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, Traversal};
use crate::traits::Pather;

impl PathRange {
    /// Find a path from `from` to `to` using depth-first search.
    ///
    /// Neighbors are tried North, East, South, West, so the first route found
    /// follows that priority; it is not necessarily the shortest. Returns the
    /// points after `from` up to and including `to`, or an empty vector if
    /// `to` cannot be reached.
    pub fn dfs_path<P: Pather>(&self, pather: &P, from: Point, to: Point) -> Vec<Point> {
        self.dfs(pather, from, to)
            .map(|t| self.path_to_goal(&t))
            .unwrap_or_default()
    }

    /// Depth-first expansion order from `from`, excluding `from` itself.
    ///
    /// Stops right after expanding `to`. If `to` is never reached the whole
    /// component reachable from `from` is returned.
    pub fn dfs_explore<P: Pather>(&self, pather: &P, from: Point, to: Point) -> Vec<Point> {
        self.dfs(pather, from, to)
            .map(|t| t.explored)
            .unwrap_or_default()
    }

    /// Points are marked visited when popped, so the stack may hold
    /// duplicates, but no point is expanded twice. The predecessor recorded is
    /// the one whose stack entry was popped first.
    fn dfs<P: Pather>(&self, pather: &P, from: Point, to: Point) -> Option<Traversal> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to);

        let mut t = Traversal::new(self.len());
        let mut visited = vec![false; self.len()];
        let mut stack: Vec<(usize, usize)> = vec![(start_idx, NO_PARENT)];
        let mut nbuf = Vec::with_capacity(4);

        while let Some((ci, parent)) = stack.pop() {
            if visited[ci] {
                continue;
            }
            visited[ci] = true;
            t.parents[ci] = parent;

            let cp = self.point(ci);
            if ci != start_idx {
                t.explored.push(cp);
            }
            if Some(ci) == goal_idx {
                t.reached = Some(ci);
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            // Push in reverse so the first direction is popped first.
            for &np in nbuf.iter().rev() {
                if let Some(ni) = self.idx(np) {
                    if !visited[ni] {
                        stack.push((ni, ci));
                    }
                }
            }
        }

        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Maze;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn prefers_east_before_south_in_open_room() {
        let m = Maze::open(3, 3);
        let pr = PathRange::new(m.bounds());
        let path = pr.dfs_path(&m, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(path, pts(&[(1, 0), (2, 0), (2, 1), (2, 2)]));
        assert_eq!(
            pr.dfs_explore(&m, Point::new(0, 0), Point::new(2, 2)),
            path
        );
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let m = Maze::parse(
            "\
+-+-+-+
|   | |
+ + + +
| |   |
+-+-+-+",
        )
        .unwrap();
        let pr = PathRange::new(m.bounds());
        let from = Point::new(0, 0);
        let to = Point::new(2, 0);
        // East first: (1,0) -> south (1,1) -> east (2,1) -> north (2,0).
        assert_eq!(
            pr.dfs_path(&m, from, to),
            pts(&[(1, 0), (1, 1), (2, 1), (2, 0)])
        );
        // (0,1) is a dead end never touched before the goal.
        assert_eq!(
            pr.dfs_explore(&m, from, to),
            pts(&[(1, 0), (1, 1), (2, 1), (2, 0)])
        );
        // Looking for an unreachable point expands the whole component once.
        let all = pr.dfs_explore(&m, from, Point::new(9, 9));
        assert_eq!(all.len(), 5);
        assert_eq!(all.last(), Some(&Point::new(0, 1)));
    }

    #[test]
    fn path_excludes_abandoned_branches() {
        // From (0,1): north and east are dead ends, the goal is south.
        let m = Maze::parse(
            "\
+-+-+
|   |
+ +-+
|   |
+ +-+
|   |
+-+-+",
        )
        .unwrap();
        let pr = PathRange::new(m.bounds());
        let from = Point::new(0, 1);
        let to = Point::new(1, 2);
        assert_eq!(
            pr.dfs_explore(&m, from, to),
            pts(&[(0, 0), (1, 0), (1, 1), (0, 2), (1, 2)])
        );
        assert_eq!(pr.dfs_path(&m, from, to), pts(&[(0, 2), (1, 2)]));
    }

    #[test]
    fn out_of_range_start_yields_nothing() {
        let m = Maze::open(2, 2);
        let pr = PathRange::new(m.bounds());
        assert!(pr.dfs_path(&m, Point::new(-1, 0), Point::new(1, 1)).is_empty());
        assert!(pr.dfs_explore(&m, Point::new(-1, 0), Point::new(1, 1)).is_empty());
    }
}
