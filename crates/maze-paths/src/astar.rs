use std::collections::BinaryHeap;

use maze_core::Point;

use crate::pathrange::{NodeRef, Traversal, UNREACHABLE};
use crate::traits::AstarPather;
use crate::{Exploration, PathRange};

impl PathRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the points after `from` up to and including `to`, or an empty
    /// vector if `to` cannot be reached.
    pub fn astar_path<P: AstarPather>(&self, pather: &P, from: Point, to: Point) -> Vec<Point> {
        self.astar(pather, from, to)
            .map(|t| self.path_to_goal(&t))
            .unwrap_or_default()
    }

    /// Run A* and report both the expansion order and the optimal path.
    ///
    /// `explored` lists every point taken off the open set, excluding `from`,
    /// and ends with `to` when it was reached; otherwise it covers the whole
    /// component. `path` is empty when `to` is unreachable.
    pub fn astar_explore<P: AstarPather>(&self, pather: &P, from: Point, to: Point) -> Exploration {
        match self.astar(pather, from, to) {
            Some(t) => Exploration {
                path: self.path_to_goal(&t),
                explored: t.explored,
            },
            None => Exploration::default(),
        }
    }

    /// The open set is a binary heap with lazy deletion: improving a cost
    /// pushes a fresh entry and the outdated one is discarded when popped.
    /// Ties on `f` go to the entry pushed first.
    ///
    /// Closed points are never reopened. This keeps paths optimal as long as
    /// the heuristic is consistent, which Manhattan distance is for unit-cost
    /// 4-way moves.
    fn astar<P: AstarPather>(&self, pather: &P, from: Point, to: Point) -> Option<Traversal> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to);

        let mut t = Traversal::new(self.len());
        let mut g = vec![UNREACHABLE; self.len()];
        let mut closed = vec![false; self.len()];
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        let mut nbuf = Vec::with_capacity(4);

        // An out-of-range goal is never reached; without a target the
        // search degrades to uniform-cost order over the whole component.
        let h = |p: Point| match goal_idx {
            Some(_) => pather.estimate(p, to),
            None => 0,
        };

        g[start_idx] = 0;
        open.push(NodeRef {
            idx: start_idx,
            f: h(from),
            seq,
        });

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Skip stale entries.
            if closed[ci] {
                continue;
            }
            closed[ci] = true;

            let cp = self.point(ci);
            if ci != start_idx {
                t.explored.push(cp);
            }
            if Some(ci) == goal_idx {
                t.reached = Some(ci);
                break;
            }

            let current_g = g[ci];
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if closed[ni] {
                    continue;
                }
                let tentative_g = current_g + 1;
                if tentative_g >= g[ni] {
                    continue;
                }

                g[ni] = tentative_g;
                t.parents[ni] = ci;
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g.saturating_add(h(np)),
                    seq,
                });
            }
        }

        Some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Direction, Maze};

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| p.into()).collect()
    }

    const TWO_ROUTES: &str = "\
+-+-+-+
|     |
+ +-+ +
| | | |
+ +-+ +
| | | |
+ +-+ +
|     |
+-+-+-+";

    #[test]
    fn open_room_ties_break_by_insertion() {
        let m = Maze::open(3, 3);
        let pr = PathRange::new(m.bounds());
        let e = pr.astar_explore(&m, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(
            e.explored,
            pts(&[
                (1, 0),
                (0, 1),
                (2, 0),
                (1, 1),
                (0, 2),
                (2, 1),
                (1, 2),
                (2, 2)
            ])
        );
        assert_eq!(e.path, pts(&[(1, 0), (2, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn heuristic_steers_towards_goal() {
        let m = Maze::parse(TWO_ROUTES).unwrap();
        let pr = PathRange::new(m.bounds());
        let from = Point::new(0, 2);
        let to = Point::new(2, 2);
        let e = pr.astar_explore(&m, from, to);
        assert_eq!(e.explored, pts(&[(0, 1), (0, 3), (1, 3), (2, 3), (2, 2)]));
        assert_eq!(e.path, pts(&[(0, 3), (1, 3), (2, 3), (2, 2)]));
        assert_eq!(pr.astar_path(&m, from, to), e.path);
    }

    #[test]
    fn unreachable_goal_explores_component() {
        let mut m = Maze::open(3, 2);
        m.wall(Point::new(1, 0), Direction::East);
        m.wall(Point::new(1, 1), Direction::East);
        let pr = PathRange::new(m.bounds());
        let from = Point::new(0, 0);
        let to = Point::new(2, 0);
        assert!(pr.astar_path(&m, from, to).is_empty());
        let e = pr.astar_explore(&m, from, to);
        assert!(e.path.is_empty());
        let mut seen = e.explored.clone();
        seen.sort();
        assert_eq!(seen, pts(&[(1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn extreme_goal_searches_by_cost_alone() {
        let m = Maze::open(3, 3);
        let pr = PathRange::new(m.bounds());
        let from = Point::new(0, 0);
        let to = Point::new(i32::MAX, 0);
        assert!(pr.astar_path(&m, from, to).is_empty());
        let e = pr.astar_explore(&m, from, to);
        assert!(e.path.is_empty());
        assert_eq!(
            e.explored,
            pts(&[
                (1, 0),
                (0, 1),
                (2, 0),
                (1, 1),
                (0, 2),
                (2, 1),
                (1, 2),
                (2, 2)
            ])
        );
    }

    #[test]
    fn goal_equal_to_start() {
        let m = Maze::open(2, 2);
        let pr = PathRange::new(m.bounds());
        let p = Point::new(1, 1);
        assert!(pr.astar_path(&m, p, p).is_empty());
        assert_eq!(pr.astar_explore(&m, p, p), Exploration::default());
    }
}
