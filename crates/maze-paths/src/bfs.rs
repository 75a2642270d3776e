use std::collections::VecDeque;

use maze_core::Point;

use crate::PathRange;
use crate::pathrange::Traversal;
use crate::traits::Pather;

impl PathRange {
    /// Find a path from `from` to `to` using breadth-first search.
    ///
    /// Every step has cost 1, so the path has the fewest possible moves.
    /// Returns the points after `from` up to and including `to`, or an empty
    /// vector if `to` cannot be reached.
    pub fn bfs_path<P: Pather>(&self, pather: &P, from: Point, to: Point) -> Vec<Point> {
        self.bfs(pather, from, to)
            .map(|t| self.path_to_goal(&t))
            .unwrap_or_default()
    }

    /// Breadth-first expansion order from `from`, excluding `from` itself.
    ///
    /// Stops right after expanding `to`. If `to` is never reached the whole
    /// component reachable from `from` is returned.
    pub fn bfs_explore<P: Pather>(&self, pather: &P, from: Point, to: Point) -> Vec<Point> {
        self.bfs(pather, from, to)
            .map(|t| t.explored)
            .unwrap_or_default()
    }

    /// Points are marked visited when enqueued, so none enters the queue twice.
    fn bfs<P: Pather>(&self, pather: &P, from: Point, to: Point) -> Option<Traversal> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to);

        let mut t = Traversal::new(self.len());
        let mut visited = vec![false; self.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut nbuf = Vec::with_capacity(4);

        visited[start_idx] = true;
        queue.push_back(start_idx);

        while let Some(ci) = queue.pop_front() {
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

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                t.parents[ni] = ci;
                queue.push_back(ni);
            }
        }

        Some(t)
    }
}
