//! Path reconstruction from predecessor links.

use maze_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, Traversal};

impl PathRange {
    /// Walk `parents` back from `goal` to the point with no predecessor, then
    /// reverse. The root itself is left out, so the result starts one step
    /// after the start and ends at `goal`.
    pub(crate) fn walk_back(&self, parents: &[usize], goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal;
        while parents[ci] != NO_PARENT {
            path.push(self.point(ci));
            ci = parents[ci];
        }
        path.reverse();
        path
    }

    /// The path to the goal of a finished traversal, empty if it never got
    /// there.
    pub(crate) fn path_to_goal(&self, t: &Traversal) -> Vec<Point> {
        match t.reached {
            Some(gi) => self.walk_back(&t.parents, gi),
            None => Vec::new(),
        }
    }
}
