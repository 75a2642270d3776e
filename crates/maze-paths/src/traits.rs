use maze_core::Point;

/// Minimal search interface: neighbor enumeration over a 4-connected grid.
pub trait Pather {
    /// Append the points reachable in one step from `p` into `buf`, in
    /// North, East, South, West order. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with an admissible heuristic. Every step costs 1.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the number of moves from `from` to `to`.
    /// Must never overestimate (admissible) and must not drop by more than
    /// one per step (consistent), since closed points are never reopened.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
