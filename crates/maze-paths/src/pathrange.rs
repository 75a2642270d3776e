use maze_core::{Point, Range};

/// Structured result of an A* exploration: the expansion order and the
/// optimal path, both excluding the start point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exploration {
    /// Every point dequeued for expansion, in order, up to and including the
    /// goal if it was reached.
    pub explored: Vec<Point>,
    /// Optimal path ending at the goal, or empty if the goal is unreachable.
    pub path: Vec<Point>,
}

// ---------------------------------------------------------------------------
// Internal bookkeeping shared by every search
// ---------------------------------------------------------------------------

/// Sentinel cost meaning "not reached yet".
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Sentinel predecessor of the start point.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Frontier entry for A*, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    /// Insertion counter; earlier entries win ties on `f`.
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f, then oldest, first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// What a single search run leaves behind.
pub(crate) struct Traversal {
    /// Expanded points in order, start excluded.
    pub(crate) explored: Vec<Point>,
    /// Flat-index predecessor of each point, [`NO_PARENT`] if none.
    pub(crate) parents: Vec<usize>,
    /// Index of the goal if it was expanded.
    pub(crate) reached: Option<usize>,
}

impl Traversal {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            explored: Vec::new(),
            parents: vec![NO_PARENT; len],
            reached: None,
        }
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// The rectangle a search runs over, with flat-index helpers.
///
/// Searches allocate their frontier, visited flags and cost/predecessor
/// arrays fresh on every call, so a `PathRange` holds no state between
/// queries and can be shared freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of cells a search may touch.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.rng.len()
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn idx_and_point_agree() {
        let pr = PathRange::new(Range::new(2, 3, 7, 6));
        for p in pr.range() {
            let i = pr.idx(p).unwrap();
            assert!(i < pr.len());
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(0, 0)), None);
        assert_eq!(pr.idx(Point::new(7, 3)), None);
    }

    #[test]
    fn empty_range_has_no_indices() {
        let pr = PathRange::new(Range::new(0, 0, 0, 4));
        assert_eq!(pr.len(), 0);
        assert_eq!(pr.idx(Point::new(0, 0)), None);
    }

    #[test]
    fn heap_pops_lowest_f_then_oldest() {
        let mut open = BinaryHeap::new();
        open.push(NodeRef { idx: 0, f: 5, seq: 0 });
        open.push(NodeRef { idx: 1, f: 3, seq: 1 });
        open.push(NodeRef { idx: 2, f: 3, seq: 2 });
        open.push(NodeRef { idx: 3, f: 4, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| open.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn exploration_round_trip() {
        let e = Exploration {
            explored: vec![Point::new(1, 0), Point::new(0, 1)],
            path: vec![Point::new(1, 0)],
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Exploration = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
