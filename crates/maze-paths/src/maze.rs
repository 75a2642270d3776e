//! [`Pather`] implementation for [`Maze`].

use maze_core::{Direction, Maze, Point};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather};

impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for dir in Direction::ALL {
            if self.can_move(p, dir) {
                buf.push(p.step(dir));
            }
        }
    }
}

impl AstarPather for Maze {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_in_compass_order() {
        let m = Maze::open(3, 3);
        let mut buf = Vec::new();
        m.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn neighbors_respect_source_walls() {
        let mut m = Maze::open(2, 2);
        m.wall(Point::new(0, 0), Direction::East);
        let mut buf = Vec::new();
        m.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);

        buf.clear();
        m.neighbors(Point::new(5, 5), &mut buf);
        assert!(buf.is_empty());
    }
}
