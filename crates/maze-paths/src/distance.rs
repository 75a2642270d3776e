use maze_core::Point;

/// Manhattan (L1) distance between two points, saturating at `i32::MAX`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 4);
        let b = Point::new(-2, 0);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_saturates_on_extreme_points() {
        let far = Point::new(i32::MAX, i32::MAX);
        let near = Point::new(i32::MIN, 0);
        assert_eq!(manhattan(far, near), i32::MAX);
        assert_eq!(manhattan(Point::new(i32::MAX, 0), Point::ZERO), i32::MAX);
    }
}
