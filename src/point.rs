use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

/// Grid coordinate, origin at the top-left corner with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Self {
        Point { x, y }
    }

    /// The value reported for a vaporized asteroid: `x * 100 + y`.
    pub fn checksum(&self) -> isize {
        self.x * 100 + self.y
    }

    fn delta(&self, origin: Point) -> (isize, isize) {
        (self.x - origin.x, self.y - origin.y)
    }

    /// Cross product of `a - origin` and `b - origin`. Zero when all three are collinear.
    pub fn cross(origin: Point, a: Point, b: Point) -> isize {
        let (ax, ay) = a.delta(origin);
        let (bx, by) = b.delta(origin);
        ax * by - ay * bx
    }

    pub fn dot(origin: Point, a: Point, b: Point) -> isize {
        let (ax, ay) = a.delta(origin);
        let (bx, by) = b.delta(origin);
        ax * bx + ay * by
    }

    pub fn distance_squared(&self, other: Point) -> isize {
        Point::dot(*self, other, other)
    }

    /// Angle of `self` as seen from `origin`, in radians `[0, 2π)`. Zero points up (negative y)
    /// and the angle grows clockwise, so right is π/2, down is π and left is 3π/2.
    pub fn clockwise_angle(&self, origin: Point) -> f64 {
        let (dx, dy) = self.delta(origin);

        // atan2 with swapped and negated arguments turns "up" into zero
        let angle = f64::atan2(dx as f64, -dy as f64);

        if angle < 0.0 {
            angle + 2.0 * PI
        } else {
            angle
        }
    }

    /// Orders `a` and `b` by their clockwise angle around `origin` without going through
    /// floating point. Points in the same direction compare equal regardless of distance.
    pub fn clockwise_cmp(origin: Point, a: Point, b: Point) -> Ordering {
        let half = |p: Point| {
            let (dx, dy) = p.delta(origin);
            // [0, π) is the right half including straight up, [π, 2π) the rest
            if dx > 0 || (dx == 0 && dy < 0) {
                0u8
            } else {
                1u8
            }
        };

        half(a)
            .cmp(&half(b))
            .then_with(|| 0.cmp(&Point::cross(origin, a, b)))
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (isize, isize) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{},{}", self.x, self.y)
    }
}

#[test]
fn checksum_of_reference_answer() {
    assert_eq!(Point::new(8, 2).checksum(), 802);
}

#[test]
fn compass_angles() {
    let origin = Point::new(5, 5);

    let expected = [
        ((5, 4), 0.0),
        ((6, 5), PI / 2.0),
        ((5, 6), PI),
        ((4, 5), 3.0 * PI / 2.0),
    ];

    for &(p, angle) in &expected {
        let actual = Point::from(p).clockwise_angle(origin);
        assert!((actual - angle).abs() < 1e-9, "{:?}: {} != {}", p, actual, angle);
    }
}

#[test]
fn just_left_of_up_is_almost_full_circle() {
    let angle = Point::new(-1, -100).clockwise_angle(Point::new(0, 0));
    assert!(angle > 1.9 * PI && angle < 2.0 * PI);
}

#[test]
fn exact_ordering_agrees_with_angles() {
    use itertools::Itertools;

    let origin = Point::new(0, 0);
    let mut points = (-3..=3)
        .cartesian_product(-3..=3)
        .map(Point::from)
        .filter(|p| *p != origin)
        .collect::<Vec<_>>();

    points.sort_by(|a, b| Point::clockwise_cmp(origin, *a, *b));

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (angle_a, angle_b) = (a.clockwise_angle(origin), b.clockwise_angle(origin));

        if Point::clockwise_cmp(origin, a, b) == Ordering::Equal {
            assert!((angle_a - angle_b).abs() < 1e-9);
        } else {
            assert!(angle_a < angle_b, "{} ({}) before {} ({})", a, angle_a, b, angle_b);
        }
    }
}

#[test]
fn same_direction_compares_equal() {
    let origin = Point::new(2, 2);
    assert_eq!(
        Point::clockwise_cmp(origin, Point::new(3, 1), Point::new(5, -1)),
        Ordering::Equal
    );
    assert_eq!(
        Point::clockwise_cmp(origin, Point::new(2, 3), Point::new(2, 9)),
        Ordering::Equal
    );
}
