use crate::field::Field;
use crate::point::Point;

/// True if no other asteroid lies strictly between `origin` and `target`.
///
/// Only asteroids collinear with the two points are considered, and of those only the ones
/// whose projection falls strictly inside the segment: anything at or behind `origin`, or at or
/// beyond `target`, does not block. `origin` does not need to be an asteroid itself.
pub fn is_visible(field: &Field, origin: Point, target: Point) -> bool {
    let reach = origin.distance_squared(target);

    !field
        .iter()
        .filter(|&p| p != origin && p != target)
        .filter(|&p| Point::cross(origin, target, p) == 0)
        .any(|p| {
            let along = Point::dot(origin, target, p);
            along > 0 && along < reach
        })
}

/// Snapshot of every asteroid visible from `origin`, in field order.
pub fn visible_from(field: &Field, origin: Point) -> Vec<Point> {
    field
        .iter()
        .filter(|&p| p != origin)
        .filter(|&p| is_visible(field, origin, p))
        .collect()
}

pub fn visible_count(field: &Field, origin: Point) -> usize {
    field
        .iter()
        .filter(|&p| p != origin)
        .filter(|&p| is_visible(field, origin, p))
        .count()
}

#[test]
fn only_nearest_collinear_is_visible() {
    let field = Field::parse("#.#.#.#");
    let origin = Point::new(0, 0);

    assert!(is_visible(&field, origin, Point::new(2, 0)));
    assert!(!is_visible(&field, origin, Point::new(4, 0)));
    assert!(!is_visible(&field, origin, Point::new(6, 0)));
    assert_eq!(visible_from(&field, origin), vec![Point::new(2, 0)]);
}

#[test]
fn diagonal_occlusion() {
    let field = Field::parse(
        "#...
.#..
..#.
...#",
    );

    assert_eq!(visible_count(&field, Point::new(0, 0)), 1);
    // from the middle both neighbours along the diagonal are visible
    assert_eq!(visible_count(&field, Point::new(1, 1)), 2);
}

#[test]
fn points_behind_origin_do_not_block() {
    let field = Field::parse("#.#.#");
    let origin = Point::new(2, 0);

    assert!(is_visible(&field, origin, Point::new(0, 0)));
    assert!(is_visible(&field, origin, Point::new(4, 0)));
}

#[test]
fn origin_does_not_need_to_be_an_asteroid() {
    let field = Field::parse("#...#");
    let origin = Point::new(2, 0);

    assert!(!field.contains(&origin));
    assert_eq!(visible_count(&field, origin), 2);
}

#[test]
fn general_position_sees_everything() {
    // no three of these are collinear
    let points = [(0, 0), (1, 2), (3, 3), (4, 1), (2, 7), (6, 4)];
    let field = Field::with_asteroids(points.iter().copied().map(Point::from));

    for p in field.iter() {
        assert_eq!(visible_count(&field, p), field.len() - 1, "from {}", p);
    }
}

#[test]
fn lone_asteroid_sees_nothing() {
    let field = Field::parse("..#");
    assert_eq!(visible_count(&field, Point::new(2, 0)), 0);
}
