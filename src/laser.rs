use crate::field::Field;
use crate::point::Point;
use crate::visibility::visible_from;
use itertools::Itertools;

/// Giant rotating laser at `station`. Every item is one full clockwise rotation starting from
/// straight up: the asteroids visible at the start of the rotation, in the order they were hit.
/// The hit asteroids are removed from the field before the item is returned.
pub struct Laser<'a> {
    field: &'a mut Field,
    station: Point,
    rotations: usize,
}

impl<'a> Laser<'a> {
    pub fn new(field: &'a mut Field, station: Point) -> Self {
        Laser {
            field,
            station,
            rotations: 0,
        }
    }
}

impl Iterator for Laser<'_> {
    type Item = Vec<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        let station = self.station;

        // snapshot first, the field is only touched after the whole rotation is known
        let hit = visible_from(self.field, station)
            .into_iter()
            .sorted_by(|a, b| Point::clockwise_cmp(station, *a, *b))
            .collect::<Vec<_>>();

        if hit.is_empty() {
            return None;
        }

        for p in &hit {
            self.field.remove(p);
        }

        self.rotations += 1;

        log::debug!(
            "rotation {} vaporized {} asteroids, {} remaining",
            self.rotations,
            hit.len(),
            self.field.len()
        );

        Some(hit)
    }
}

/// Vaporizes every asteroid except the station itself, returning them in the order they were
/// hit. The field is drained in the process.
pub fn vaporize(field: &mut Field, station: Point) -> Vec<Point> {
    let mut order = Vec::with_capacity(field.len());
    order.extend(Laser::new(field, station).flatten());
    order
}

#[test]
fn first_rotation_goes_up_right_down_left() {
    let mut field = Field::parse(
        ".#.
###
.#.",
    );

    let station = Point::new(1, 1);
    let order = vaporize(&mut field, station);

    assert_eq!(
        order,
        vec![
            Point::new(1, 0),
            Point::new(2, 1),
            Point::new(1, 2),
            Point::new(0, 1)
        ]
    );
    assert_eq!(field.iter().collect::<Vec<_>>(), vec![station]);
}

#[test]
fn occluded_asteroids_wait_for_the_next_rotation() {
    let mut field = Field::parse(
        "..#..
..#..
..#.#
.....
.....",
    );

    // station is not an asteroid here
    let mut laser = Laser::new(&mut field, Point::new(2, 3));

    assert_eq!(laser.next(), Some(vec![Point::new(2, 2), Point::new(4, 2)]));
    assert_eq!(laser.next(), Some(vec![Point::new(2, 1)]));
    assert_eq!(laser.next(), Some(vec![Point::new(2, 0)]));
    assert_eq!(laser.next(), None);

    assert!(field.is_empty());
}

#[test]
fn nothing_to_vaporize() {
    let mut empty = Field::default();
    assert!(vaporize(&mut empty, Point::new(0, 0)).is_empty());

    let mut lonely = Field::parse(".#");
    assert!(vaporize(&mut lonely, Point::new(1, 0)).is_empty());
    assert_eq!(lonely.len(), 1);
}

#[test]
fn laser_starts_from_up_and_ends_left_of_up() {
    let mut field = Field::parse(
        "##.
.#.
...",
    );

    let order = vaporize(&mut field, Point::new(1, 1));
    assert_eq!(order, vec![Point::new(1, 0), Point::new(0, 0)]);
}
