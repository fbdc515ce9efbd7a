use crate::field::Field;
use crate::point::Point;
use crate::visibility::visible_count;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    pub position: Point,
    /// How many other asteroids can be seen from `position`.
    pub visible: usize,
}

/// Finds the asteroid which sees the most other asteroids. On ties the first one in field order
/// wins. `None` only for an empty field.
pub fn best_station(field: &Field) -> Option<Station> {
    // O(n³) but the fields are small
    let mut best: Option<Station> = None;

    for position in field.iter() {
        let visible = visible_count(field, position);

        log::trace!("{} sees {}", position, visible);

        best = match best.take() {
            Some(b) if b.visible >= visible => Some(b),
            _ => Some(Station { position, visible }),
        };
    }

    if let Some(s) = best.as_ref() {
        log::debug!("best station at {} sees {} asteroids", s.position, s.visible);
    }

    best
}

#[test]
fn first_example() {
    let field = Field::parse(
        ".#..#
.....
#####
....#
...##",
    );

    assert_eq!(
        best_station(&field),
        Some(Station {
            position: Point::new(3, 4),
            visible: 8
        })
    );
}

#[test]
fn empty_field_has_no_station() {
    assert_eq!(best_station(&Field::parse("...\n...")), None);
}

#[test]
fn single_asteroid_sees_nothing() {
    let station = best_station(&Field::parse("..\n.#")).unwrap();
    assert_eq!(station.position, Point::new(1, 1));
    assert_eq!(station.visible, 0);
}

#[test]
fn ties_go_to_the_first_in_row_major_order() {
    // every asteroid sees both others
    let station = best_station(&Field::parse("#.#\n...\n.#.")).unwrap();
    assert_eq!(station.position, Point::new(0, 0));
    assert_eq!(station.visible, 2);
}
