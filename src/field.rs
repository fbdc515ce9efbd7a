use crate::point::Point;
use indexmap::IndexSet;
use std::fmt;

/// The asteroids of a field, iterated in the order they were inserted. For parsed fields that
/// is row-major order, which keeps station ties and sweep passes reproducible.
pub type Asteroids = IndexSet<Point>;

pub const ASTEROID: u8 = b'#';
pub const SPACE: u8 = b'.';

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    asteroids: Asteroids,
}

impl Field {
    /// Parses the `.`/`#` map. Bytes other than those two and newline are skipped without
    /// moving the cursor, and rows may be of different lengths.
    pub fn parse(input: &str) -> Self {
        let mut scanner = Scanner::default();
        scanner.feed(input.as_bytes());
        scanner.finish()
    }

    pub fn with_asteroids<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut field = Field::default();
        for p in points {
            field.insert(p);
        }
        field
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.asteroids.contains(p)
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + Clone + '_ {
        self.asteroids.iter().copied()
    }

    /// Returns `false` if there already was an asteroid at `p`.
    pub fn insert(&mut self, p: Point) -> bool {
        assert!(p.x >= 0 && p.y >= 0, "negative coordinates: {}", p);

        self.width = self.width.max(p.x as usize + 1);
        self.height = self.height.max(p.y as usize + 1);

        self.asteroids.insert(p)
    }

    /// Removing keeps the order of the remaining asteroids. The bounds are left as they were.
    pub fn remove(&mut self, p: &Point) -> bool {
        self.asteroids.shift_remove(p)
    }
}

/// Incremental decoder shared by [`Field::parse`] and [`crate::io::read_field`].
#[derive(Default)]
pub(crate) struct Scanner {
    cursor: (isize, isize),
    field: Field,
}

impl Scanner {
    pub(crate) fn feed(&mut self, bytes: &[u8]) {
        for &b in bytes {
            match b {
                b'\n' => {
                    self.cursor.0 = 0;
                    self.cursor.1 += 1;
                }
                SPACE => self.cursor.0 += 1,
                ASTEROID => {
                    self.field.insert(Point::from(self.cursor));
                    self.cursor.0 += 1;
                }
                _ => {}
            }
        }
    }

    pub(crate) fn finish(self) -> Field {
        self.field
    }
}

impl fmt::Display for Field {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x as isize, y as isize);
                let ch = if self.contains(&p) { ASTEROID } else { SPACE };
                write!(fmt, "{}", ch as char)?;
            }
            writeln!(fmt)?;
        }

        Ok(())
    }
}

#[test]
fn parse_small_example() {
    let field = Field::parse(
        ".#..#
.....
#####
....#
...##",
    );

    assert_eq!((field.width(), field.height()), (5, 5));
    assert_eq!(field.len(), 10);
    assert!(field.contains(&Point::new(1, 0)));
    assert!(field.contains(&Point::new(3, 4)));
    assert!(!field.contains(&Point::new(0, 0)));
}

#[test]
fn parse_keeps_row_major_order() {
    let field = Field::parse("#.#\n.#.\n#..\n");

    let order = field.iter().map(<(isize, isize)>::from).collect::<Vec<_>>();
    assert_eq!(order, vec![(0, 0), (2, 0), (1, 1), (0, 2)]);
}

#[test]
fn bounds_come_from_asteroids_only() {
    // trailing space and the empty last line do not count
    let field = Field::parse(".#....\n#.\n\n\n");
    assert_eq!((field.width(), field.height()), (2, 2));
}

#[test]
fn unknown_bytes_do_not_move_the_cursor() {
    let field = Field::parse("x#\r\n.y#");
    assert!(field.contains(&Point::new(0, 0)));
    assert!(field.contains(&Point::new(1, 1)));
    assert_eq!(field.len(), 2);
}

#[test]
fn display_renders_the_map_back() {
    let map = ".#..#\n.....\n#####\n....#\n...##\n";
    assert_eq!(Field::parse(map).to_string(), map);
}

#[test]
fn remove_keeps_order() {
    let mut field = Field::parse("####");
    assert!(field.remove(&Point::new(1, 0)));
    assert!(!field.remove(&Point::new(1, 0)));

    let xs = field.iter().map(|p| p.x).collect::<Vec<_>>();
    assert_eq!(xs, vec![0, 2, 3]);
}

#[test]
fn duplicates_are_rejected() {
    let mut field = Field::with_asteroids(vec![Point::new(3, 1)]);
    assert!(!field.insert(Point::new(3, 1)));
    assert_eq!(field.len(), 1);
    assert_eq!((field.width(), field.height()), (4, 2));
}
