use asteroid_monitor::{best_station, io::read_field, vaporize, Field, Laser, Point};
use std::collections::HashSet;

const LARGE: &[&str] = &[
    ".#..##.###...#######",
    "##.############..##.",
    ".#.######.########.#",
    ".###.#######.####.#.",
    "#####.##.#.##.###.##",
    "..#####..#.#########",
    "####################",
    "#.####....###.#.#.##",
    "##.#################",
    "#####.##.###..####..",
    "..######..##.#######",
    "####.##.####...##..#",
    ".#####..#.######.###",
    "##...#.##########...",
    "#.##########.#######",
    ".####.#.###.###.#.##",
    "....##.##.###..#####",
    ".#.#.###########.###",
    "#.#.#.#####.####.###",
    "###.##.####.##.#..##",
];

fn field(rows: &[&str]) -> Field {
    Field::parse(&rows.join("\n"))
}

fn best(rows: &[&str]) -> ((isize, isize), usize) {
    let station = best_station(&field(rows)).unwrap();
    (station.position.into(), station.visible)
}

#[test]
fn stage1_first_example() {
    let map = &[".#..#", ".....", "#####", "....#", "...##"];

    assert_eq!(best(map), ((3, 4), 8));
}

#[test]
fn stage1_second_example() {
    let map = &[
        "......#.#.",
        "#..#.#....",
        "..#######.",
        ".#.#.###..",
        ".#..#.....",
        "..#....#.#",
        "#..#....#.",
        ".##.#..###",
        "##...#..#.",
        ".#....####",
    ];

    assert_eq!(best(map), ((5, 8), 33));
}

#[test]
fn stage1_third_example() {
    let map = &[
        "#.#...#.#.",
        ".###....#.",
        ".#....#...",
        "##.#.#.#.#",
        "....#.#.#.",
        ".##..###.#",
        "..#...##..",
        "..##....##",
        "......#...",
        ".####.###.",
    ];

    assert_eq!(best(map), ((1, 2), 35));
}

#[test]
fn stage1_fourth_example() {
    let map = &[
        ".#..#..###",
        "####.###.#",
        "....###.#.",
        "..###.##.#",
        "##.##.#.#.",
        "....###..#",
        "..#.#..#.#",
        "#..#.#.###",
        ".##...##.#",
        ".....#.#..",
    ];

    assert_eq!(best(map), ((6, 3), 41));
}

#[test]
fn stage1_fifth_example() {
    assert_eq!(best(LARGE), ((11, 13), 210));
}

#[test]
fn stage2_example() {
    let mut field = field(LARGE);
    let station = Point::new(11, 13);

    let killed = vaporize(&mut field, station);

    let expected = [
        (1, (11, 12)),
        (2, (12, 1)),
        (3, (12, 2)),
        (10, (12, 8)),
        (20, (16, 0)),
        (50, (16, 9)),
        (100, (10, 16)),
        (199, (9, 6)),
        (200, (8, 2)),
        (201, (10, 9)),
        (299, (11, 1)),
    ];

    for &(nth, p) in &expected {
        assert_eq!(killed[nth - 1], Point::from(p), "#{}", nth);
    }

    assert_eq!(killed[199].checksum(), 802);
}

#[test]
fn stage2_vaporizes_everything_but_the_station_once() {
    let original = field(LARGE);
    let station = best_station(&original).unwrap().position;

    let mut field = original.clone();
    let killed = vaporize(&mut field, station);

    assert_eq!(killed.len(), original.len() - 1);

    let unique = killed.iter().copied().collect::<HashSet<_>>();
    assert_eq!(unique.len(), killed.len());
    assert!(!unique.contains(&station));
    assert!(original.iter().filter(|p| *p != station).all(|p| unique.contains(&p)));

    assert_eq!(field.iter().collect::<Vec<_>>(), vec![station]);

    // a drained field has nothing left to give
    assert!(vaporize(&mut field, station).is_empty());
}

#[test]
fn first_rotation_hits_what_the_station_sees() {
    let mut field = field(LARGE);
    let station = best_station(&field).unwrap();

    let first = Laser::new(&mut field, station.position).next().unwrap();

    assert_eq!(first.len(), station.visible);
    assert_eq!(first[0], Point::new(11, 12));
}

#[test]
fn read_from_bufread() {
    let text = LARGE.join("\n");
    let field = read_field(std::io::Cursor::new(text.as_bytes())).unwrap();

    assert_eq!((field.width(), field.height()), (20, 20));
    assert_eq!(field.len(), 300);
}
