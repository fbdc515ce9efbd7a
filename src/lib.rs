pub mod field;
pub mod laser;
pub mod point;
pub mod station;
pub mod visibility;

pub use field::Field;
pub use laser::{vaporize, Laser};
pub use point::Point;
pub use station::{best_station, Station};
pub use visibility::{is_visible, visible_count, visible_from};

pub mod io {
    use crate::field::{Field, Scanner};
    use std::io::BufRead;

    /// Reads a whole map from `input`. Decoding never fails, only reading can.
    pub fn read_field<R: BufRead>(mut input: R) -> Result<Field, std::io::Error> {
        let mut scanner = Scanner::default();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            let read = input.read_until(b'\n', &mut buffer)?;

            if read == 0 {
                break;
            }

            scanner.feed(&buffer);
        }

        Ok(scanner.finish())
    }

    #[test]
    fn read_same_as_parse() {
        let map = "......#.#.
#..#.#....
..#######.
.#.#.###..
.#..#.....
..#....#.#
#..#....#.
.##.#..###
##...#..#.
.#....####
";

        let read = read_field(std::io::BufReader::new(std::io::Cursor::new(map))).unwrap();

        assert_eq!(read, Field::parse(map));
        assert_eq!((read.width(), read.height()), (10, 10));
    }

    #[test]
    fn read_error_is_propagated() {
        struct Broken;

        impl std::io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe"))
            }
        }

        let err = read_field(std::io::BufReader::new(Broken)).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
    }
}
