use asteroid_monitor::{best_station, io::read_field, vaporize};
use either::Either;
use std::fmt;
use std::io::BufReader;
use std::path::PathBuf;

#[cfg(feature = "with_dhat")]
use dhat::{Dhat, DhatAlloc};

#[cfg(feature = "with_dhat")]
#[global_allocator]
static ALLOCATOR: DhatAlloc = DhatAlloc;

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    #[cfg(feature = "with_dhat")]
    let _dhat = Dhat::start_heap_profiling();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;

    let stdin = std::io::stdin();
    let input = match args.input.as_ref() {
        Some(path) => Either::Right(BufReader::new(std::fs::File::open(path)?)),
        None => Either::Left(stdin.lock()),
    };

    let mut field = read_field(input)?;

    log::info!(
        "{} asteroids on a {}x{} field",
        field.len(),
        field.width(),
        field.height()
    );

    let station = best_station(&field).ok_or(Missing::NoAsteroids)?;

    println!("stage1: {}", station.visible);

    log::info!("station at {}", station.position);

    let vaporized = vaporize(&mut field, station.position);

    let nth = vaporized
        .get(args.nth - 1)
        .ok_or(Missing::NotEnoughVaporized {
            nth: args.nth,
            total: vaporized.len(),
        })?;

    log::info!("vaporized #{} at {}", args.nth, nth);

    println!("stage2: {}", nth.checksum());

    Ok(())
}

struct Args {
    /// `None` reads standard input.
    input: Option<PathBuf>,
    /// 1-based
    nth: usize,
}

fn parse_args() -> Result<Args, BadArgument> {
    let mut args = Args {
        input: None,
        nth: 200,
    };

    let mut positional = 0;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "-" if positional == 0 => {}
            path if positional == 0 => args.input = Some(PathBuf::from(path)),
            nth if positional == 1 => {
                args.nth = match nth.parse::<usize>() {
                    Ok(0) | Err(_) => return Err(BadArgument(arg)),
                    Ok(n) => n,
                };
            }
            _ => return Err(BadArgument(arg)),
        }
        positional += 1;
    }

    Ok(args)
}

fn print_help() {
    println!("monitor - finds the best asteroid for a monitoring station and vaporizes the rest");
    println!();
    println!("USAGE:");
    println!("    monitor [INPUT] [NTH]");
    println!();
    println!("ARGS:");
    println!("    INPUT    map of '.' and '#', '-' or nothing for stdin");
    println!("    NTH      which vaporized asteroid to report, starting from 1 (default: 200)");
    println!();
    println!("Log verbosity is controlled with RUST_LOG (default: info).");
}

#[derive(Debug)]
struct BadArgument(String);

impl fmt::Display for BadArgument {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "unexpected argument {:?}, see --help", self.0)
    }
}

impl std::error::Error for BadArgument {}

#[derive(Debug)]
enum Missing {
    NoAsteroids,
    NotEnoughVaporized { nth: usize, total: usize },
}

impl fmt::Display for Missing {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Missing::NoAsteroids => write!(fmt, "no asteroids in the input"),
            Missing::NotEnoughVaporized { nth, total } => write!(
                fmt,
                "asked for vaporized asteroid #{} but only {} were vaporized",
                nth, total
            ),
        }
    }
}

impl std::error::Error for Missing {}
