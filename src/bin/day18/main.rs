use anyhow::Result;
use aoc2016::days::day18;
use aoc2016::utils::{input, logger, report};

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/bin/day18/input.txt");

const SMALL_ROOM_ROWS: usize = 40;
const LARGE_ROOM_ROWS: usize = 400000;

fn main() -> Result<()> {
    logger::init();
    let text = input::read_to_string(INPUT)?;
    report::print_answers(
        day18::safe_tiles(&text, SMALL_ROOM_ROWS)?,
        day18::safe_tiles(&text, LARGE_ROOM_ROWS)?,
    );
    Ok(())
}
