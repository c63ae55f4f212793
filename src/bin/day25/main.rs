use anyhow::Result;
use aoc2016::days::day25;
use aoc2016::utils::{input, logger, report};

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/bin/day25/input.txt");

fn main() -> Result<()> {
    logger::init();
    let text = input::read_to_string(INPUT)?;
    // The fiftieth star only needs the other forty-nine.
    report::print_answers(day25::part_one(&text)?, "N/A");
    Ok(())
}
