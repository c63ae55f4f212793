use anyhow::Result;
use aoc2016::days::day12;
use aoc2016::utils::{input, logger, report};

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/bin/day12/input.txt");

fn main() -> Result<()> {
    logger::init();
    let text = input::read_to_string(INPUT)?;
    report::print_answers(day12::part_one(&text)?, day12::part_two(&text)?);
    Ok(())
}
