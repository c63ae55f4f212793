use anyhow::Result;
use aoc2016::days::day09;
use aoc2016::utils::{input, logger, report};

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/bin/day09/input.txt");

fn main() -> Result<()> {
    logger::init();
    let text = input::read_to_string(INPUT)?;
    report::print_answers(day09::part_one(&text)?, day09::part_two(&text)?);
    Ok(())
}
