use anyhow::Result;
use aoc2016::days::day21;
use aoc2016::utils::{input, logger, report};

const INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src/bin/day21/input.txt");

const PASSWORD: &str = "abcdefgh";
const SCRAMBLED: &str = "fbgdceah";

fn main() -> Result<()> {
    logger::init();
    let text = input::read_to_string(INPUT)?;
    report::print_answers(
        day21::scramble(&text, PASSWORD)?,
        day21::unscramble(&text, SCRAMBLED)?,
    );
    Ok(())
}
