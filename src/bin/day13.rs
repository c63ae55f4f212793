use anyhow::Result;
use aoc2016::days::day13;
use aoc2016::utils::{logger, report};

const FAVORITE_NUMBER: u64 = 1364;
const TARGET_LOCATION: (u64, u64) = (31, 39);
const TARGET_DISTANCE: usize = 50;

fn main() -> Result<()> {
    logger::init();
    report::print_answers(
        day13::part_one(FAVORITE_NUMBER, TARGET_LOCATION)?,
        day13::part_two(FAVORITE_NUMBER, TARGET_DISTANCE),
    );
    Ok(())
}
