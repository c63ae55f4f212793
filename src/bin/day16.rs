use anyhow::Result;
use aoc2016::days::day16;
use aoc2016::utils::{logger, report};

const SEED: &str = "11011110011011101";
const FIRST_DISK: usize = 272;
const SECOND_DISK: usize = 35651584;

fn main() -> Result<()> {
    logger::init();
    report::print_answers(
        day16::disk_checksum(SEED, FIRST_DISK)?,
        day16::disk_checksum(SEED, SECOND_DISK)?,
    );
    Ok(())
}
