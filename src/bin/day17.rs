use anyhow::Result;
use aoc2016::days::day17;
use aoc2016::utils::{logger, report};

const PASSCODE: &str = "pvhmgsws";

fn main() -> Result<()> {
    logger::init();
    report::print_answers(
        day17::shortest_path(PASSCODE)?,
        day17::longest_path_len(PASSCODE)?,
    );
    Ok(())
}
