use aoc2016::days::day14;
use aoc2016::utils::{logger, report};

const SALT: &str = "cuanljph";
const NUM_KEYS: usize = 64;
const STRETCH_ROUNDS: usize = 2016;

fn main() {
    logger::init();
    report::print_answers(
        day14::otp_index(SALT, 0, NUM_KEYS),
        day14::otp_index(SALT, STRETCH_ROUNDS, NUM_KEYS),
    );
}
