use aoc2016::days::day05;
use aoc2016::utils::{logger, report};

const DOOR_ID: &str = "ojvtpuvg";

fn main() {
    logger::init();
    report::print_answers(
        day05::first_password(DOOR_ID),
        day05::second_password(DOOR_ID),
    );
}
