use aoc2016::days::day19;
use aoc2016::utils::{logger, report};

const ELF_COUNT: usize = 3005290;

fn main() {
    logger::init();
    report::print_answers(
        day19::stealing_from_neighbor(ELF_COUNT),
        day19::stealing_across(ELF_COUNT),
    );
}
