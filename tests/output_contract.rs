//! The one convention shared by every day: where input comes from and what
//! the two output lines look like.

use aoc2016::days::day01;
use aoc2016::utils::{input, report};
use aoc2016::PuzzleError;
use tempfile::TempDir;

#[test]
fn reads_a_colocated_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "R5, L5, R5, R3\n").unwrap();

    let text = input::read_to_string(&path).unwrap();
    assert_eq!(text, "R5, L5, R5, R3\n");
    assert_eq!(day01::part_one(&text).unwrap(), 12);
}

#[test]
fn missing_input_file_fails_instead_of_falling_back() {
    let dir = TempDir::new().unwrap();
    let result = input::read_to_string(dir.path().join("input.txt"));
    assert!(matches!(result, Err(PuzzleError::Io(_))));
}

#[test]
fn answers_are_exactly_two_fixed_lines() {
    let rendered = report::format_answers(242, "kjxhwab");
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("Part One: 242"));
    assert_eq!(lines.next(), Some("Part Two: kjxhwab"));
    assert_eq!(lines.next(), None);
}

#[test]
fn solving_the_same_input_twice_is_deterministic() {
    let text = "R8, R4, R4, R8";
    assert_eq!(day01::part_two(text).unwrap(), day01::part_two(text).unwrap());
}
