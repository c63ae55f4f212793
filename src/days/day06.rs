//! Day 6: repetition-code message recovery.

use itertools::Itertools;

use crate::utils::error::{PuzzleError, Result};

fn columns(input: &str) -> Vec<Vec<char>> {
    let mut columns: Vec<Vec<char>> = Vec::new();
    for line in input.lines() {
        for (index, letter) in line.chars().enumerate() {
            if columns.len() <= index {
                columns.push(Vec::new());
            }
            columns[index].push(letter);
        }
    }
    columns
}

fn recover(input: &str, most_common: bool) -> Result<String> {
    columns(input)
        .into_iter()
        .map(|column| {
            let counts = column.into_iter().counts();
            let picked = if most_common {
                counts.into_iter().max_by_key(|&(letter, n)| (n, letter))
            } else {
                counts.into_iter().min_by_key(|&(letter, n)| (n, letter))
            };
            picked
                .map(|(letter, _)| letter)
                .ok_or_else(|| PuzzleError::malformed("empty message column"))
        })
        .collect()
}

pub fn part_one(input: &str) -> Result<String> {
    recover(input, true)
}

pub fn part_two(input: &str) -> Result<String> {
    recover(input, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "eedadn\ndrvtee\neandsr\nraavrd\natevrs\ntsrnev\nsdttsa\n\
                           rasrtv\nnssdts\nntnada\nsvetve\ntesnvt\nvntsnd\nvrdear\n\
                           dvrsen\nenarar";

    #[test]
    fn most_common_letters_spell_the_message() {
        assert_eq!(part_one(EXAMPLE).unwrap(), "easter");
    }

    #[test]
    fn least_common_letters_spell_the_original() {
        assert_eq!(part_two(EXAMPLE).unwrap(), "advent");
    }

    #[test]
    fn empty_input_recovers_nothing() {
        assert_eq!(part_one("").unwrap(), "");
    }
}
