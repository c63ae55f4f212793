//! Day 1: taxicab walk through the city grid.

use std::collections::HashSet;

use crate::utils::error::{PuzzleError, Result};

#[derive(Debug, Clone, Copy)]
enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
struct Instruction {
    turn: Turn,
    steps: u32,
}

fn parse(input: &str) -> Result<Vec<Instruction>> {
    input
        .trim()
        .split(", ")
        .map(|token| {
            let mut chars = token.chars();
            let turn = match chars.next() {
                Some('L') => Turn::Left,
                Some('R') => Turn::Right,
                _ => {
                    return Err(PuzzleError::malformed(format!(
                        "unrecognized instruction {token:?}"
                    )))
                }
            };
            Ok(Instruction {
                turn,
                steps: chars.as_str().parse()?,
            })
        })
        .collect()
}

/// Every position visited while following the instructions, starting at the
/// origin and including each intermediate step.
fn walk(instructions: &[Instruction]) -> Vec<(i32, i32)> {
    let mut heading = (0, 1);
    let mut position = (0, 0);
    let mut trail = vec![position];

    for instruction in instructions {
        heading = match instruction.turn {
            Turn::Left => (-heading.1, heading.0),
            Turn::Right => (heading.1, -heading.0),
        };
        for _ in 0..instruction.steps {
            position = (position.0 + heading.0, position.1 + heading.1);
            trail.push(position);
        }
    }

    trail
}

fn taxicab_norm((x, y): (i32, i32)) -> i32 {
    x.abs() + y.abs()
}

pub fn part_one(input: &str) -> Result<i32> {
    let trail = walk(&parse(input)?);
    let position = trail.last().copied().unwrap_or((0, 0));
    Ok(taxicab_norm(position))
}

pub fn part_two(input: &str) -> Result<i32> {
    let trail = walk(&parse(input)?);

    let mut visited = HashSet::new();
    for position in trail {
        if !visited.insert(position) {
            return Ok(taxicab_norm(position));
        }
    }

    Err(PuzzleError::solver("no location is visited twice"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_distance_matches_worked_examples() {
        assert_eq!(part_one("R2, L3").unwrap(), 5);
        assert_eq!(part_one("R2, R2, R2").unwrap(), 2);
        assert_eq!(part_one("R5, L5, R5, R3").unwrap(), 12);
    }

    #[test]
    fn first_revisited_location() {
        assert_eq!(part_two("R8, R4, R4, R8").unwrap(), 4);
    }

    #[test]
    fn revisit_can_happen_mid_segment() {
        // The crossing happens while walking the last segment, not at its end.
        assert_eq!(part_two("R4, R4, R4, R8").unwrap(), 0);
    }

    #[test]
    fn rejects_unknown_turns() {
        assert!(part_one("R2, X3").is_err());
    }
}
