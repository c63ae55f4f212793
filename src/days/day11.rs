//! Day 11: radioisotope generators, microchips, and one slow elevator.

use std::collections::{BTreeMap, HashSet, VecDeque};

use itertools::Itertools;
use regex::Regex;

use crate::utils::error::{PuzzleError, Result};

const FLOORS: u8 = 4;
const TOP: u8 = FLOORS - 1;

/// Facility state: elevator floor plus one (generator, microchip) floor pair
/// per element. Pairs are kept sorted so interchangeable elements collapse
/// onto one state during the search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct State {
    elevator: u8,
    pairs: Vec<(u8, u8)>,
}

impl State {
    fn normalize(&mut self) {
        self.pairs.sort_unstable();
    }

    fn solved(&self) -> bool {
        self.pairs
            .iter()
            .all(|&(generator, microchip)| generator == TOP && microchip == TOP)
    }

    /// A floor fries a microchip when another element's generator is present
    /// while the chip's own generator is elsewhere.
    fn is_safe(&self) -> bool {
        (0..FLOORS).all(|floor| {
            let has_generator = self.pairs.iter().any(|&(g, _)| g == floor);
            let has_exposed_chip = self.pairs.iter().any(|&(g, c)| c == floor && g != floor);
            !(has_generator && has_exposed_chip)
        })
    }

    /// All safe states reachable with one elevator ride.
    fn successors(&self) -> Vec<State> {
        // Items on the current floor, addressed as (pair index, is generator).
        let mut movable: Vec<(usize, bool)> = Vec::new();
        for (index, &(generator, microchip)) in self.pairs.iter().enumerate() {
            if generator == self.elevator {
                movable.push((index, true));
            }
            if microchip == self.elevator {
                movable.push((index, false));
            }
        }

        let mut cargo: Vec<Vec<(usize, bool)>> =
            movable.iter().map(|&item| vec![item]).collect();
        cargo.extend(movable.iter().copied().combinations(2));

        let mut next_states = Vec::new();
        for target in [self.elevator.wrapping_sub(1), self.elevator + 1] {
            if target >= FLOORS {
                continue;
            }
            for load in &cargo {
                let mut next = self.clone();
                next.elevator = target;
                for &(index, is_generator) in load {
                    if is_generator {
                        next.pairs[index].0 = target;
                    } else {
                        next.pairs[index].1 = target;
                    }
                }
                if next.is_safe() {
                    next.normalize();
                    next_states.push(next);
                }
            }
        }
        next_states
    }
}

fn floor_index(name: &str) -> Result<u8> {
    match name {
        "first" => Ok(0),
        "second" => Ok(1),
        "third" => Ok(2),
        "fourth" => Ok(3),
        _ => Err(PuzzleError::malformed(format!("unknown floor {name:?}"))),
    }
}

fn parse(input: &str, with_extras: bool) -> Result<State> {
    let floor_line = Regex::new(r"^The (\w+) floor contains (.+)\.$").unwrap();
    let generator = Regex::new(r"a (\w+) generator").unwrap();
    let microchip = Regex::new(r"a (\w+)-compatible microchip").unwrap();

    let mut generators: BTreeMap<String, u8> = BTreeMap::new();
    let mut microchips: BTreeMap<String, u8> = BTreeMap::new();
    let mut seen_floors = [false; FLOORS as usize];

    for line in input.lines() {
        let captures = floor_line
            .captures(line)
            .ok_or_else(|| PuzzleError::malformed(format!("unparsable floor {line:?}")))?;
        let floor = floor_index(&captures[1])?;
        seen_floors[floor as usize] = true;

        let contents = &captures[2];
        for item in generator.captures_iter(contents) {
            generators.insert(item[1].to_string(), floor);
        }
        for item in microchip.captures_iter(contents) {
            microchips.insert(item[1].to_string(), floor);
        }
    }

    if !seen_floors.iter().all(|&seen| seen) {
        return Err(PuzzleError::malformed("some floors were left unpopulated"));
    }

    let mut pairs = Vec::new();
    for (element, generator_floor) in &generators {
        let microchip_floor = microchips.remove(element).ok_or_else(|| {
            PuzzleError::malformed(format!("{element} has a generator but no microchip"))
        })?;
        pairs.push((*generator_floor, microchip_floor));
    }
    if let Some(element) = microchips.keys().next() {
        return Err(PuzzleError::malformed(format!(
            "{element} has a microchip but no generator"
        )));
    }

    if with_extras {
        // The elerium and dilithium pairs found at the first floor.
        pairs.push((0, 0));
        pairs.push((0, 0));
    }

    let mut state = State { elevator: 0, pairs };
    state.normalize();
    Ok(state)
}

/// Breadth-first search for the minimal number of elevator rides.
fn min_steps(start: State) -> Result<usize> {
    if start.solved() {
        return Ok(0);
    }

    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.clone());
    queue.push_back((start, 0usize));

    while let Some((state, depth)) = queue.pop_front() {
        for next in state.successors() {
            if next.solved() {
                return Ok(depth + 1);
            }
            if seen.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    Err(PuzzleError::solver(
        "search space exhausted without a solution",
    ))
}

pub fn part_one(input: &str) -> Result<usize> {
    min_steps(parse(input, false)?)
}

pub fn part_two(input: &str) -> Result<usize> {
    min_steps(parse(input, true)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
The first floor contains a hydrogen-compatible microchip and a lithium-compatible microchip.
The second floor contains a hydrogen generator.
The third floor contains a lithium generator.
The fourth floor contains nothing relevant.";

    #[test]
    fn example_facility_takes_eleven_steps() {
        assert_eq!(part_one(EXAMPLE).unwrap(), 11);
    }

    #[test]
    fn parses_pairs_per_element() {
        let state = parse(EXAMPLE, false).unwrap();
        assert_eq!(state.pairs, vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn extras_are_added_on_the_first_floor() {
        let state = parse(EXAMPLE, true).unwrap();
        assert_eq!(state.pairs.len(), 4);
        assert_eq!(state.pairs[0], (0, 0));
    }

    #[test]
    fn exposed_microchip_next_to_foreign_generator_is_unsafe() {
        let state = State {
            elevator: 0,
            pairs: vec![(0, 0), (0, 1)],
        };
        assert!(state.is_safe());

        let state = State {
            elevator: 0,
            pairs: vec![(0, 1), (1, 1)],
        };
        assert!(!state.is_safe());
    }

    #[test]
    fn unpaired_items_are_rejected() {
        let input = "\
The first floor contains a hydrogen generator.
The second floor contains nothing relevant.
The third floor contains nothing relevant.
The fourth floor contains nothing relevant.";
        assert!(parse(input, false).is_err());
    }
}
