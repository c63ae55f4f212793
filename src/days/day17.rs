//! Day 17: the MD5-guarded vault at the bottom right of a 4x4 grid.

use md5::{Digest, Md5};

use crate::utils::error::{PuzzleError, Result};

const VAULT: (i8, i8) = (3, 3);

#[derive(Debug, Clone)]
struct Path {
    moves: String,
    x: i8,
    y: i8,
}

/// Doors open when the first four hex characters of MD5(passcode + path)
/// are in 'b'..='f'; order is up, down, left, right.
fn open_doors(passcode: &str, path: &str) -> [bool; 4] {
    let digest = hex::encode(Md5::digest(format!("{passcode}{path}")));
    let bytes = digest.as_bytes();
    [
        bytes[0] >= b'b',
        bytes[1] >= b'b',
        bytes[2] >= b'b',
        bytes[3] >= b'b',
    ]
}

/// Expand one breadth-first wave; paths that reach the vault are split off
/// because the search must not continue through the vault room.
fn advance(passcode: &str, wave: &[Path]) -> (Vec<Path>, Vec<String>) {
    let mut next_wave = Vec::new();
    let mut solutions = Vec::new();

    for path in wave {
        let doors = open_doors(passcode, &path.moves);
        let steps = [
            (doors[0], 'U', 0, -1),
            (doors[1], 'D', 0, 1),
            (doors[2], 'L', -1, 0),
            (doors[3], 'R', 1, 0),
        ];
        for (open, suffix, dx, dy) in steps {
            let (x, y) = (path.x + dx, path.y + dy);
            if !open || !(0..=3).contains(&x) || !(0..=3).contains(&y) {
                continue;
            }

            let mut moves = path.moves.clone();
            moves.push(suffix);
            if (x, y) == VAULT {
                solutions.push(moves);
            } else {
                next_wave.push(Path { moves, x, y });
            }
        }
    }

    (next_wave, solutions)
}

fn start() -> Vec<Path> {
    vec![Path {
        moves: String::new(),
        x: 0,
        y: 0,
    }]
}

/// The unique shortest path to the vault.
pub fn shortest_path(passcode: &str) -> Result<String> {
    let mut wave = start();
    while !wave.is_empty() {
        let (next_wave, solutions) = advance(passcode, &wave);
        match solutions.as_slice() {
            [] => wave = next_wave,
            [path] => return Ok(path.clone()),
            _ => return Err(PuzzleError::solver("shortest path is not unique")),
        }
    }
    Err(PuzzleError::solver(
        "exhausted search space without reaching the vault",
    ))
}

/// Length of the longest path that reaches the vault.
pub fn longest_path_len(passcode: &str) -> Result<usize> {
    let mut wave = start();
    let mut longest = None;

    while !wave.is_empty() {
        let (next_wave, solutions) = advance(passcode, &wave);
        if let Some(path) = solutions.first() {
            longest = Some(path.len());
        }
        wave = next_wave;
    }

    longest.ok_or_else(|| {
        PuzzleError::solver("exhausted search space without reaching the vault")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_room_doors_for_the_hijkl_passcode() {
        // Up, down and left are open but up/left lead off the grid.
        assert_eq!(open_doors("hijkl", ""), [true, true, true, false]);
    }

    #[test]
    fn shortest_paths_for_the_example_passcodes() {
        assert_eq!(shortest_path("ihgpwlah").unwrap(), "DDRRRD");
        assert_eq!(shortest_path("kglvqrro").unwrap(), "DDUDRLRRUDRD");
        assert_eq!(
            shortest_path("ulqzkmiv").unwrap(),
            "DRURDRUDDLLDLUURRDULRLDUUDDDRR"
        );
    }

    #[test]
    fn hijkl_never_reaches_the_vault() {
        assert!(shortest_path("hijkl").is_err());
        assert!(longest_path_len("hijkl").is_err());
    }

    #[test]
    fn longest_path_lengths_for_the_example_passcodes() {
        assert_eq!(longest_path_len("ihgpwlah").unwrap(), 370);
        assert_eq!(longest_path_len("kglvqrro").unwrap(), 492);
        assert_eq!(longest_path_len("ulqzkmiv").unwrap(), 830);
    }
}
