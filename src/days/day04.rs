//! Day 4: real rooms and their decrypted names.

use std::cmp::Reverse;
use std::collections::HashMap;

use regex::Regex;

use crate::utils::error::{PuzzleError, Result};

#[derive(Debug, Clone)]
struct Room {
    name: String,
    sector_id: u32,
    checksum: String,
}

impl Room {
    fn is_real(&self) -> bool {
        self.computed_checksum() == self.checksum
    }

    /// The five most common letters of the encrypted name, ties broken
    /// alphabetically.
    fn computed_checksum(&self) -> String {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for letter in self.name.chars().filter(|&c| c != '-') {
            *counts.entry(letter).or_insert(0) += 1;
        }

        let mut statistics: Vec<(usize, char)> =
            counts.into_iter().map(|(letter, n)| (n, letter)).collect();
        statistics.sort_by_key(|&(n, letter)| (Reverse(n), letter));

        statistics.iter().take(5).map(|&(_, letter)| letter).collect()
    }

    /// Shift cipher: letters rotate by the sector ID, dashes become spaces.
    fn decrypted_name(&self) -> String {
        let shift = self.sector_id % 26;
        self.name
            .chars()
            .map(|c| match c {
                '-' => ' ',
                _ => {
                    let offset = (c as u32 - 'a' as u32 + shift) % 26;
                    char::from_u32('a' as u32 + offset).unwrap_or(c)
                }
            })
            .collect()
    }
}

fn parse(input: &str) -> Result<Vec<Room>> {
    let pattern = Regex::new(r"^([a-z-]+)-(\d+)\[([a-z]+)\]$").unwrap();

    input
        .lines()
        .map(|line| {
            let captures = pattern
                .captures(line)
                .ok_or_else(|| PuzzleError::malformed(format!("unparsable room {line:?}")))?;
            Ok(Room {
                name: captures[1].to_string(),
                sector_id: captures[2].parse()?,
                checksum: captures[3].to_string(),
            })
        })
        .collect()
}

pub fn part_one(input: &str) -> Result<u32> {
    let rooms = parse(input)?;
    Ok(rooms
        .iter()
        .filter(|room| room.is_real())
        .map(|room| room.sector_id)
        .sum())
}

pub fn part_two(input: &str) -> Result<u32> {
    let rooms = parse(input)?;
    let storage: Vec<&Room> = rooms
        .iter()
        .filter(|room| room.is_real() && room.decrypted_name() == "northpole object storage")
        .collect();

    match storage.as_slice() {
        [room] => Ok(room.sector_id),
        _ => Err(PuzzleError::solver(format!(
            "expected exactly one storage room, found {}",
            storage.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_real_and_decoy_rooms() {
        let rooms = parse(
            "aaaaa-bbb-z-y-x-123[abxyz]\n\
             a-b-c-d-e-f-g-h-987[abcde]\n\
             not-a-real-room-404[oarel]\n\
             totally-real-room-200[decoy]",
        )
        .unwrap();

        let real: Vec<bool> = rooms.iter().map(Room::is_real).collect();
        assert_eq!(real, [true, true, true, false]);
    }

    #[test]
    fn sums_real_sector_ids() {
        let input = "aaaaa-bbb-z-y-x-123[abxyz]\n\
                     a-b-c-d-e-f-g-h-987[abcde]\n\
                     not-a-real-room-404[oarel]\n\
                     totally-real-room-200[decoy]";
        assert_eq!(part_one(input).unwrap(), 1514);
    }

    #[test]
    fn decrypts_room_names() {
        let room = Room {
            name: "qzmt-zixmtkozy-ivhz".to_string(),
            sector_id: 343,
            checksum: String::new(),
        };
        assert_eq!(room.decrypted_name(), "very encrypted name");
    }

    #[test]
    fn rejects_lines_without_checksum() {
        assert!(parse("qzmt-zixmtkozy-ivhz-343").is_err());
    }
}
