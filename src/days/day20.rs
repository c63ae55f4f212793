//! Day 20: the firewall's IP blacklist.

use crate::utils::error::{PuzzleError, Result};

const ADDRESS_SPACE: u64 = 1 << 32;

fn parse(input: &str) -> Result<Vec<(u32, u32)>> {
    input
        .lines()
        .map(|line| {
            let (lower, upper) = line
                .trim()
                .split_once('-')
                .ok_or_else(|| PuzzleError::malformed(format!("unparsable range {line:?}")))?;
            Ok((lower.parse()?, upper.parse()?))
        })
        .collect()
}

/// Sort and merge overlapping or adjacent ranges.
fn simplify(mut ranges: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
    ranges.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::new();
    for (lower, upper) in ranges {
        if let Some(last) = merged.last_mut() {
            if lower <= last.1.saturating_add(1) {
                last.1 = last.1.max(upper);
                continue;
            }
        }
        merged.push((lower, upper));
    }
    merged
}

fn blacklist(input: &str) -> Result<Vec<(u32, u32)>> {
    let ranges = parse(input)?;
    if ranges.is_empty() {
        return Err(PuzzleError::malformed("blacklist is empty"));
    }
    Ok(simplify(ranges))
}

/// Lowest address not covered by the blacklist.
pub fn part_one(input: &str) -> Result<u64> {
    let blacklist = blacklist(input)?;
    match blacklist[0] {
        (0, upper) => Ok(u64::from(upper) + 1),
        _ => Ok(0),
    }
}

/// Number of addresses in the full 32-bit space left unblocked.
pub fn part_two(input: &str) -> Result<u64> {
    let blocked: u64 = blacklist(input)?
        .iter()
        .map(|&(lower, upper)| u64::from(upper) - u64::from(lower) + 1)
        .sum();
    Ok(ADDRESS_SPACE - blocked)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "5-8\n0-2\n4-7";

    #[test]
    fn merges_overlapping_and_adjacent_ranges() {
        assert_eq!(
            simplify(vec![(5, 8), (0, 2), (4, 7)]),
            vec![(0, 2), (4, 8)]
        );
        assert_eq!(simplify(vec![(0, 2), (3, 5)]), vec![(0, 5)]);
        assert_eq!(simplify(vec![(0, 2), (4, 5)]), vec![(0, 2), (4, 5)]);
    }

    #[test]
    fn lowest_allowed_address() {
        assert_eq!(part_one(EXAMPLE).unwrap(), 3);
        assert_eq!(part_one("1-9").unwrap(), 0);
    }

    #[test]
    fn counts_allowed_addresses() {
        assert_eq!(part_two(EXAMPLE).unwrap(), ADDRESS_SPACE - 8);
    }

    #[test]
    fn full_space_blacklist_leaves_nothing() {
        assert_eq!(part_one("0-4294967295").unwrap(), ADDRESS_SPACE);
        assert_eq!(part_two("0-4294967295").unwrap(), 0);
    }
}
