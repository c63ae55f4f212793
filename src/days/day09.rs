//! Day 9: experimental compression format.

use regex::Regex;

use crate::utils::error::{PuzzleError, Result};

/// Compute the decompressed length without materializing the output.
///
/// With `recursive` set, repeated chunks are decompressed again before
/// being counted; otherwise their literal length is used.
fn decompressed_len(marker: &Regex, compressed: &str, recursive: bool) -> Result<u64> {
    let mut total = 0u64;
    let mut offset = 0usize;

    while offset < compressed.len() {
        let Some(captures) = marker.captures_at(compressed, offset) else {
            // Trailing fixed chunk without a repetition marker.
            total += (compressed.len() - offset) as u64;
            break;
        };

        let whole = captures.get(0).unwrap();
        let length: usize = captures[1].parse()?;
        let repeat: u64 = captures[2].parse()?;

        // Fixed chunk before the marker counts once.
        total += (whole.start() - offset) as u64;

        let chunk_start = whole.end();
        let chunk_end = chunk_start + length;
        if chunk_end > compressed.len() {
            return Err(PuzzleError::malformed(format!(
                "marker ({length}x{repeat}) runs past the end of the input"
            )));
        }

        let chunk = &compressed[chunk_start..chunk_end];
        let chunk_len = if recursive {
            decompressed_len(marker, chunk, true)?
        } else {
            chunk.len() as u64
        };
        total += chunk_len * repeat;

        offset = chunk_end;
    }

    Ok(total)
}

fn marker_regex() -> Regex {
    Regex::new(r"\((\d+)x(\d+)\)").unwrap()
}

pub fn part_one(input: &str) -> Result<u64> {
    decompressed_len(&marker_regex(), input.trim_end(), false)
}

pub fn part_two(input: &str) -> Result<u64> {
    decompressed_len(&marker_regex(), input.trim_end(), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_expansion_lengths() {
        assert_eq!(part_one("ADVENT").unwrap(), 6);
        assert_eq!(part_one("A(1x5)BC").unwrap(), 7);
        assert_eq!(part_one("(3x3)XYZ").unwrap(), 9);
        assert_eq!(part_one("A(2x2)BCD(2x2)EFG").unwrap(), 11);
        assert_eq!(part_one("(6x1)(1x3)A").unwrap(), 6);
        assert_eq!(part_one("X(8x2)(3x3)ABCY").unwrap(), 18);
    }

    #[test]
    fn recursive_expansion_lengths() {
        assert_eq!(part_two("(3x3)XYZ").unwrap(), 9);
        assert_eq!(part_two("X(8x2)(3x3)ABCY").unwrap(), 20);
        assert_eq!(
            part_two("(27x12)(20x12)(13x14)(7x10)(1x12)A").unwrap(),
            241920
        );
        assert_eq!(
            part_two("(25x3)(3x3)ABC(2x3)XY(5x2)PQRSTX(18x9)(3x2)TwoThreeSevenSeven").unwrap(),
            445
        );
    }

    #[test]
    fn overlong_markers_are_rejected() {
        assert!(part_one("(10x2)AB").is_err());
    }
}
