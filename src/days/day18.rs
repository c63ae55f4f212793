//! Day 18: safe tiles between the traps.

use crate::utils::error::{PuzzleError, Result};

/// Next row of tiles; tiles beyond both ends count as safe.
fn next_row(row: &[u8]) -> Vec<u8> {
    (0..row.len())
        .map(|index| {
            let left = if index == 0 { b'.' } else { row[index - 1] };
            let center = row[index];
            let right = if index + 1 == row.len() {
                b'.'
            } else {
                row[index + 1]
            };
            match (left, center, right) {
                (b'^', b'^', b'.')
                | (b'.', b'^', b'^')
                | (b'^', b'.', b'.')
                | (b'.', b'.', b'^') => b'^',
                _ => b'.',
            }
        })
        .collect()
}

/// Count safe tiles over the given number of rows, first row included.
pub fn safe_tiles(first_row: &str, num_rows: usize) -> Result<usize> {
    let first_row = first_row.trim_end();
    if first_row.is_empty() || !first_row.bytes().all(|tile| tile == b'.' || tile == b'^') {
        return Err(PuzzleError::malformed(format!(
            "tile row must be non-empty '.'/'^', got {first_row:?}"
        )));
    }

    let mut row = first_row.as_bytes().to_vec();
    let mut safe = 0;
    for _ in 0..num_rows {
        safe += row.iter().filter(|&&tile| tile == b'.').count();
        row = next_row(&row);
    }
    Ok(safe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_evolve_by_the_trap_rules() {
        assert_eq!(next_row(b"..^^."), b".^^^^");
        assert_eq!(next_row(b".^^^^"), b"^^..^");
    }

    #[test]
    fn small_room_has_six_safe_tiles() {
        assert_eq!(safe_tiles("..^^.", 3).unwrap(), 6);
    }

    #[test]
    fn larger_example_has_38_safe_tiles() {
        assert_eq!(safe_tiles(".^^.^.^^^^", 10).unwrap(), 38);
    }

    #[test]
    fn rejects_unknown_tiles() {
        assert!(safe_tiles("..x^.", 3).is_err());
    }
}
