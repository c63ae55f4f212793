//! Day 3: counting possible triangles.

use crate::utils::error::{PuzzleError, Result};

fn parse(input: &str) -> Result<Vec<[u32; 3]>> {
    input
        .lines()
        .map(|line| {
            let sides: Vec<u32> = line
                .split_whitespace()
                .map(str::parse)
                .collect::<std::result::Result<_, _>>()?;
            <[u32; 3]>::try_from(sides).map_err(|sides| {
                PuzzleError::malformed(format!(
                    "expected three side lengths, got {} in {line:?}",
                    sides.len()
                ))
            })
        })
        .collect()
}

fn valid_triangle(sides: &[u32; 3]) -> bool {
    let longest = sides[0].max(sides[1]).max(sides[2]);
    sides.iter().sum::<u32>() > 2 * longest
}

/// Regroup an n-by-3 matrix so every vertical run of three numbers becomes
/// one triple.
fn columnate(triples: &[[u32; 3]]) -> Result<Vec<[u32; 3]>> {
    if triples.len() % 3 != 0 {
        return Err(PuzzleError::malformed(
            "row count is not divisible by three",
        ));
    }

    let mut columns = Vec::with_capacity(triples.len());
    for rows in triples.chunks_exact(3) {
        for col in 0..3 {
            columns.push([rows[0][col], rows[1][col], rows[2][col]]);
        }
    }
    Ok(columns)
}

pub fn part_one(input: &str) -> Result<usize> {
    Ok(parse(input)?.iter().filter(|t| valid_triangle(t)).count())
}

pub fn part_two(input: &str) -> Result<usize> {
    let columns = columnate(&parse(input)?)?;
    Ok(columns.iter().filter(|t| valid_triangle(t)).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_triangle_is_invalid() {
        assert!(!valid_triangle(&[5, 10, 25]));
        assert!(!valid_triangle(&[5, 10, 15]));
        assert!(valid_triangle(&[5, 11, 15]));
    }

    #[test]
    fn vertical_regrouping() {
        let input = "101 301 501\n102 302 502\n103 303 503\n\
                     201 401 601\n202 402 602\n203 403 603";
        assert_eq!(part_two(input).unwrap(), 6);
    }

    #[test]
    fn rejects_incomplete_rows() {
        assert!(part_one("3 4").is_err());
        assert!(part_two("3 4 5").is_err());
    }
}
