//! Day 15: timing a capsule through rotating discs.

use regex::Regex;

use crate::utils::error::{PuzzleError, Result};

#[derive(Debug, Clone, Copy)]
struct Disc {
    index: i64,
    positions: i64,
    initial_position: i64,
}

fn parse(input: &str) -> Result<Vec<Disc>> {
    let pattern =
        Regex::new(r"^Disc #(\d+) has (\d+) positions; at time=0, it is at position (\d+)\.$")
            .unwrap();

    input
        .lines()
        .map(|line| {
            let captures = pattern
                .captures(line)
                .ok_or_else(|| PuzzleError::malformed(format!("unparsable disc {line:?}")))?;
            let disc = Disc {
                index: captures[1].parse()?,
                positions: captures[2].parse()?,
                initial_position: captures[3].parse()?,
            };
            if disc.positions < 1 {
                return Err(PuzzleError::malformed(format!(
                    "disc #{} has no positions",
                    disc.index
                )));
            }
            Ok(disc)
        })
        .collect()
}

/// Extended Euclidean algorithm: returns (gcd, x, y) with b*x + n*y = gcd.
fn egcd(b: i64, n: i64) -> (i64, i64, i64) {
    let (mut b, mut n) = (b, n);
    let (mut x0, mut x1) = (1, 0);
    let (mut y0, mut y1) = (0, 1);
    while n != 0 {
        let q = b / n;
        (b, n) = (n, b - q * n);
        (x0, x1) = (x1, x0 - q * x1);
        (y0, y1) = (y1, y0 - q * y1);
    }
    (b, x0, y0)
}

/// Solve x = coefficient (mod modulus) for all congruences at once.
fn solve_congruences(congruences: &[(i64, i64)]) -> Result<i64> {
    let common_multiple: i64 = congruences.iter().map(|&(_, modulus)| modulus).product();

    let mut solution = 0;
    for &(coefficient, modulus) in congruences {
        let other = common_multiple / modulus;
        let (gcd, _, y0) = egcd(modulus, other);
        if gcd != 1 {
            return Err(PuzzleError::solver("disc periods are not coprime"));
        }
        solution += coefficient * y0 * other;
    }

    Ok(solution.rem_euclid(common_multiple))
}

/// First press time where every disc's slot lines up as the capsule falls.
///
/// The capsule reaches disc i at time t+i, so each disc contributes the
/// congruence t = -(index + initial_position) (mod positions).
fn first_alignment(discs: &[Disc]) -> Result<i64> {
    let congruences: Vec<(i64, i64)> = discs
        .iter()
        .map(|disc| (-(disc.index + disc.initial_position), disc.positions))
        .collect();
    solve_congruences(&congruences)
}

pub fn part_one(input: &str) -> Result<i64> {
    first_alignment(&parse(input)?)
}

pub fn part_two(input: &str) -> Result<i64> {
    let mut discs = parse(input)?;
    discs.push(Disc {
        index: discs.len() as i64 + 1,
        positions: 11,
        initial_position: 0,
    });
    first_alignment(&discs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Disc #1 has 5 positions; at time=0, it is at position 4.\n\
                           Disc #2 has 2 positions; at time=0, it is at position 1.";

    #[test]
    fn example_capsule_drops_at_time_five() {
        assert_eq!(part_one(EXAMPLE).unwrap(), 5);
    }

    #[test]
    fn congruence_solver_matches_hand_computation() {
        // x = 2 (mod 3), x = 3 (mod 5), x = 2 (mod 7) has solution 23.
        assert_eq!(solve_congruences(&[(2, 3), (3, 5), (2, 7)]).unwrap(), 23);
    }

    #[test]
    fn non_coprime_periods_are_rejected() {
        assert!(solve_congruences(&[(1, 4), (2, 6)]).is_err());
    }

    #[test]
    fn extended_euclid_produces_bezout_coefficients() {
        let (gcd, x, y) = egcd(240, 46);
        assert_eq!(gcd, 2);
        assert_eq!(240 * x + 46 * y, 2);
    }
}
