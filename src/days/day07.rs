//! Day 7: IPv7 transport-layer snooping and super-secret listening.

use std::collections::HashSet;

use crate::utils::error::Result;

/// Split an address into supernet (outside brackets) and hypernet (inside
/// brackets) sequences.
fn split_address(address: &str) -> (Vec<String>, Vec<String>) {
    let mut supernet = Vec::new();
    let mut hypernet = Vec::new();

    let mut current = String::new();
    let mut inside_brackets = false;
    for c in address.chars() {
        match c {
            '[' | ']' => {
                if !current.is_empty() {
                    if inside_brackets {
                        hypernet.push(std::mem::take(&mut current));
                    } else {
                        supernet.push(std::mem::take(&mut current));
                    }
                }
                inside_brackets = c == '[';
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        if inside_brackets {
            hypernet.push(current);
        } else {
            supernet.push(current);
        }
    }

    (supernet, hypernet)
}

/// An ABBA is a symmetric four-character window with two distinct letters.
fn contains_abba(sequence: &str) -> bool {
    sequence
        .as_bytes()
        .windows(4)
        .any(|w| w[0] == w[3] && w[1] == w[2] && w[0] != w[1])
}

/// All ABA-shaped triples in the sequences, as (outer, inner) letter pairs.
fn triples(sequences: &[String]) -> HashSet<(u8, u8)> {
    let mut found = HashSet::new();
    for sequence in sequences {
        for w in sequence.as_bytes().windows(3) {
            if w[0] == w[2] && w[0] != w[1] {
                found.insert((w[0], w[1]));
            }
        }
    }
    found
}

fn has_tls_support(address: &str) -> bool {
    let (supernet, hypernet) = split_address(address);
    supernet.iter().any(|s| contains_abba(s)) && !hypernet.iter().any(|s| contains_abba(s))
}

fn has_ssl_support(address: &str) -> bool {
    let (supernet, hypernet) = split_address(address);
    let abas = triples(&supernet);
    // A hypernet BAB corresponds to the supernet ABA with the letters swapped.
    let babs: HashSet<(u8, u8)> = triples(&hypernet)
        .into_iter()
        .map(|(outer, inner)| (inner, outer))
        .collect();
    !abas.is_disjoint(&babs)
}

pub fn part_one(input: &str) -> Result<usize> {
    Ok(input.lines().filter(|line| has_tls_support(line)).count())
}

pub fn part_two(input: &str) -> Result<usize> {
    Ok(input.lines().filter(|line| has_ssl_support(line)).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tls_support() {
        assert!(has_tls_support("abba[mnop]qrst"));
        assert!(!has_tls_support("abcd[bddb]xyyx"));
        assert!(!has_tls_support("aaaa[qwer]tyui"));
        assert!(has_tls_support("ioxxoj[asdfgh]zxcvbn"));
    }

    #[test]
    fn ssl_support() {
        assert!(has_ssl_support("aba[bab]xyz"));
        assert!(!has_ssl_support("xyx[xyx]xyx"));
        assert!(has_ssl_support("aaa[kek]eke"));
        assert!(has_ssl_support("zazbz[bzb]cdb"));
    }

    #[test]
    fn counts_supported_addresses() {
        let input = "abba[mnop]qrst\nabcd[bddb]xyyx\naaaa[qwer]tyui\nioxxoj[asdfgh]zxcvbn";
        assert_eq!(part_one(input).unwrap(), 2);

        let input = "aba[bab]xyz\nxyx[xyx]xyx\naaa[kek]eke\nzazbz[bzb]cdb";
        assert_eq!(part_two(input).unwrap(), 3);
    }
}
