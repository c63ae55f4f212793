//! Day 5: MD5-mined door passwords.

use md5::{Digest, Md5};

/// Hash `<door_id><index>` and, if the digest starts with five zeros, return
/// the two hex characters right after the prefix.
fn interesting_pair(door_id: &str, index: u64) -> Option<(char, char)> {
    let mut hasher = Md5::new();
    hasher.update(door_id.as_bytes());
    hasher.update(index.to_string().as_bytes());
    let digest = hex::encode(hasher.finalize());

    if !digest.starts_with("00000") {
        return None;
    }

    let mut tail = digest.chars().skip(5);
    Some((tail.next()?, tail.next()?))
}

/// First door: the password is the sixth hex character of the first eight
/// interesting hashes, in order of discovery.
pub fn first_password(door_id: &str) -> String {
    (0u64..)
        .filter_map(|index| interesting_pair(door_id, index))
        .map(|(character, _)| character)
        .take(8)
        .collect()
}

/// Second door: the sixth character names the position, the seventh the
/// character; out-of-range positions are skipped and only the first write
/// to a position sticks.
pub fn second_password(door_id: &str) -> String {
    let mut password = ['_'; 8];
    let mut filled = 0;

    for (position, character) in (0u64..).filter_map(|index| interesting_pair(door_id, index)) {
        let Some(slot) = position.to_digit(8) else {
            continue;
        };
        let slot = slot as usize;
        if password[slot] != '_' {
            continue;
        }

        password[slot] = character;
        filled += 1;
        tracing::debug!("password progress: {}", password.iter().collect::<String>());
        if filled == password.len() {
            break;
        }
    }

    password.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Full searches grind through tens of millions of hashes; the tests pin
    // the documented interesting indexes for door ID "abc" instead.

    #[test]
    fn interesting_hashes_for_the_example_door() {
        assert_eq!(interesting_pair("abc", 3231929), Some(('1', '5')));
        assert_eq!(interesting_pair("abc", 5017308), Some(('8', 'f')));
        assert_eq!(interesting_pair("abc", 5357525), Some(('4', 'e')));
    }

    #[test]
    fn ordinary_hashes_are_not_interesting() {
        assert_eq!(interesting_pair("abc", 0), None);
        assert_eq!(interesting_pair("abc", 3231928), None);
    }
}
