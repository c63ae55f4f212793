//! Day 14: one-time pad keys mined from an MD5 stream.

use md5::{Digest, Md5};

/// How far ahead a candidate key must be confirmed.
const LOOKAHEAD: usize = 1000;

/// Memoized, optionally stretched MD5 hex stream over `<salt><index>`.
///
/// Key confirmation re-reads the next thousand digests over and over, so
/// digests are memoized in a fixed-size slot table large enough to cover the
/// lookahead window.
pub struct Hasher {
    salt: String,
    extra_rounds: usize,
    slots: Vec<Option<(usize, String)>>,
}

impl Hasher {
    const SLOTS: usize = 4096;

    pub fn new(salt: &str, extra_rounds: usize) -> Self {
        Self {
            salt: salt.to_string(),
            extra_rounds,
            slots: vec![None; Self::SLOTS],
        }
    }

    fn digest(&mut self, index: usize) -> String {
        let slot = index % Self::SLOTS;
        if let Some((cached_index, digest)) = &self.slots[slot] {
            if *cached_index == index {
                return digest.clone();
            }
        }

        let mut digest = hex::encode(Md5::digest(format!("{}{}", self.salt, index)));
        for _ in 0..self.extra_rounds {
            digest = hex::encode(Md5::digest(digest.as_bytes()));
        }

        self.slots[slot] = Some((index, digest.clone()));
        digest
    }
}

/// First character that appears three times in a row.
fn first_triple(digest: &str) -> Option<u8> {
    digest
        .as_bytes()
        .windows(3)
        .find(|w| w[0] == w[1] && w[1] == w[2])
        .map(|w| w[0])
}

/// A candidate is a key if one of the next thousand digests repeats its
/// triple character five times.
fn confirms_key(hasher: &mut Hasher, character: u8, index: usize) -> bool {
    (index + 1..=index + LOOKAHEAD).any(|check| {
        hasher
            .digest(check)
            .as_bytes()
            .windows(5)
            .any(|w| w.iter().all(|&b| b == character))
    })
}

/// Index of the hash that produces the `num_keys`-th one-time pad key.
pub fn otp_index(salt: &str, extra_rounds: usize, num_keys: usize) -> usize {
    let mut hasher = Hasher::new(salt, extra_rounds);
    let mut found = 0;

    for index in 0.. {
        let Some(character) = first_triple(&hasher.digest(index)) else {
            continue;
        };
        if confirms_key(&mut hasher, character, index) {
            found += 1;
            tracing::debug!("key {found} at index {index}");
            if found == num_keys {
                return index;
            }
        }
    }
    unreachable!("the index stream is unbounded")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triples_are_detected_in_order() {
        let mut hasher = Hasher::new("abc", 0);
        assert_eq!(first_triple(&hasher.digest(17)), None);
        assert_eq!(first_triple(&hasher.digest(18)), Some(b'8'));
    }

    #[test]
    fn first_triple_alone_is_not_a_key() {
        // Index 18 has a triple but no confirming quintuple within range.
        let mut hasher = Hasher::new("abc", 0);
        assert!(!confirms_key(&mut hasher, b'8', 18));
    }

    #[test]
    fn sixty_fourth_key_for_the_example_salt() {
        assert_eq!(otp_index("abc", 0, 1), 39);
        assert_eq!(otp_index("abc", 0, 64), 22728);
    }

    #[test]
    fn stretching_applies_extra_rounds() {
        let mut hasher = Hasher::new("abc", 2016);
        assert_eq!(hasher.digest(0), "a107ff634856bb300138cac6568c0f24");
    }
}
