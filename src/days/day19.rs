//! Day 19: an elephant wins the white-elephant party.

/// Winning elf when presents are stolen from the left neighbor.
///
/// Closed form: the winner is always odd and advances by two for every elf
/// beyond the largest power of two at or below the circle size.
pub fn stealing_from_neighbor(elf_count: usize) -> usize {
    let offset = 1 << elf_count.ilog2();
    2 * (elf_count - offset) + 1
}

/// Winning elf when presents are stolen from the elf across the circle.
///
/// Almost-closed form over intervals of size 2 * 3^n: positions in the
/// lower half win directly, positions in the upper half win every other
/// slot up to the interval bound.
pub fn stealing_across(elf_count: usize) -> usize {
    if elf_count < 2 {
        return 1;
    }

    let mut lower_bound;
    let mut upper_bound = 2;
    let mut chunk = 1;
    loop {
        lower_bound = upper_bound;
        upper_bound += 2 * chunk;
        chunk *= 3;
        if (lower_bound..upper_bound).contains(&elf_count) {
            break;
        }
    }

    let middle_bound = (lower_bound + upper_bound) / 2;
    if elf_count < middle_bound {
        elf_count - lower_bound + 1
    } else {
        upper_bound - 2 * (upper_bound - elf_count) + 1
    }
}

/// Elimination-by-elimination version of [`stealing_from_neighbor`]; far too
/// slow for the real circle but exact, so it backs the closed form.
pub fn stealing_from_neighbor_iterative(elf_count: usize) -> usize {
    // Successor indices form a linked list; skipped entries drop out of it.
    let mut next: Vec<usize> = (0..elf_count).map(|elf| (elf + 1) % elf_count).collect();

    let mut remaining = elf_count;
    let mut current = 0;
    while remaining > 1 {
        next[current] = next[next[current]];
        remaining -= 1;
        current = next[current];
    }
    current + 1
}

/// Elimination-by-elimination version of [`stealing_across`].
pub fn stealing_across_iterative(elf_count: usize) -> usize {
    let mut next: Vec<usize> = (0..elf_count).map(|elf| (elf + 1) % elf_count).collect();

    let mut remaining = elf_count;
    let mut current = 0;
    while remaining > 1 {
        // Walk halfway around; with two elves across, the left one loses.
        let mut before_victim = current;
        for _ in 0..remaining / 2 - 1 {
            before_victim = next[before_victim];
        }
        next[before_victim] = next[next[before_victim]];
        remaining -= 1;
        current = next[current];
    }
    current + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_elves() {
        assert_eq!(stealing_from_neighbor(5), 3);
        assert_eq!(stealing_across(5), 2);
    }

    #[test]
    fn closed_forms_match_the_eliminations() {
        for elf_count in 1..=200 {
            assert_eq!(
                stealing_from_neighbor(elf_count),
                stealing_from_neighbor_iterative(elf_count),
                "neighbor variant diverges at {elf_count}"
            );
        }
        for elf_count in 2..=200 {
            assert_eq!(
                stealing_across(elf_count),
                stealing_across_iterative(elf_count),
                "across variant diverges at {elf_count}"
            );
        }
    }

    #[test]
    fn power_of_two_circles_restart_at_one() {
        assert_eq!(stealing_from_neighbor(8), 1);
        assert_eq!(stealing_from_neighbor(15), 15);
        assert_eq!(stealing_from_neighbor(16), 1);
    }
}
