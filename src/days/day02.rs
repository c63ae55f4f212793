//! Day 2: bathroom keypad codes.

use std::collections::HashMap;

use crate::utils::error::Result;

const MOVES: [(char, (isize, isize)); 4] = [
    ('U', (-1, 0)),
    ('D', (1, 0)),
    ('L', (0, -1)),
    ('R', (0, 1)),
];

/// Keypad with a configurable layout; all valid button transitions are
/// precomputed so following an instruction line is a plain map lookup.
struct Keypad {
    transitions: HashMap<(char, char), char>,
}

impl Keypad {
    fn square() -> Self {
        Self::from_layout(&["123", "456", "789"])
    }

    fn diamond() -> Self {
        Self::from_layout(&["  1  ", " 234 ", "56789", " ABC ", "  D  "])
    }

    fn from_layout(layout: &[&str]) -> Self {
        let grid: Vec<Vec<char>> = layout.iter().map(|row| row.chars().collect()).collect();

        let mut transitions = HashMap::new();
        for (row, line) in grid.iter().enumerate() {
            for (col, &button) in line.iter().enumerate() {
                if button == ' ' {
                    continue;
                }

                for (movement, (row_offset, col_offset)) in MOVES {
                    let Some(next_row) = row.checked_add_signed(row_offset) else {
                        continue;
                    };
                    let Some(next_col) = col.checked_add_signed(col_offset) else {
                        continue;
                    };
                    let next = grid
                        .get(next_row)
                        .and_then(|line| line.get(next_col))
                        .copied()
                        .unwrap_or(' ');
                    if next != ' ' {
                        transitions.insert((button, movement), next);
                    }
                }
            }
        }

        Self { transitions }
    }

    /// Follow one line of movements; moves without a transition keep the
    /// current button.
    fn follow(&self, moves: &str, mut button: char) -> char {
        for movement in moves.chars() {
            if let Some(&next) = self.transitions.get(&(button, movement)) {
                button = next;
            }
        }
        button
    }

    fn code(&self, instructions: &str) -> String {
        let mut button = '5';
        let mut code = String::new();
        for line in instructions.lines() {
            button = self.follow(line, button);
            code.push(button);
        }
        code
    }
}

pub fn part_one(input: &str) -> Result<String> {
    Ok(Keypad::square().code(input))
}

pub fn part_two(input: &str) -> Result<String> {
    Ok(Keypad::diamond().code(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "ULL\nRRDDD\nLURDL\nUUUUD";

    #[test]
    fn square_keypad_code() {
        assert_eq!(part_one(EXAMPLE).unwrap(), "1985");
    }

    #[test]
    fn diamond_keypad_code() {
        assert_eq!(part_two(EXAMPLE).unwrap(), "5DB3");
    }

    #[test]
    fn moves_off_the_keypad_are_ignored() {
        let keypad = Keypad::square();
        assert_eq!(keypad.follow("UUUU", '5'), '2');
        assert_eq!(keypad.follow("LLLL", '1'), '1');
    }
}
