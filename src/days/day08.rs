//! Day 8: the tiny LCD by the bathroom keypad.

use std::fmt;

use regex::Regex;

use crate::utils::error::{PuzzleError, Result};

/// Bitmap font used on the screen; letters are 5 pixels wide and 6 tall,
/// stored row by row with bit 0 as the leftmost column. Only the letters
/// needed for the archived puzzle answers are known.
const FONT_DATA: [(char, [u64; 6]); 9] = [
    ('C', [0b00110, 0b01001, 0b00001, 0b00001, 0b01001, 0b00110]),
    ('H', [0b01001, 0b01001, 0b01111, 0b01001, 0b01001, 0b01001]),
    ('J', [0b01100, 0b01000, 0b01000, 0b01000, 0b01001, 0b00110]),
    ('K', [0b01001, 0b00101, 0b00011, 0b00101, 0b00101, 0b01001]),
    ('L', [0b00001, 0b00001, 0b00001, 0b00001, 0b00001, 0b01111]),
    ('P', [0b00111, 0b01001, 0b01001, 0b00111, 0b00001, 0b00001]),
    ('R', [0b00111, 0b01001, 0b01001, 0b00111, 0b00101, 0b01001]),
    ('Y', [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b01111, 0b01000, 0b00100, 0b00010, 0b00001, 0b01111]),
];

const LETTER_WIDTH: usize = 5;
const LETTER_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Rect { width: usize, height: usize },
    RotateRow { row: usize, by: usize },
    RotateColumn { column: usize, by: usize },
}

fn parse(input: &str) -> Result<Vec<Command>> {
    let rect = Regex::new(r"^rect (\d+)x(\d+)$").unwrap();
    let rotate = Regex::new(r"^rotate (row y=|column x=)(\d+) by (\d+)$").unwrap();

    input
        .lines()
        .map(|line| {
            if let Some(captures) = rect.captures(line) {
                return Ok(Command::Rect {
                    width: captures[1].parse()?,
                    height: captures[2].parse()?,
                });
            }
            if let Some(captures) = rotate.captures(line) {
                let offset = captures[2].parse()?;
                let by = captures[3].parse()?;
                return Ok(match &captures[1] {
                    "row y=" => Command::RotateRow { row: offset, by },
                    _ => Command::RotateColumn { column: offset, by },
                });
            }
            Err(PuzzleError::malformed(format!(
                "not a rect/rotate command: {line:?}"
            )))
        })
        .collect()
}

/// Monochrome screen stored as one integer per row, bit x = column x.
struct Screen {
    width: usize,
    height: usize,
    rows: Vec<u64>,
    row_mask: u64,
}

impl Screen {
    fn new(width: usize, height: usize) -> Self {
        debug_assert!(width < 64, "rows are stored as u64 bit sets");
        Self {
            width,
            height,
            rows: vec![0; height],
            row_mask: (1 << width) - 1,
        }
    }

    /// Render a string of known letters onto a fresh, fitting screen.
    fn from_text(text: &str) -> Result<Self> {
        let mut screen = Self::new(text.chars().count() * LETTER_WIDTH, LETTER_HEIGHT);
        for (index, letter) in text.chars().enumerate() {
            let bitmap = FONT_DATA
                .iter()
                .find(|&&(known, _)| known == letter)
                .map(|&(_, bitmap)| bitmap)
                .ok_or_else(|| {
                    PuzzleError::solver(format!("letter {letter} is not in the font"))
                })?;
            let shift = index * LETTER_WIDTH;
            for (row, bits) in bitmap.iter().enumerate() {
                screen.rows[row] |= (bits << shift) & screen.row_mask;
            }
        }
        Ok(screen)
    }

    fn apply_all(&mut self, commands: &[Command]) {
        for &command in commands {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Rect { width, height } => {
                let bits = (1 << width) - 1;
                for row in self.rows.iter_mut().take(height) {
                    *row |= bits;
                }
            }
            Command::RotateRow { row, by } => {
                let by = by % self.width;
                if by == 0 {
                    return;
                }
                let bits = self.rows[row];
                self.rows[row] = ((bits << by) & self.row_mask) | (bits >> (self.width - by));
            }
            Command::RotateColumn { column, by } => {
                let by = by % self.height;
                let mask = 1 << column;
                let old: Vec<u64> = self.rows.iter().map(|row| row & mask).collect();
                for (index, row) in self.rows.iter_mut().enumerate() {
                    let source = (index + self.height - by) % self.height;
                    *row = (*row & !mask) | old[source];
                }
            }
        }
    }

    fn lit_pixels(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// OCR the screen contents against the bitmap font.
    fn to_text(&self) -> Result<String> {
        if self.width % LETTER_WIDTH != 0 || self.height != LETTER_HEIGHT {
            return Err(PuzzleError::solver("screen has an unexpected size"));
        }

        let letter_mask = (1 << LETTER_WIDTH) - 1;
        let mut text = String::new();
        for index in 0..self.width / LETTER_WIDTH {
            let shift = index * LETTER_WIDTH;
            let mut bitmap = [0u64; LETTER_HEIGHT];
            for (row, bits) in self.rows.iter().enumerate() {
                bitmap[row] = (bits >> shift) & letter_mask;
            }

            let letter = FONT_DATA
                .iter()
                .find(|&&(_, known)| known == bitmap)
                .map(|&(letter, _)| letter)
                .ok_or_else(|| {
                    PuzzleError::solver(format!("failed to recognize letter {index}"))
                })?;
            text.push(letter);
        }
        Ok(text)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                f.write_str(if row >> x & 1 == 1 { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

pub fn part_one(input: &str) -> Result<u32> {
    let mut screen = Screen::new(50, 6);
    screen.apply_all(&parse(input)?);
    Ok(screen.lit_pixels())
}

pub fn part_two(input: &str) -> Result<String> {
    let mut screen = Screen::new(50, 6);
    screen.apply_all(&parse(input)?);
    screen.to_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "rect 3x2\nrotate column x=1 by 1\nrotate row y=0 by 4\n\
                           rotate column x=1 by 1";

    #[test]
    fn example_commands_light_six_pixels() {
        let mut screen = Screen::new(7, 3);
        screen.apply_all(&parse(EXAMPLE).unwrap());
        assert_eq!(screen.lit_pixels(), 6);
        assert_eq!(screen.to_string(), ".#..#.#\n#.#....\n.#.....");
    }

    #[test]
    fn row_rotation_wraps_around() {
        let mut screen = Screen::new(7, 3);
        screen.apply(Command::Rect {
            width: 2,
            height: 1,
        });
        screen.apply(Command::RotateRow { row: 0, by: 6 });
        assert_eq!(screen.to_string(), "#.....#\n.......\n.......");
    }

    #[test]
    fn ocr_recognizes_font_letters() {
        let screen = Screen::from_text("ZPHCKY").unwrap();
        assert_eq!(screen.to_text().unwrap(), "ZPHCKY");
    }

    #[test]
    fn ocr_rejects_unknown_glyphs() {
        let mut screen = Screen::new(5, 6);
        screen.apply(Command::Rect {
            width: 5,
            height: 6,
        });
        assert!(screen.to_text().is_err());
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(parse("rotate diagonal d=1 by 2").is_err());
    }
}
