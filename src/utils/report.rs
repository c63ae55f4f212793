use std::fmt::Display;

/// Render the two answers in the fixed cross-day output format.
pub fn format_answers(part_one: impl Display, part_two: impl Display) -> String {
    format!("Part One: {}\nPart Two: {}", part_one, part_two)
}

/// Print both answers to stdout, one line each.
pub fn print_answers(part_one: impl Display, part_two: impl Display) {
    println!("{}", format_answers(part_one, part_two));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_numeric_answers() {
        assert_eq!(format_answers(273, 79), "Part One: 273\nPart Two: 79");
    }

    #[test]
    fn formats_string_answers() {
        assert_eq!(
            format_answers("easter", "N/A"),
            "Part One: easter\nPart Two: N/A"
        );
    }
}
