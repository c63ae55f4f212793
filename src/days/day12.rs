//! Day 12: the assembunny interpreter in the monorail station.

use regex::Regex;

use crate::utils::error::{PuzzleError, Result};

#[derive(Debug, Clone, Copy)]
enum Value {
    Register(usize),
    Literal(i64),
}

#[derive(Debug, Clone, Copy)]
enum Instruction {
    Copy { source: Value, target: usize },
    Increment { register: usize, delta: i64 },
    JumpIfNotZero { condition: Value, offset: i64 },
}

fn register_index(name: &str) -> usize {
    (name.as_bytes()[0] - b'a') as usize
}

fn parse_value(token: &str) -> Result<Value> {
    match token {
        "a" | "b" | "c" | "d" => Ok(Value::Register(register_index(token))),
        _ => Ok(Value::Literal(token.parse()?)),
    }
}

fn parse(input: &str) -> Result<Vec<Instruction>> {
    let copy = Regex::new(r"^cpy (-?\d+|[a-d]) ([a-d])$").unwrap();
    let calc = Regex::new(r"^(inc|dec) ([a-d])$").unwrap();
    let jump = Regex::new(r"^jnz (-?\d+|[a-d]) (-?\d+)$").unwrap();

    input
        .lines()
        .map(|line| {
            if let Some(captures) = copy.captures(line) {
                return Ok(Instruction::Copy {
                    source: parse_value(&captures[1])?,
                    target: register_index(&captures[2]),
                });
            }
            if let Some(captures) = calc.captures(line) {
                let delta = if &captures[1] == "inc" { 1 } else { -1 };
                return Ok(Instruction::Increment {
                    register: register_index(&captures[2]),
                    delta,
                });
            }
            if let Some(captures) = jump.captures(line) {
                return Ok(Instruction::JumpIfNotZero {
                    condition: parse_value(&captures[1])?,
                    offset: captures[2].parse()?,
                });
            }
            Err(PuzzleError::malformed(format!(
                "unrecognized instruction {line:?}"
            )))
        })
        .collect()
}

fn fetch(registers: &[i64; 4], value: Value) -> i64 {
    match value {
        Value::Register(index) => registers[index],
        Value::Literal(literal) => literal,
    }
}

/// Run to completion and return the final register file.
fn run(program: &[Instruction], mut registers: [i64; 4]) -> [i64; 4] {
    let mut ip: i64 = 0;
    while let Some(&instruction) = usize::try_from(ip).ok().and_then(|i| program.get(i)) {
        match instruction {
            Instruction::Copy { source, target } => {
                registers[target] = fetch(&registers, source);
                ip += 1;
            }
            Instruction::Increment { register, delta } => {
                registers[register] += delta;
                ip += 1;
            }
            Instruction::JumpIfNotZero { condition, offset } => {
                ip += if fetch(&registers, condition) != 0 {
                    offset
                } else {
                    1
                };
            }
        }
    }
    registers
}

pub fn part_one(input: &str) -> Result<i64> {
    let program = parse(input)?;
    Ok(run(&program, [0; 4])[0])
}

pub fn part_two(input: &str) -> Result<i64> {
    let program = parse(input)?;
    Ok(run(&program, [0, 0, 1, 0])[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "cpy 41 a\ninc a\ninc a\ndec a\njnz a 2\ndec a";

    #[test]
    fn example_program_computes_42() {
        assert_eq!(part_one(EXAMPLE).unwrap(), 42);
    }

    #[test]
    fn jump_conditions_read_registers_and_literals() {
        // c starts at 1, so the jnz skips the extra increment.
        let program = "cpy 5 a\njnz c 2\ninc a";
        assert_eq!(part_one(program).unwrap(), 6);
        assert_eq!(part_two(program).unwrap(), 5);
    }

    #[test]
    fn rejects_copies_into_literals() {
        assert!(parse("cpy 1 2").is_err());
    }
}
