//! Day 23: self-modifying assembunny and the keypad behind Santa's safe.

use regex::Regex;

use crate::utils::error::{PuzzleError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value {
    Register(usize),
    Literal(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Copy(Value, Value),
    Increment(Value),
    Decrement(Value),
    JumpIfNotZero(Value, Value),
    Toggle(Value),
    Multiply(Value, Value),
    Nop,
}

impl Instruction {
    /// Toggle rule: one-argument instructions flip between inc and dec,
    /// two-argument instructions flip between jnz and cpy.
    fn toggled(self) -> Instruction {
        match self {
            Instruction::Increment(value) => Instruction::Decrement(value),
            Instruction::Decrement(value) | Instruction::Toggle(value) => {
                Instruction::Increment(value)
            }
            Instruction::JumpIfNotZero(first, second) => Instruction::Copy(first, second),
            Instruction::Copy(first, second) | Instruction::Multiply(first, second) => {
                Instruction::JumpIfNotZero(first, second)
            }
            Instruction::Nop => Instruction::Nop,
        }
    }
}

/// One program slot; the optimizer marks replaced instructions so toggles
/// and stray jumps into the rewritten chunk are caught.
#[derive(Debug, Clone, Copy)]
struct Slot {
    instruction: Instruction,
    optimized: bool,
    chunk_head: bool,
}

impl Slot {
    fn new(instruction: Instruction) -> Self {
        Self {
            instruction,
            optimized: false,
            chunk_head: false,
        }
    }

    fn optimized(instruction: Instruction, chunk_head: bool) -> Self {
        Self {
            instruction,
            optimized: true,
            chunk_head,
        }
    }
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

fn parse(input: &str) -> Result<Vec<Slot>> {
    let unary = Regex::new(r"^(inc|dec|tgl) (-?\d+|[a-d])$").unwrap();
    let binary = Regex::new(r"^(cpy|jnz) (-?\d+|[a-d]) (-?\d+|[a-d])$").unwrap();

    input
        .lines()
        .map(|line| {
            if let Some(captures) = unary.captures(line) {
                let value = parse_value(&captures[2])?;
                let instruction = match &captures[1] {
                    "inc" => Instruction::Increment(value),
                    "dec" => Instruction::Decrement(value),
                    _ => Instruction::Toggle(value),
                };
                return Ok(Slot::new(instruction));
            }
            if let Some(captures) = binary.captures(line) {
                let first = parse_value(&captures[2])?;
                let second = parse_value(&captures[3])?;
                let instruction = match &captures[1] {
                    "cpy" => Instruction::Copy(first, second),
                    _ => Instruction::JumpIfNotZero(first, second),
                };
                return Ok(Slot::new(instruction));
            }
            Err(PuzzleError::malformed(format!(
                "unrecognized instruction {line:?}"
            )))
        })
        .collect()
}

/// Replace the canonical nested add-loop with a direct multiplication.
///
/// The archived input spends almost all of its time in one such loop; the
/// rewrite pads with nops so jump offsets stay valid. Not finding the shape
/// is treated as fatal because the program would be far too slow without it.
fn optimize(program: &mut [Slot]) -> Result<()> {
    use Instruction::{Copy, Decrement, Increment, JumpIfNotZero};
    use Value::{Literal, Register};

    for offset in 0..program.len().saturating_sub(7) {
        let window: Vec<Instruction> = program[offset..offset + 8]
            .iter()
            .map(|slot| slot.instruction)
            .collect();

        let [Copy(Register(a), Register(d)), Copy(Literal(0), Register(a2)), Copy(Register(b), Register(c)), Increment(Register(a3)), Decrement(Register(c2)), JumpIfNotZero(Register(c3), Literal(-2)), Decrement(Register(d2)), JumpIfNotZero(Register(d3), Literal(-5))] =
            window.as_slice()
        else {
            continue;
        };
        if a2 != a || a3 != a || c2 != c || c3 != c || d2 != d {
            continue;
        }
        let distinct = [a, b, c, d];
        if (0..distinct.len()).any(|i| distinct[i + 1..].contains(&distinct[i])) {
            continue;
        }

        let replacement = [
            Instruction::Multiply(Register(*b), Register(*a)),
            // The loop counters end up cleared.
            Instruction::Copy(Literal(0), Register(*c)),
            Instruction::Copy(Literal(0), Register(*d)),
            Instruction::Nop,
            Instruction::Nop,
            Instruction::Nop,
            Instruction::Nop,
            Instruction::Nop,
        ];
        for (index, instruction) in replacement.into_iter().enumerate() {
            program[offset + index] = Slot::optimized(instruction, index == 0);
        }
        return Ok(());
    }

    Err(PuzzleError::solver(
        "failed to find the multiply loop to optimize",
    ))
}

fn fetch(registers: &[i64; 4], value: Value) -> i64 {
    match value {
        Value::Register(index) => registers[index],
        Value::Literal(literal) => literal,
    }
}

/// Run a copy of the program; toggles mutate only that copy.
fn run(program: &[Slot], mut registers: [i64; 4]) -> Result<[i64; 4]> {
    let mut code = program.to_vec();
    let mut ip: i64 = 0;

    while let Some(slot) = usize::try_from(ip).ok().and_then(|i| code.get(i)).copied() {
        match slot.instruction {
            Instruction::Copy(source, target) => {
                // Toggled instructions with literal targets are skipped.
                if let Value::Register(index) = target {
                    registers[index] = fetch(&registers, source);
                }
                ip += 1;
            }
            Instruction::Increment(value) => {
                if let Value::Register(index) = value {
                    registers[index] += 1;
                }
                ip += 1;
            }
            Instruction::Decrement(value) => {
                if let Value::Register(index) = value {
                    registers[index] -= 1;
                }
                ip += 1;
            }
            Instruction::Multiply(source, target) => {
                if let Value::Register(index) = target {
                    registers[index] *= fetch(&registers, source);
                }
                ip += 1;
            }
            Instruction::Nop => ip += 1,
            Instruction::JumpIfNotZero(condition, offset) => {
                if fetch(&registers, condition) != 0 {
                    let target = ip + fetch(&registers, offset);
                    if let Ok(index) = usize::try_from(target) {
                        if let Some(jumped) = code.get(index) {
                            if jumped.optimized && !jumped.chunk_head {
                                return Err(PuzzleError::solver(
                                    "jump into an optimized chunk",
                                ));
                            }
                        }
                    }
                    ip = target;
                } else {
                    ip += 1;
                }
            }
            Instruction::Toggle(value) => {
                let target = ip + fetch(&registers, value);
                ip += 1;
                if let Ok(index) = usize::try_from(target) {
                    if let Some(toggled) = code.get_mut(index) {
                        if toggled.optimized {
                            return Err(PuzzleError::solver(
                                "cannot toggle an optimized instruction",
                            ));
                        }
                        toggled.instruction = toggled.instruction.toggled();
                    }
                }
            }
        }
    }

    Ok(registers)
}

pub fn part_one(input: &str) -> Result<i64> {
    let mut program = parse(input)?;
    optimize(&mut program)?;
    Ok(run(&program, [7, 0, 0, 0])?[0])
}

pub fn part_two(input: &str) -> Result<i64> {
    let mut program = parse(input)?;
    optimize(&mut program)?;
    Ok(run(&program, [12, 0, 0, 0])?[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "cpy 2 a\ntgl a\ntgl a\ntgl a\ncpy 1 a\ndec a\ndec a";

    #[test]
    fn toggling_rewrites_the_example_program() {
        let program = parse(EXAMPLE).unwrap();
        assert_eq!(run(&program, [0; 4]).unwrap()[0], 3);
    }

    #[test]
    fn toggle_flips_instruction_kinds() {
        use Value::Register;
        assert_eq!(
            Instruction::Increment(Register(0)).toggled(),
            Instruction::Decrement(Register(0))
        );
        assert_eq!(
            Instruction::Toggle(Register(0)).toggled(),
            Instruction::Increment(Register(0))
        );
        assert_eq!(
            Instruction::Copy(Register(0), Register(1)).toggled(),
            Instruction::JumpIfNotZero(Register(0), Register(1))
        );
    }

    #[test]
    fn optimizer_rewrites_the_multiply_loop() {
        let input = "cpy b d\ncpy 0 b\ncpy c a\ninc b\ndec a\njnz a -2\ndec d\njnz d -5";
        let mut program = parse(input).unwrap();
        optimize(&mut program).unwrap();

        // b = b * c afterwards, with both loop counters cleared.
        let registers = run(&program, [0, 4, 6, 0]).unwrap();
        assert_eq!(registers, [0, 24, 6, 0]);
    }

    #[test]
    fn optimizer_requires_the_loop_shape() {
        let mut program = parse(EXAMPLE).unwrap();
        assert!(optimize(&mut program).is_err());
    }
}
