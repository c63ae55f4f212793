//! Day 10: balance bots comparing microchips.

use std::collections::HashMap;

use regex::Regex;

use crate::utils::error::{PuzzleError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Peer {
    Bot(usize),
    Output(usize),
}

#[derive(Debug, Default)]
struct Bot {
    peers: Option<(Peer, Peer)>,
    chips: Vec<u32>,
    done: bool,
}

impl Bot {
    fn is_ready(&self) -> bool {
        !self.done && self.chips.len() == 2 && self.peers.is_some()
    }
}

#[derive(Debug, Default)]
struct Factory {
    bots: HashMap<usize, Bot>,
    outputs: HashMap<usize, u32>,
}

impl Factory {
    fn from_input(input: &str) -> Result<Self> {
        let value = Regex::new(r"^value (\d+) goes to bot (\d+)$").unwrap();
        let gives = Regex::new(
            r"^bot (\d+) gives low to (bot|output) (\d+) and high to (bot|output) (\d+)$",
        )
        .unwrap();

        let mut factory = Factory::default();
        for line in input.lines() {
            if let Some(captures) = value.captures(line) {
                factory.give_chip(captures[2].parse()?, captures[1].parse()?)?;
                continue;
            }
            if let Some(captures) = gives.captures(line) {
                let index = captures[1].parse()?;
                let low = Self::parse_peer(&captures[2], captures[3].parse()?);
                let high = Self::parse_peer(&captures[4], captures[5].parse()?);
                factory.connect(index, low, high)?;
                continue;
            }
            return Err(PuzzleError::malformed(format!(
                "unparsable factory line {line:?}"
            )));
        }
        Ok(factory)
    }

    fn parse_peer(kind: &str, index: usize) -> Peer {
        match kind {
            "bot" => Peer::Bot(index),
            _ => Peer::Output(index),
        }
    }

    fn connect(&mut self, index: usize, low: Peer, high: Peer) -> Result<()> {
        let bot = self.bots.entry(index).or_default();
        if bot.peers.is_some() {
            return Err(PuzzleError::malformed(format!(
                "bot {index}: peers assigned twice"
            )));
        }
        bot.peers = Some((low, high));
        Ok(())
    }

    fn give_chip(&mut self, index: usize, value: u32) -> Result<()> {
        let bot = self.bots.entry(index).or_default();
        if bot.chips.len() >= 2 {
            return Err(PuzzleError::malformed(format!(
                "bot {index}: holds too many chips"
            )));
        }
        bot.chips.push(value);
        Ok(())
    }

    fn store(&mut self, index: usize, value: u32) -> Result<()> {
        if self.outputs.insert(index, value).is_some() {
            return Err(PuzzleError::solver(format!(
                "output {index}: value assigned twice"
            )));
        }
        Ok(())
    }

    /// Activate ready bots one at a time until the factory settles.
    fn simulate(&mut self) -> Result<()> {
        while let Some((&index, _)) = self.bots.iter().find(|(_, bot)| bot.is_ready()) {
            self.activate(index)?;
        }
        Ok(())
    }

    fn activate(&mut self, index: usize) -> Result<()> {
        let bot = self
            .bots
            .get_mut(&index)
            .ok_or_else(|| PuzzleError::solver(format!("bot {index} does not exist")))?;
        let (low_peer, high_peer) = bot
            .peers
            .ok_or_else(|| PuzzleError::solver(format!("bot {index}: peers missing")))?;
        let (low, high) = match *bot.chips.as_slice() {
            [a, b] => (a.min(b), a.max(b)),
            _ => {
                return Err(PuzzleError::solver(format!("bot {index}: chips missing")));
            }
        };
        bot.done = true;

        tracing::debug!("bot {index} compares {low} and {high}");
        for (peer, value) in [(low_peer, low), (high_peer, high)] {
            match peer {
                Peer::Bot(target) => self.give_chip(target, value)?,
                Peer::Output(target) => self.store(target, value)?,
            }
        }
        Ok(())
    }

    /// The bot that compared exactly the given pair of chips.
    fn comparer(&self, low: u32, high: u32) -> Result<usize> {
        let matches: Vec<usize> = self
            .bots
            .iter()
            .filter(|(_, bot)| {
                bot.done
                    && bot.chips.iter().min() == Some(&low)
                    && bot.chips.iter().max() == Some(&high)
            })
            .map(|(&index, _)| index)
            .collect();

        match matches.as_slice() {
            [index] => Ok(*index),
            [] => Err(PuzzleError::solver(format!(
                "no bot compared {low} and {high}"
            ))),
            _ => Err(PuzzleError::solver(format!(
                "several bots compared {low} and {high}"
            ))),
        }
    }

    fn output(&self, index: usize) -> Result<u32> {
        self.outputs
            .get(&index)
            .copied()
            .ok_or_else(|| PuzzleError::solver(format!("output {index} received no chip")))
    }
}

pub fn part_one(input: &str) -> Result<usize> {
    let mut factory = Factory::from_input(input)?;
    factory.simulate()?;
    factory.comparer(17, 61)
}

pub fn part_two(input: &str) -> Result<u64> {
    let mut factory = Factory::from_input(input)?;
    factory.simulate()?;

    let mut product = 1u64;
    for index in 0..3 {
        product *= u64::from(factory.output(index)?);
    }
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "value 5 goes to bot 2\n\
                           bot 2 gives low to bot 1 and high to bot 0\n\
                           value 3 goes to bot 1\n\
                           bot 1 gives low to output 1 and high to bot 0\n\
                           bot 0 gives low to output 2 and high to output 0\n\
                           value 2 goes to bot 2";

    #[test]
    fn finds_the_comparing_bot() {
        let mut factory = Factory::from_input(EXAMPLE).unwrap();
        factory.simulate().unwrap();
        assert_eq!(factory.comparer(2, 5).unwrap(), 2);
    }

    #[test]
    fn outputs_collect_the_expected_chips() {
        let mut factory = Factory::from_input(EXAMPLE).unwrap();
        factory.simulate().unwrap();
        assert_eq!(factory.output(0).unwrap(), 5);
        assert_eq!(factory.output(1).unwrap(), 2);
        assert_eq!(factory.output(2).unwrap(), 3);
        assert_eq!(part_two(EXAMPLE).unwrap(), 30);
    }

    #[test]
    fn rejects_a_third_chip() {
        let input = "value 1 goes to bot 0\nvalue 2 goes to bot 0\nvalue 3 goes to bot 0";
        assert!(Factory::from_input(input).is_err());
    }
}
