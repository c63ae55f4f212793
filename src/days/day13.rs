//! Day 13: the cubicle maze behind the office designer's favorite number.

use std::collections::HashMap;

use crate::utils::error::{PuzzleError, Result};

pub struct Maze {
    favorite_number: u64,
}

impl Maze {
    pub fn new(favorite_number: u64) -> Self {
        Self { favorite_number }
    }

    fn is_wall(&self, (x, y): (u64, u64)) -> bool {
        let value = x * x + 3 * x + 2 * x * y + y + y * y + self.favorite_number;
        value.count_ones() % 2 == 1
    }

    fn open_neighbors(&self, (x, y): (u64, u64)) -> Vec<(u64, u64)> {
        let mut neighbors = Vec::with_capacity(4);
        if x > 0 {
            neighbors.push((x - 1, y));
        }
        neighbors.push((x + 1, y));
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        neighbors.push((x, y + 1));
        neighbors.retain(|&cell| !self.is_wall(cell));
        neighbors
    }

    /// Walk breadth-first waves from the origin, marking every open location
    /// with its distance, until `stop` says the search is over.
    fn walk(
        &self,
        origin: (u64, u64),
        mut stop: impl FnMut(usize, &[(u64, u64)]) -> bool,
    ) -> HashMap<(u64, u64), usize> {
        let mut marked = HashMap::new();
        marked.insert(origin, 0);

        let mut wave = vec![origin];
        let mut distance = 0;
        while !stop(distance, &wave) && !wave.is_empty() {
            distance += 1;
            let mut next_wave = Vec::new();
            for &position in &wave {
                for neighbor in self.open_neighbors(position) {
                    if !marked.contains_key(&neighbor) {
                        marked.insert(neighbor, distance);
                        next_wave.push(neighbor);
                    }
                }
            }
            wave = next_wave;
        }

        marked
    }

    /// Length of the shortest path from origin to target.
    pub fn shortest_path_len(&self, origin: (u64, u64), target: (u64, u64)) -> Result<usize> {
        let mut found = None;
        self.walk(origin, |distance, wave| {
            if wave.contains(&target) {
                found = Some(distance);
            }
            found.is_some()
        });
        found.ok_or_else(|| PuzzleError::solver("search space exhausted before the target"))
    }

    /// Number of distinct locations reachable in at most `limit` steps.
    pub fn locations_within(&self, origin: (u64, u64), limit: usize) -> usize {
        self.walk(origin, |distance, _| distance == limit).len()
    }
}

pub fn part_one(favorite_number: u64, target: (u64, u64)) -> Result<usize> {
    Maze::new(favorite_number).shortest_path_len((1, 1), target)
}

pub fn part_two(favorite_number: u64, limit: usize) -> usize {
    Maze::new(favorite_number).locations_within((1, 1), limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_maze_layout() {
        let maze = Maze::new(10);
        let picture = [
            ".#.####.##",
            "..#..#...#",
            "#....##...",
            "###.#.###.",
            ".##..#..#.",
            "..##....#.",
            "#...##.###",
        ];
        for (y, row) in picture.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                assert_eq!(
                    maze.is_wall((x as u64, y as u64)),
                    cell == '#',
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn shortest_path_in_the_example_maze() {
        assert_eq!(part_one(10, (7, 4)).unwrap(), 11);
    }

    #[test]
    fn reachable_locations_within_a_step_limit() {
        assert_eq!(part_two(10, 0), 1);
        assert_eq!(part_two(10, 1), 3);
    }
}
