//! Day 24: a cleaning robot visiting points of interest in the air ducts.

use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;

use crate::utils::error::{PuzzleError, Result};

type Position = (usize, usize);

struct Maze {
    width: usize,
    height: usize,
    walls: HashSet<Position>,
    pois: BTreeMap<u32, Position>,
}

impl Maze {
    fn from_input(input: &str) -> Result<Self> {
        let lines: Vec<&str> = input.lines().collect();
        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.len());

        let mut walls = HashSet::new();
        let mut pois = BTreeMap::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, cell) in line.chars().enumerate() {
                match cell {
                    '#' => {
                        walls.insert((x, y));
                    }
                    '.' => {}
                    _ => {
                        let poi = cell.to_digit(10).ok_or_else(|| {
                            PuzzleError::malformed(format!("unexpected maze cell {cell:?}"))
                        })?;
                        pois.insert(poi, (x, y));
                    }
                }
            }
        }

        Ok(Self {
            width,
            height,
            walls,
            pois,
        })
    }

    fn open_neighbors(&self, (x, y): Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        if x > 0 {
            neighbors.push((x - 1, y));
        }
        if x + 1 < self.width {
            neighbors.push((x + 1, y));
        }
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        if y + 1 < self.height {
            neighbors.push((x, y + 1));
        }
        neighbors.retain(|position| !self.walls.contains(position));
        neighbors
    }

    /// Breadth-first distance between two locations.
    fn distance(&self, origin: Position, target: Position) -> Result<usize> {
        let mut marked = HashSet::new();
        marked.insert(origin);

        let mut wave = vec![origin];
        let mut distance = 0;
        while !wave.contains(&target) {
            let mut next_wave = Vec::new();
            for &position in &wave {
                for neighbor in self.open_neighbors(position) {
                    if marked.insert(neighbor) {
                        next_wave.push(neighbor);
                    }
                }
            }
            if next_wave.is_empty() {
                return Err(PuzzleError::solver("target is unreachable in the maze"));
            }
            wave = next_wave;
            distance += 1;
        }
        Ok(distance)
    }

    /// Distance between two POIs, cached under the sorted index pair.
    fn poi_distance(
        &self,
        cache: &mut HashMap<(u32, u32), usize>,
        origin: u32,
        target: u32,
    ) -> Result<usize> {
        if origin == target {
            return Ok(0);
        }
        let key = (origin.min(target), origin.max(target));
        if let Some(&distance) = cache.get(&key) {
            return Ok(distance);
        }

        let origin_position = self.poi_position(key.0)?;
        let target_position = self.poi_position(key.1)?;
        let distance = self.distance(origin_position, target_position)?;
        cache.insert(key, distance);
        Ok(distance)
    }

    fn poi_position(&self, poi: u32) -> Result<Position> {
        self.pois
            .get(&poi)
            .copied()
            .ok_or_else(|| PuzzleError::solver(format!("point of interest {poi} is missing")))
    }

    /// Shortest route from POI 0 through all other POIs, optionally back.
    fn shortest_route(&self, with_return: bool) -> Result<usize> {
        self.poi_position(0)?;
        let others: Vec<u32> = self.pois.keys().copied().filter(|&poi| poi != 0).collect();
        if others.is_empty() {
            return Ok(0);
        }

        let mut cache = HashMap::new();
        let mut best: Option<usize> = None;
        for route in others.iter().copied().permutations(others.len()) {
            let mut steps = self.poi_distance(&mut cache, 0, route[0])?;
            for pair in route.windows(2) {
                steps += self.poi_distance(&mut cache, pair[0], pair[1])?;
            }
            if with_return {
                steps += self.poi_distance(&mut cache, route[route.len() - 1], 0)?;
            }
            best = Some(best.map_or(steps, |best| best.min(steps)));
        }

        best.ok_or_else(|| PuzzleError::solver("no route visits all points of interest"))
    }
}

pub fn part_one(input: &str) -> Result<usize> {
    Maze::from_input(input)?.shortest_route(false)
}

pub fn part_two(input: &str) -> Result<usize> {
    Maze::from_input(input)?.shortest_route(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
###########
#0.1.....2#
#.#######.#
#4.......3#
###########";

    #[test]
    fn pairwise_poi_distances() {
        let maze = Maze::from_input(EXAMPLE).unwrap();
        let mut cache = HashMap::new();
        assert_eq!(maze.poi_distance(&mut cache, 0, 4).unwrap(), 2);
        assert_eq!(maze.poi_distance(&mut cache, 4, 1).unwrap(), 4);
        assert_eq!(maze.poi_distance(&mut cache, 1, 2).unwrap(), 6);
        assert_eq!(maze.poi_distance(&mut cache, 2, 3).unwrap(), 2);
    }

    #[test]
    fn shortest_route_visits_every_poi() {
        assert_eq!(part_one(EXAMPLE).unwrap(), 14);
    }

    #[test]
    fn returning_route_is_longer() {
        assert_eq!(part_two(EXAMPLE).unwrap(), 20);
    }

    #[test]
    fn walled_off_poi_is_an_error() {
        let input = "\
#####
#0#1#
#####";
        assert!(part_one(input).is_err());
    }
}
