//! Day 22: sliding data through a grid of storage nodes.

use std::collections::HashMap;

use regex::Regex;

use crate::utils::error::{PuzzleError, Result};

type Position = (usize, usize);

#[derive(Debug, Clone, Copy)]
struct Node {
    position: Position,
    size: u32,
    used: u32,
    avail: u32,
}

/// Parse the `df` listing; the two header lines are skipped.
fn parse(input: &str) -> Result<Vec<Node>> {
    let pattern = Regex::new(
        r"^/dev/grid/node-x(\d+)-y(\d+)\s+(\d+)T\s+(\d+)T\s+(\d+)T\s+(\d+)%$",
    )
    .unwrap();

    input
        .lines()
        .skip(2)
        .map(|line| {
            let captures = pattern
                .captures(line)
                .ok_or_else(|| PuzzleError::malformed(format!("unparsable node {line:?}")))?;
            Ok(Node {
                position: (captures[1].parse()?, captures[2].parse()?),
                size: captures[3].parse()?,
                used: captures[4].parse()?,
                avail: captures[5].parse()?,
            })
        })
        .collect()
}

/// A pair is viable when the first node's data is non-empty, the nodes are
/// distinct, and the data fits into the second node's free space.
fn viable_pair(from: &Node, to: &Node) -> bool {
    from.position != to.position && from.used > 0 && from.used <= to.avail
}

pub fn part_one(input: &str) -> Result<usize> {
    let nodes = parse(input)?;
    Ok(nodes
        .iter()
        .flat_map(|from| nodes.iter().map(move |to| (from, to)))
        .filter(|(from, to)| viable_pair(from, to))
        .count())
}

/// Rectangular grid view used to route the empty node around the immovable
/// "wall" nodes.
struct Grid {
    max_x: usize,
    max_y: usize,
    blocked: Vec<Position>,
}

impl Grid {
    fn neighbors(&self, (x, y): Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        if x > 0 {
            neighbors.push((x - 1, y));
        }
        if x < self.max_x {
            neighbors.push((x + 1, y));
        }
        if y > 0 {
            neighbors.push((x, y - 1));
        }
        if y < self.max_y {
            neighbors.push((x, y + 1));
        }
        neighbors.retain(|position| !self.blocked.contains(position));
        neighbors
    }

    /// Shortest path from origin to target, origin included.
    fn shortest_path(&self, origin: Position, target: Position) -> Result<Vec<Position>> {
        let mut marked = HashMap::new();
        marked.insert(origin, 0usize);

        let mut wave = vec![origin];
        while !wave.contains(&target) {
            let mut next_wave = Vec::new();
            for &position in &wave {
                for neighbor in self.neighbors(position) {
                    if !marked.contains_key(&neighbor) {
                        marked.insert(neighbor, marked[&position] + 1);
                        next_wave.push(neighbor);
                    }
                }
            }
            if next_wave.is_empty() {
                return Err(PuzzleError::solver("no route for the empty node"));
            }
            wave = next_wave;
        }

        // Backtrack from the target along decreasing distances.
        let mut path = vec![target];
        let mut position = target;
        for distance in (0..marked[&target]).rev() {
            position = self
                .neighbors(position)
                .into_iter()
                .find(|neighbor| marked.get(neighbor) == Some(&distance))
                .ok_or_else(|| PuzzleError::solver("path reconstruction failed"))?;
            path.push(position);
        }
        path.reverse();
        Ok(path)
    }
}

/// The move list: walk the empty node next to the goal data, then leapfrog
/// the goal left one column at a time.
fn build_moves(
    origin: Position,
    goal: Position,
    empty_route: &[Position],
) -> Result<Vec<(Position, Position)>> {
    let last = empty_route
        .last()
        .copied()
        .ok_or_else(|| PuzzleError::solver("empty route has no steps"))?;

    let mut moves = Vec::new();
    for step in empty_route.windows(2) {
        moves.push((step[1], step[0]));
    }
    moves.push((goal, last));

    for x in (origin.0 + 1..goal.0).rev() {
        // Swing the empty node from the right of the goal around to its left.
        moves.push(((x + 1, 1), (x + 1, 0)));
        moves.push(((x, 1), (x + 1, 1)));
        moves.push(((x - 1, 1), (x, 1)));
        moves.push(((x - 1, 0), (x - 1, 1)));
        // Then pull the goal data one step left.
        moves.push(((x, 0), (x - 1, 0)));
    }
    Ok(moves)
}

/// Fewest steps to move the top-right data to the origin.
///
/// Relies on the structure of the puzzle input: exactly one empty node, an
/// unobstructed top row pair, and wall nodes that no other node can absorb.
/// Every assumption is checked, and the constructed move list is validated
/// move by move before being counted.
fn fewest_steps(nodes: Vec<Node>) -> Result<usize> {
    let max_x = nodes.iter().map(|node| node.position.0).max().unwrap_or(0);
    let max_y = nodes.iter().map(|node| node.position.1).max().unwrap_or(0);
    if (max_x + 1) * (max_y + 1) != nodes.len() {
        return Err(PuzzleError::solver("nodes do not span a rectangular grid"));
    }

    let mut grid_nodes: HashMap<Position, Node> = nodes
        .into_iter()
        .map(|node| (node.position, node))
        .collect();

    let empties: Vec<Position> = grid_nodes
        .values()
        .filter(|node| node.used == 0)
        .map(|node| node.position)
        .collect();
    let [empty] = empties.as_slice() else {
        return Err(PuzzleError::solver(format!(
            "expected exactly one empty node, found {}",
            empties.len()
        )));
    };
    let empty = *empty;
    let empty_node = grid_nodes[&empty];

    let blocked: Vec<Position> = grid_nodes
        .values()
        .filter(|node| node.position != empty && !viable_pair(node, &empty_node))
        .map(|node| node.position)
        .collect();

    let origin = (0, 0);
    let goal = (max_x, 0);
    for y in 0..2 {
        for x in 0..=max_x {
            if blocked.contains(&(x, y)) {
                return Err(PuzzleError::solver(
                    "path between origin and goal is obstructed",
                ));
            }
        }
    }
    if goal.0 < origin.0 + 2 {
        return Err(PuzzleError::solver("origin and goal are too close"));
    }

    let grid = Grid {
        max_x,
        max_y,
        blocked,
    };
    let left_of_goal = (goal.0 - 1, goal.1);
    let empty_route = grid.shortest_path(empty, left_of_goal)?;

    let moves = build_moves(origin, goal, &empty_route)?;
    for (source, target) in &moves {
        let source_node = *grid_nodes
            .get(source)
            .ok_or_else(|| PuzzleError::solver("move references a node outside the grid"))?;
        let target_node = *grid_nodes
            .get(target)
            .ok_or_else(|| PuzzleError::solver("move references a node outside the grid"))?;
        if !viable_pair(&source_node, &target_node) {
            return Err(PuzzleError::solver("constructed move list is invalid"));
        }

        let amount = source_node.used;
        if let Some(node) = grid_nodes.get_mut(source) {
            node.used = 0;
            node.avail += amount;
        }
        if let Some(node) = grid_nodes.get_mut(target) {
            node.used += amount;
            node.avail -= amount;
        }
    }

    Ok(moves.len())
}

pub fn part_two(input: &str) -> Result<usize> {
    fewest_steps(parse(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
root@ebhq-gridcenter# df -h
Filesystem            Size  Used  Avail  Use%
/dev/grid/node-x0-y0   10T    8T     2T   80%
/dev/grid/node-x0-y1   11T    6T     5T   54%
/dev/grid/node-x0-y2   32T   28T     4T   87%
/dev/grid/node-x1-y0    9T    7T     2T   77%
/dev/grid/node-x1-y1    8T    0T     8T    0%
/dev/grid/node-x1-y2   11T    7T     4T   36%
/dev/grid/node-x2-y0   10T    6T     4T   60%
/dev/grid/node-x2-y1    9T    8T     1T   11%
/dev/grid/node-x2-y2    9T    6T     3T   66%";

    #[test]
    fn counts_viable_pairs() {
        assert_eq!(part_one(EXAMPLE).unwrap(), 7);
    }

    #[test]
    fn example_grid_needs_seven_moves() {
        assert_eq!(part_two(EXAMPLE).unwrap(), 7);
    }

    #[test]
    fn several_empty_nodes_break_the_assumptions() {
        let input = "\
header
header
/dev/grid/node-x0-y0   10T    0T    10T    0%
/dev/grid/node-x1-y0   10T    5T     5T   50%
/dev/grid/node-x2-y0   10T    0T    10T    0%";
        assert!(part_two(input).is_err());
    }
}
