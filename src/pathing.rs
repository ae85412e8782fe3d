use petgraph::graph::IndexType;
use std::collections::VecDeque;

use cells::Cartesian2DCoordinate;
use errors::*;
use grid::GridGraph;
use utils;

/// The route from `start` to `end` through the grid's carved passages, both ends
/// inclusive.
///
/// Breadth first search from `start`, remembering the parent cell each cell was first
/// reached from, then the route is read back from `end` through the parents and
/// reversed. On a spanning tree of passages the route is the unique one between the two
/// cells; should the passage set ever contain cycles the breadth first frontier still
/// returns a shortest route by passage count.
pub fn shortest_path<GridIndexType>(grid: &GridGraph<GridIndexType>,
                                    start: Cartesian2DCoordinate,
                                    end: Cartesian2DCoordinate)
                                    -> Result<Vec<Cartesian2DCoordinate>>
    where GridIndexType: IndexType
{
    if !grid.is_valid_coordinate(start) {
        bail!(ErrorKind::InvalidGridCoordinate(start));
    }
    if !grid.is_valid_coordinate(end) {
        bail!(ErrorKind::InvalidGridCoordinate(end));
    }

    // Parent of the cell it was first discovered from; doubles as the visited set.
    let mut parents = utils::fnv_hashmap(grid.size());
    parents.insert(start, start);

    let mut frontier = VecDeque::with_capacity(grid.size());
    frontier.push_back(start);

    while let Some(cell) = frontier.pop_front() {
        if cell == end {
            break;
        }

        let links = grid.links(cell)
            .ok_or_else(|| ErrorKind::InvalidGridCoordinate(cell))?;
        for linked_cell in links.iter() {
            if !parents.contains_key(linked_cell) {
                parents.insert(*linked_cell, cell);
                frontier.push_back(*linked_cell);
            }
        }
    }

    if !parents.contains_key(&end) {
        bail!(ErrorKind::NoPathFound(start, end));
    }

    let mut path = vec![end];
    let mut current_cell = end;
    while current_cell != start {
        current_cell = parents[&current_cell];
        path.push(current_cell);
    }
    path.reverse();

    Ok(path)
}
