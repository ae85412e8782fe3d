use bit_set::BitSet;
use petgraph::graph::IndexType;
use rand::{Rng, XorShiftRng};
use std::collections::VecDeque;

use cells::{Cartesian2DCoordinate, CoordinateSmallVec};
use errors::*;
use grid::GridGraph;

/// Which end of the frontier the next candidate edge is taken from.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CarveOrder {
    /// Pop the most recently pushed edge. The carve keeps extending the corridor it
    /// just entered, backtracking only at dead ends, which gives the long winding
    /// corridors of a depth first walk.
    NewestFirst,
    /// Pop the oldest pushed edge. The tree grows evenly outwards from the seed cell,
    /// giving many short corridors that branch early.
    OldestFirst,
}

/// Carve a maze over the grid with a depth first, recursive backtracker style walk.
pub fn recursive_backtracker<GridIndexType>(grid: &mut GridGraph<GridIndexType>,
                                            rng: &mut XorShiftRng)
                                            -> Result<()>
    where GridIndexType: IndexType
{
    carve_spanning_tree(grid, rng, CarveOrder::NewestFirst)
}

/// Carve a random spanning tree of passages over the grid.
///
/// A frontier of candidate edges grows outwards from the seed cell (0, 0): whenever a
/// cell is visited for the first time, the edges to its unvisited neighbours are pushed
/// in random order. Popping an edge whose far cell is still unvisited carves it into a
/// passage. An edge is only ever carved towards an unvisited cell, so every cell gains
/// exactly one incoming passage: the carved passages form a spanning tree of the grid
/// with `size() - 1` edges, no cycles and exactly one route between any two cells.
///
/// The `order` the frontier is drained in shapes the corridors (see [`CarveOrder`])
/// but never affects the spanning tree guarantee.
pub fn carve_spanning_tree<GridIndexType>(grid: &mut GridGraph<GridIndexType>,
                                          rng: &mut XorShiftRng,
                                          order: CarveOrder)
                                          -> Result<()>
    where GridIndexType: IndexType
{
    let cells_count = grid.size();
    let mut visited = BitSet::with_capacity(cells_count);
    let mut frontier: VecDeque<(Cartesian2DCoordinate, Cartesian2DCoordinate)> =
        VecDeque::with_capacity(cells_count);

    let seed_cell = Cartesian2DCoordinate::new(0, 0);
    let seed_index = grid.grid_coordinate_to_index(seed_cell)
        .ok_or_else(|| ErrorKind::InvalidGridCoordinate(seed_cell))?;
    visited.insert(seed_index);
    push_unvisited_edges(grid, seed_cell, &visited, rng, &mut frontier);

    loop {
        let next_edge = match order {
            CarveOrder::NewestFirst => frontier.pop_back(),
            CarveOrder::OldestFirst => frontier.pop_front(),
        };
        let (near_cell, far_cell) = match next_edge {
            Some(edge) => edge,
            None => break,
        };

        let far_index = grid.grid_coordinate_to_index(far_cell)
            .ok_or_else(|| ErrorKind::InvalidGridCoordinate(far_cell))?;
        if visited.contains(far_index) {
            continue;
        }

        grid.link(near_cell, far_cell)?;
        visited.insert(far_index);
        push_unvisited_edges(grid, far_cell, &visited, rng, &mut frontier);
    }

    let unvisited_count = cells_count - visited.len();
    if unvisited_count > 0 {
        bail!(ErrorKind::DisconnectedGraph(unvisited_count));
    }

    Ok(())
}

fn push_unvisited_edges<GridIndexType>(grid: &GridGraph<GridIndexType>,
                                       cell: Cartesian2DCoordinate,
                                       visited: &BitSet,
                                       rng: &mut XorShiftRng,
                                       frontier: &mut VecDeque<(Cartesian2DCoordinate,
                                                                Cartesian2DCoordinate)>)
    where GridIndexType: IndexType
{
    let mut candidates: CoordinateSmallVec = grid.neighbours(cell)
        .iter()
        .cloned()
        .filter(|neighbour| {
            grid.grid_coordinate_to_index(*neighbour)
                .map_or(false, |index| !visited.contains(index))
        })
        .collect();
    rng.shuffle(&mut candidates);

    for far_cell in candidates.iter() {
        frontier.push_back((cell, *far_cell));
    }
}
