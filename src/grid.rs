use petgraph::{Graph, Undirected};
use petgraph::graph;
pub use petgraph::graph::IndexType;
use rand::{Rng, XorShiftRng};
use std::fmt;
use std::slice;

use cells::{self, Cartesian2DCoordinate, CompassPrimary, CoordinateSmallVec,
            COMPASS_PRIMARY_DIRECTIONS};
use errors::*;
use units::{Dimension, EdgesCount, NodesCount};

/// A square lattice of cells.
///
/// Adjacency between cells is derived from their coordinates: each cell neighbours the
/// in-bounds cells to its north, south, east and west. The petgraph edge set only holds
/// the passages carved through that lattice, so a fresh grid has every wall standing.
pub struct GridGraph<GridIndexType: IndexType> {
    graph: Graph<(), (), Undirected, GridIndexType>,
    dimension: Dimension,
}

pub type SmallGridGraph = GridGraph<u8>;
pub type MediumGridGraph = GridGraph<u16>;
pub type LargeGridGraph = GridGraph<u32>;

impl<GridIndexType: IndexType> GridGraph<GridIndexType> {
    pub fn new(dimension: Dimension) -> Result<GridGraph<GridIndexType>> {

        let Dimension(dim) = dimension;
        if dim < 2 {
            bail!(ErrorKind::InvalidDimension(dim));
        }

        let (NodesCount(nodes), EdgesCount(edges)) = graph_size(dimension);
        if nodes > <GridIndexType as IndexType>::max().index() {
            bail!(ErrorKind::GridTooLarge(nodes));
        }

        let mut grid = GridGraph {
            graph: Graph::with_capacity(nodes, edges),
            dimension: dimension,
        };
        for _ in 0..nodes {
            let _ = grid.graph.add_node(());
        }

        Ok(grid)
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension.0
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimension.0 * self.dimension.0
    }

    pub fn random_cell(&self, rng: &mut XorShiftRng) -> Cartesian2DCoordinate {
        let index = rng.gen::<usize>() % self.size();
        Cartesian2DCoordinate::from_row_major_index(index, self.dimension)
    }

    /// Carve a passage between two cells.
    ///
    /// Carving the same passage twice leaves a single edge in place.
    pub fn link(&mut self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> Result<()> {
        if a == b {
            bail!(ErrorKind::SelfLink(a));
        }
        let a_index = self.grid_coordinate_graph_index(a)
            .ok_or_else(|| ErrorKind::InvalidGridCoordinate(a))?;
        let b_index = self.grid_coordinate_graph_index(b)
            .ok_or_else(|| ErrorKind::InvalidGridCoordinate(b))?;
        let _ = self.graph.update_edge(a_index, b_index, ());
        Ok(())
    }

    /// Are two cells joined by a carved passage?
    pub fn is_linked(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        let a_index_opt = self.grid_coordinate_graph_index(a);
        let b_index_opt = self.grid_coordinate_graph_index(b);
        if let (Some(a_index), Some(b_index)) = (a_index_opt, b_index_opt) {
            self.graph.find_edge(a_index, b_index).is_some()
        } else {
            false
        }
    }

    pub fn is_neighbour_linked(&self,
                               coord: Cartesian2DCoordinate,
                               direction: CompassPrimary)
                               -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false,
                    |neighbour_coord| self.is_linked(coord, neighbour_coord))
    }

    /// Cells joined to `coord` by a carved passage.
    /// Returns None if the coordinate is outside the grid.
    pub fn links(&self, coord: Cartesian2DCoordinate) -> Option<CoordinateSmallVec> {

        if let Some(graph_node_index) = self.grid_coordinate_graph_index(coord) {
            let linked_cells = self.graph
                .neighbors(graph_node_index)
                .map(|node_index| {
                    Cartesian2DCoordinate::from_row_major_index(node_index.index(),
                                                                self.dimension)
                })
                .collect();
            Some(linked_cells)
        } else {
            None
        }
    }

    #[inline]
    pub fn links_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Cells adjacent to `coord` on the lattice, whether or not a passage joins them.
    /// Always reported in north, south, east, west order.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        COMPASS_PRIMARY_DIRECTIONS.iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        cells::offset_coordinate(coord, direction).and_then(|neighbour_coord| {
            if self.is_valid_coordinate(neighbour_coord) {
                Some(neighbour_coord)
            } else {
                None
            }
        })
    }

    /// All cells of the grid in row-major order.
    pub fn iter(&self) -> CellIter {
        let cells_count = self.size();
        CellIter {
            current_cell_number: 0,
            cells_count: cells_count,
            dimension: self.dimension,
        }
    }

    /// All carved passages as unordered cell pairs.
    pub fn iter_links(&self) -> LinksIter<GridIndexType> {
        LinksIter {
            graph_edge_iter: self.graph.raw_edges().iter(),
            dimension: self.dimension,
        }
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        let dim = self.dimension.0 as u32;
        coord.x < dim && coord.y < dim
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0..grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some((coord.y as usize * self.dimension.0) + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn grid_coordinate_graph_index(&self,
                                   coord: Cartesian2DCoordinate)
                                   -> Option<graph::NodeIndex<GridIndexType>> {
        self.grid_coordinate_to_index(coord)
            .map(graph::NodeIndex::<GridIndexType>::new)
    }
}

impl<GridIndexType: IndexType> fmt::Debug for GridGraph<GridIndexType> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "GridGraph :: dimension: {:?}, cells: {}, passages: {}",
               self.dimension,
               self.size(),
               self.links_count())
    }
}

fn graph_size(dimension: Dimension) -> (NodesCount, EdgesCount) {
    let Dimension(dim) = dimension;
    let cells_count = dim * dim;
    let edges_count_hint = 4 * cells_count - 4 * dim; // Probably overkill, but don't want any capacity panics

    (NodesCount(cells_count), EdgesCount(edges_count_hint))
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    cells_count: usize,
    dimension: Dimension,
}

impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_row_major_index(self.current_cell_number,
                                                                    self.dimension);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for CellIter {} // default impl using size_hint()

pub struct LinksIter<'a, GridIndexType: IndexType + 'a> {
    graph_edge_iter: slice::Iter<'a, graph::Edge<(), GridIndexType>>,
    dimension: Dimension,
}

impl<'a, GridIndexType: IndexType> Iterator for LinksIter<'a, GridIndexType> {
    type Item = (Cartesian2DCoordinate, Cartesian2DCoordinate);

    fn next(&mut self) -> Option<Self::Item> {
        self.graph_edge_iter.next().map(|edge| {
            let src_cell_coord =
                Cartesian2DCoordinate::from_row_major_index(edge.source().index(),
                                                            self.dimension);
            let dst_cell_coord =
                Cartesian2DCoordinate::from_row_major_index(edge.target().index(),
                                                            self.dimension);
            (src_cell_coord, dst_cell_coord)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.graph_edge_iter.size_hint()
    }
}
impl<'a, GridIndexType: IndexType> ExactSizeIterator for LinksIter<'a, GridIndexType> {}
