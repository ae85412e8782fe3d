use cells::Cartesian2DCoordinate;

error_chain! {

    errors {
        /// A maze needs at least a 2 x 2 grid to have a route worth drawing.
        InvalidDimension(dimension: usize) {
            description("grid dimension too small to form a maze")
            display("grid dimension {} is too small to form a maze, the minimum is 2", dimension)
        }

        /// The requested cell count does not fit the grid's graph index type.
        GridTooLarge(cells_count: usize) {
            description("cell count too large for the grid index type")
            display("{} cells cannot be indexed by the grid's index type", cells_count)
        }

        InvalidGridCoordinate(coordinate: Cartesian2DCoordinate) {
            description("coordinate outside the grid")
            display("coordinate ({}, {}) lies outside the grid", coordinate.x, coordinate.y)
        }

        SelfLink(coordinate: Cartesian2DCoordinate) {
            description("cannot carve a passage from a cell to itself")
            display("cannot carve a passage from cell ({}, {}) to itself", coordinate.x, coordinate.y)
        }

        /// Carving finished without reaching every cell. The input grid broke the
        /// connectivity invariant - a bug, not a runtime condition to handle.
        DisconnectedGraph(unvisited_count: usize) {
            description("grid was not fully connected when carving passages")
            display("{} cells were unreachable when carving passages", unvisited_count)
        }

        /// No passage route between the cells. Impossible for a fully carved maze,
        /// so reaching this means the passage set does not span the grid.
        NoPathFound(start: Cartesian2DCoordinate, end: Cartesian2DCoordinate) {
            description("no passage route between the cells")
            display("no passage route from ({}, {}) to ({}, {})", start.x, start.y, end.x, end.y)
        }
    }
}
