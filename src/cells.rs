use smallvec::SmallVec;
use std::convert::From;

use units::Dimension;

/// One cell position on the maze lattice.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// The order cells report their adjacent neighbours in. Fixed, so that carving a maze
/// from a seeded random source reproduces the same passages run after run.
pub const COMPASS_PRIMARY_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                             CompassPrimary::South,
                                                             CompassPrimary::East,
                                                             CompassPrimary::West];

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x: x, y: y }
    }

    /// The coordinate at `index` of a row-major walk over a square grid of the given dimension.
    #[inline]
    pub fn from_row_major_index(index: usize, dimension: Dimension) -> Cartesian2DCoordinate {
        let Dimension(dim) = dimension;
        let y = index / dim;
        let x = index - (y * dim);

        Cartesian2DCoordinate::new(x as u32, y as u32)
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

/// The coordinate one cell away in the given direction.
/// Returns None if that coordinate is not representable, which only guards the
/// edges of the coordinate space - grids apply their own bounds check on top.
pub fn offset_coordinate(coord: Cartesian2DCoordinate,
                         dir: CompassPrimary)
                         -> Option<Cartesian2DCoordinate> {
    let (x, y) = (coord.x, coord.y);
    match dir {
        CompassPrimary::North => {
            if y > 0 {
                Some(Cartesian2DCoordinate { x: x, y: y - 1 })
            } else {
                None
            }
        }
        CompassPrimary::South => y.checked_add(1).map(|y_south| Cartesian2DCoordinate { x: x, y: y_south }),
        CompassPrimary::East => x.checked_add(1).map(|x_east| Cartesian2DCoordinate { x: x_east, y: y }),
        CompassPrimary::West => {
            if x > 0 {
                Some(Cartesian2DCoordinate { x: x - 1, y: y })
            } else {
                None
            }
        }
    }
}
