//! **perfect_maze** is a maze topology generation and route finding library.
//!
//! A maze is a square grid of cells plus a spanning tree of carved passages, which
//! guarantees exactly one route between any two cells. The library hands a rendering
//! collaborator everything it needs: cell positions, the open-passage relation, a
//! start cell, an end cell and the solved route between them.

extern crate bit_set;
#[macro_use]
extern crate error_chain;
extern crate fnv;
extern crate itertools;
extern crate petgraph;
extern crate rand;
extern crate smallvec;

#[cfg(test)]
extern crate quickcheck;

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod maze;
pub mod pathing;
pub mod units;
mod utils;
