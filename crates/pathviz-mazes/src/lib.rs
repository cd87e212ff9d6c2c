//! Wall-pattern generators for the pathfinding visualizer.
//!
//! [`MazeGen`] turns a [`MazeType`] into a wall mask or a ready
//! [`Board`](pathviz_core::Board). All randomness comes from the caller's
//! [`rand::Rng`], so a seeded generator reproduces the same board.

pub mod kind;
pub mod mazegen;

pub use kind::{MazeType, ParseMazeTypeError};
pub use mazegen::{CARVE_DETOUR_PROBABILITY, MazeGen, RANDOM_WALL_PROBABILITY};
