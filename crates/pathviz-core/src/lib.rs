//! **pathviz-core** — core types for the grid pathfinding visualizer.
//!
//! This crate provides the foundational types shared across the *pathviz*
//! workspace: row/column geometry, dense matrices, the wall grid searched by
//! the algorithms, a styled screen buffer, input messages, and the
//! Elm-architecture application loop.

pub mod app;
pub mod board;
pub mod geom;
pub mod matrix;
pub mod messages;
pub mod screen;
pub mod style;

pub use app::{App, AppConfig, Context, Driver, Effect, Model};
pub use board::{Board, Cell};
pub use geom::{Point, Range};
pub use matrix::Matrix;
pub use messages::*;
pub use screen::{Frame, FrameGlyph, Glyph, Screen};
pub use style::{AttrMask, Color, Style};
