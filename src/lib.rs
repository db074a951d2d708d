//! tui-2048: a 2048 grid engine + terminal front end
//!
//! This crate provides:
//! - The [`engine::Grid`] state machine (`make_move`, `score`, `state`,
//!   `reset`, `data`) over an N×N board of tile exponents
//! - A seeded [`rng::Xorshift`] generator driving tile spawns, so a fixed
//!   seed reproduces the exact same game every run
//! - A crossterm front end (`tui` module) consumed by the binary, which also
//!   ships a `bench` subcommand for throughput measurements
//!
//! Quick start:
//! ```
//! use tui_2048::engine::{Grid, Move};
//!
//! let mut grid = Grid::new(4, 1);
//! assert_eq!(grid.data().iter().filter(|&&v| v != 0).count(), 1);
//!
//! grid.make_move(Move::Left);
//! assert_eq!(grid.empty_cells(), 14);
//! ```
pub mod engine;
pub mod rng;
pub mod tui;
