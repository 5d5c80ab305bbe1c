//! This crate contains the maze game mazequest.
//!
//! The core lives in three modules that know nothing about terminals: [`grid`] models the maze as a
//! rectangle of walled cells, [`generator`] carves a perfect maze into it with a randomized
//! frontier (Prim-style) algorithm, one step at a time so the carving can be animated, and
//! [`movement`] answers whether a move between two cells is allowed. The rest of the crate is the
//! terminal game built on top of them.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod animation;
mod app;
pub mod cli;
mod events;
pub mod generator;
pub mod grid;
pub mod logging;
pub mod movement;
mod session;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use types::Difficulty;
