//! Snek with three rule sets: classic, ghost and portal.
//!
//! The simulation lives in [`grid`], [`food`], [`engine`] and [`session`] and has no
//! terminal dependencies, so it can be driven tick by tick from tests. [`ledger`] keeps
//! the per-mode high scores. The remaining modules make up the terminal front end.

pub mod app;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod input;
pub mod ledger;
pub mod render;
pub mod scheduler;
pub mod session;

pub use engine::{Collision, StepResult};
pub use grid::{Direction, GameMode, Pos, PosDelta, GRID_SIZE};
pub use ledger::{HighScores, Ledger};
pub use session::{Session, Snapshot, Status, TickReport};
