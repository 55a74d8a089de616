//! # Block Collision
//!
//! Square blocks bouncing around a bounded screen.
//!
//! This library provides the motion and collision core: per-tick position
//! integration, wall bounces, overlap backtracking and the velocity exchange
//! between colliding blocks. Blocks whose overlap cannot be resolved are
//! removed and reported instead of failing the simulation.

pub mod axis;
pub mod block;
pub mod cli;
pub mod color;
pub mod error;
pub mod geometry;
pub mod script;
pub mod simulation;
pub mod utils;

pub use axis::Axis;
pub use block::{Block, KillCause, KillReport};
pub use cli::Args;
pub use color::Color;
pub use error::{ConfigError, Result};
pub use geometry::{Point, Rect};
pub use simulation::{Simulation, TickReport};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Axis, Block, Color, ConfigError, KillCause, KillReport, Point, Rect, Result,
        Simulation, TickReport,
    };
}
