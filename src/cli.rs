use crate::error::{ConfigError, Result};
use crate::geometry::{Point, Rect};
use crate::utils::{BLOCK_SIZE, SCREEN_SIZE};
use clap::Parser;

/// CLI arguments for the block simulation
#[derive(Parser, Debug)]
#[command(name = "block_collision", about = "🟥 Bouncing block collision simulator")]
pub struct Args {
    /// Number of ticks to run
    #[arg(short = 't', long = "ticks", default_value_t = 600)]
    pub ticks: u64,

    /// Width of the simulation bounds
    #[arg(long, default_value_t = SCREEN_SIZE.0)]
    pub width: i32,

    /// Height of the simulation bounds
    #[arg(long, default_value_t = SCREEN_SIZE.1)]
    pub height: i32,

    /// Block side length in pixels
    #[arg(long, default_value_t = BLOCK_SIZE)]
    pub block_size: i32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Spawn a block at X,Y before the first tick (repeatable)
    #[arg(short = 's', long = "spawn", value_name = "X,Y")]
    pub spawn: Vec<Point>,

    /// Spawn script with `<tick> <x> <y>` lines
    #[arg(long)]
    pub script: Option<String>,

    /// Start with an empty screen instead of the four default blocks
    #[arg(long, default_value_t = false)]
    pub no_start_blocks: bool,

    /// Suppress kill logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    /// Simulation bounds anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Reject sizes the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidArgument(format!(
                "bounds must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.block_size <= 0 {
            return Err(ConfigError::InvalidArgument(format!(
                "block size must be positive, got {}",
                self.block_size
            )));
        }
        if self.block_size > self.width || self.block_size > self.height {
            return Err(ConfigError::InvalidArgument(format!(
                "block size {} does not fit in {}x{}",
                self.block_size, self.width, self.height
            )));
        }
        Ok(())
    }
}
