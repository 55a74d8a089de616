pub mod collision;
pub mod engine;

pub use collision::{contact_axis, exchange, Peers};
pub use engine::{Simulation, TickReport};
