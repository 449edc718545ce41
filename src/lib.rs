//! Ball clock simulation.
//!
//! Balls drop from a queue onto a one-minute, a five-minute and an hour rail.
//! Full rails tip their balls back into the queue. [`days_until_cycle`] counts
//! how many days pass before the queue is back in its starting order.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;

pub use error::{InputError, ReportError};
pub use simulation::config::{BallCount, ClockConfig, MAX_BALLS, MIN_BALLS};
pub use simulation::engine::{cycle_report, days_until_cycle, ClockSimulation, CycleReport};
