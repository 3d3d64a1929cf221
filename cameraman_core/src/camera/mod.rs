//! The camera travel core - poses, movements and the tick stepper

use std::time::Duration;

pub mod movement;
pub mod path;
pub mod pose;

pub use movement::Movement;
pub use path::{TravelPath, TravelStep, build_movements};
pub use pose::Pose;

/// How many pose updates a travelling camera receives per second.
pub const TICKS_PER_SECOND: u32 = 10;

/// Time between two consecutive pose updates.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

/// Wait between a travel being started and its first pose update.
pub const START_DELAY: Duration = Duration::from_secs(5);

/// Smallest slowness a travel can be started with. Anything below this is
/// rejected at the command boundary.
pub const MIN_SLOWNESS: f64 = 1e-7;
