//! Where a player (or a camera flying one around) stands and looks

use bevy::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::world::WorldId;

/// A point a camera can occupy: position, look angles and the world they are
/// in. Player entities carry their authoritative pose as this component.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// X coordinate in blocks
    pub x: f64,
    /// Y coordinate in blocks
    pub y: f64,
    /// Z coordinate in blocks
    pub z: f64,
    /// Look yaw in degrees
    pub yaw: f64,
    /// Look pitch in degrees
    pub pitch: f64,
    /// `None` when the originating world no longer exists. Such a pose can
    /// still be moved to within the current world, but never across worlds.
    pub world: Option<WorldId>,
}

impl Pose {
    /// Creates a pose at the given position with the given look angles.
    pub fn new(x: f64, y: f64, z: f64, yaw: f64, pitch: f64, world: Option<WorldId>) -> Self {
        Self {
            x,
            y,
            z,
            yaw,
            pitch,
            world,
        }
    }

    /// Exact positional equality, ignoring look angles and world.
    ///
    /// This is what decides whether two consecutive waypoints form a
    /// degenerate (zero-length) segment.
    pub fn same_position(&self, other: &Pose) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }

    /// Whether this pose still refers to a live world.
    pub fn is_relocatable(&self) -> bool {
        self.world.is_some()
    }
}
