//! Represents a player

pub mod gamemode;

use bevy::prelude::Component;
use uuid::Uuid;

/// Represents a player
#[derive(Component, Debug)]
pub struct Player {
    name: String,
    id: Uuid,
}

impl Player {
    /// Creates a player
    ///
    /// * `id` - the player's persistent unique id. Waypoint lists and camera
    ///   sessions are keyed by this, never by the display name.
    pub fn new(name: impl Into<String>, id: Uuid) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Gets the player's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the unique id for this player
    pub fn id(&self) -> Uuid {
        self.id
    }
}
