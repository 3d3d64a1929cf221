//! Interaction modes a player can be in

use bevy::prelude::Component;
use serde::{Deserialize, Serialize};

/// How a player may interact with the world.
///
/// Camera travels snapshot this, force [`GameMode::Spectator`] for the ride,
/// and restore the snapshot when the travel ends.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Normal play
    #[default]
    Survival,
    /// Unlimited resources, no damage
    Creative,
    /// Non-interactive observer - cannot touch the world or be seen
    Spectator,
}
