//! Events crossing the host server's network boundary
//!
//! The host's netcode decodes packets into the inbound events here and turns
//! the outbound ones back into packets. While a camera travel is running the
//! client keeps predicting its own movement; this module swallows those
//! updates and asks the host to resync, so the client cannot fight the
//! server-driven camera.

use bevy::prelude::*;
use cameraman_core::camera::Pose;

use crate::camera::CameraSession;
use crate::plugin::cameraman_plugin::CameramanSet;

/// A player's connection went away. The host emits this before despawning
/// the player entity.
#[derive(Event, Debug)]
pub struct PlayerDisconnectedEvent {
    /// The player entity that disconnected
    pub player: Entity,
}

/// A decoded movement packet from a client.
#[derive(Event, Debug)]
pub struct PlayerMoveRequestEvent {
    /// The moving player
    pub player: Entity,
    /// Where the client says the player now stands
    pub pose: Pose,
}

/// Asks the host to send the player an authoritative position packet,
/// overriding whatever the client predicted.
#[derive(Event, Debug)]
pub struct ResyncPlayerPositionEvent {
    /// The player to resync
    pub player: Entity,
}

fn apply_player_movement(
    mut evr_move: EventReader<PlayerMoveRequestEvent>,
    mut q_pose: Query<(&mut Pose, Option<&CameraSession>)>,
    mut evw_resync: EventWriter<ResyncPlayerPositionEvent>,
) {
    for ev in evr_move.read() {
        let Ok((mut pose, session)) = q_pose.get_mut(ev.player) else {
            continue;
        };

        if session.is_some() {
            // the camera owns this player's pose - snap the client back
            evw_resync.write(ResyncPlayerPositionEvent { player: ev.player });
            continue;
        }

        *pose = ev.pose;
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<PlayerDisconnectedEvent>()
        .add_event::<PlayerMoveRequestEvent>()
        .add_event::<ResyncPlayerPositionEvent>()
        .add_systems(Update, apply_player_movement.in_set(CameramanSet::HostInput));
}
