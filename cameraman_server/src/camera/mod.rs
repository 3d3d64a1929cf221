//! Camera travel sessions
//!
//! A travel is a [`CameraSession`] component on the player entity. Inserting
//! it schedules the ticks; removing it is the cancellation handle, and both
//! happen inside one scheduler turn, so no tick can fire against a session
//! that was already stopped or superseded.

use bevy::prelude::*;
use cameraman_core::camera::{Movement, Pose, START_DELAY, TICK_PERIOD, TravelPath, TravelStep};
use cameraman_core::entities::player::gamemode::GameMode;
use cameraman_core::messages::Messages;

use crate::commands::{CommandSender, SendCommandMessageEvent, send_message};
use crate::netty::{PlayerDisconnectedEvent, ResyncPlayerPositionEvent};
use crate::plugin::cameraman_plugin::CameramanSet;

/// Starts a camera travel for a player.
///
/// The movement sequence is a snapshot - waypoints edited afterwards do not
/// affect a travel already under way. If the player is already travelling,
/// the running travel is stopped (and its saved state restored) first.
#[derive(Event, Debug)]
pub struct StartCameraTravelEvent {
    /// The player to fly around
    pub player: Entity,
    /// The segments to fly, in order
    pub movements: Vec<Movement>,
    /// Seconds per segment
    pub slowness: f64,
}

/// Stops a player's running camera travel, restoring their saved pose and
/// game mode. A no-op when nothing is running.
#[derive(Event, Debug)]
pub struct StopCameraTravelEvent {
    /// The player whose travel to stop
    pub player: Entity,
}

/// A travel in progress. Present on a player entity only while running.
#[derive(Component, Debug)]
pub struct CameraSession {
    path: TravelPath,
    saved_pose: Pose,
    saved_mode: GameMode,
    delay: Timer,
    period: Timer,
}

impl CameraSession {
    pub(crate) fn new(path: TravelPath, saved_pose: Pose, saved_mode: GameMode) -> Self {
        Self {
            path,
            saved_pose,
            saved_mode,
            delay: Timer::new(START_DELAY, TimerMode::Once),
            period: Timer::new(TICK_PERIOD, TimerMode::Repeating),
        }
    }
}

/// Moves a player to `target`, keeping their current world when the target
/// carries none - a pose that lost its world never drags anyone out of
/// theirs.
pub(crate) fn apply_pose(current: &mut Pose, target: &Pose) {
    *current = Pose {
        world: target.world.or(current.world),
        ..*target
    };
}

/// Tears a session down: cancel the ticks, restore the snapshot, notify.
fn finish_session(
    commands: &mut Commands,
    player: Entity,
    session: &CameraSession,
    pose: &mut Pose,
    mode: &mut GameMode,
    messages: &Messages,
    evw_send_message: &mut EventWriter<SendCommandMessageEvent>,
    evw_resync: &mut EventWriter<ResyncPlayerPositionEvent>,
) {
    commands.entity(player).remove::<CameraSession>();

    apply_pose(pose, &session.saved_pose);
    *mode = session.saved_mode;
    evw_resync.write(ResyncPlayerPositionEvent { player });

    send_message(
        &CommandSender::Player(player),
        messages,
        "message-travelling-finished",
        &[],
        evw_send_message,
    );
}

fn start_camera_travels(
    mut commands: Commands,
    mut evr_start: EventReader<StartCameraTravelEvent>,
    mut q_player: Query<(&mut Pose, &mut GameMode, Option<&CameraSession>)>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
    mut evw_resync: EventWriter<ResyncPlayerPositionEvent>,
) {
    for ev in evr_start.read() {
        let Ok((mut pose, mut mode, session)) = q_player.get_mut(ev.player) else {
            continue;
        };
        let sender = CommandSender::Player(ev.player);

        if let Some(session) = session {
            send_message(
                &sender,
                &messages,
                "message-interrupting-current-travel",
                &[],
                &mut evw_send_message,
            );
            finish_session(
                &mut commands,
                ev.player,
                session,
                &mut pose,
                &mut mode,
                &messages,
                &mut evw_send_message,
                &mut evw_resync,
            );
        }

        send_message(
            &sender,
            &messages,
            "message-travelling-will-start",
            &[],
            &mut evw_send_message,
        );

        let session = CameraSession::new(TravelPath::new(ev.movements.clone(), ev.slowness), *pose, *mode);
        *mode = GameMode::Spectator;
        commands.entity(ev.player).insert(session);
    }
}

fn stop_camera_travels(
    mut commands: Commands,
    mut evr_stop: EventReader<StopCameraTravelEvent>,
    mut q_player: Query<(&CameraSession, &mut Pose, &mut GameMode)>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
    mut evw_resync: EventWriter<ResyncPlayerPositionEvent>,
) {
    for ev in evr_stop.read() {
        let Ok((session, mut pose, mut mode)) = q_player.get_mut(ev.player) else {
            continue;
        };

        finish_session(
            &mut commands,
            ev.player,
            session,
            &mut pose,
            &mut mode,
            &messages,
            &mut evw_send_message,
            &mut evw_resync,
        );
    }
}

/// A disconnecting player's session is dropped without the restore side
/// effects - the entity is about to go away, there is nothing left to
/// observe them. Dropping the component is what matters: it cancels the
/// scheduled ticks.
fn handle_disconnects(
    mut commands: Commands,
    mut evr_disconnect: EventReader<PlayerDisconnectedEvent>,
    q_sessions: Query<(), With<CameraSession>>,
) {
    for ev in evr_disconnect.read() {
        if q_sessions.contains(ev.player)
            && let Ok(mut entity_commands) = commands.get_entity(ev.player)
        {
            entity_commands.remove::<CameraSession>();
        }
    }
}

fn tick_camera_sessions(
    mut commands: Commands,
    time: Res<Time>,
    mut q_sessions: Query<(Entity, &mut CameraSession, &mut Pose, &mut GameMode)>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
    mut evw_resync: EventWriter<ResyncPlayerPositionEvent>,
) {
    for (player, mut session, mut pose, mut mode) in q_sessions.iter_mut() {
        // The first pose update lands when the start delay elapses, then one
        // per period.
        let steps = if !session.delay.finished() {
            session.delay.tick(time.delta());
            usize::from(session.delay.just_finished())
        } else {
            session.period.tick(time.delta());
            session.period.times_finished_this_tick() as usize
        };

        for _ in 0..steps {
            match session.path.advance() {
                TravelStep::Pose(next) => {
                    apply_pose(&mut pose, &next);
                    evw_resync.write(ResyncPlayerPositionEvent { player });
                }
                TravelStep::Finished => {
                    finish_session(
                        &mut commands,
                        player,
                        &session,
                        &mut pose,
                        &mut mode,
                        &messages,
                        &mut evw_send_message,
                        &mut evw_resync,
                    );
                    break;
                }
            }
        }
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<StartCameraTravelEvent>().add_event::<StopCameraTravelEvent>();

    app.add_systems(
        Update,
        (
            (start_camera_travels, stop_camera_travels, handle_disconnects),
            tick_camera_sessions,
        )
            .chain()
            .in_set(CameramanSet::Camera),
    );
}
