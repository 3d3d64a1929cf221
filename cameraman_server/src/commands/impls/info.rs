use bevy::prelude::*;
use cameraman_core::camera::Pose;
use cameraman_core::entities::player::Player;
use cameraman_core::messages::Messages;
use cameraman_core::waypoints::WaypointMap;
use cameraman_core::world::Worlds;

use crate::commands::{
    ArgumentError, CameramanCommandSent, CameramanCommandType, CommandEvent, CommandSender, SendCommandMessageEvent,
    check_index, parse_command, send_message,
};
use crate::plugin::cameraman_plugin::CameramanSet;

/// `/cameraman info [index]` - list recorded waypoints.
struct InfoCommand {
    index: Option<usize>,
}

impl CameramanCommandType for InfoCommand {
    const VERB: &'static str = "info";

    fn from_input(ev: &CameramanCommandSent) -> Result<Self, ArgumentError> {
        match ev.args.as_slice() {
            [] => Ok(Self { index: None }),
            [index] => index
                .parse()
                .map(|index| Self { index: Some(index) })
                .map_err(|_| ArgumentError::InvalidType {
                    arg_index: 0,
                    type_name: "index",
                }),
            _ => Err(ArgumentError::TooManyArguments),
        }
    }
}

fn send_waypoint_line(
    sender: &CommandSender,
    index: usize,
    pose: &Pose,
    worlds: &Worlds,
    messages: &Messages,
    evw_send_message: &mut EventWriter<SendCommandMessageEvent>,
) {
    let world = pose
        .world
        .and_then(|id| worlds.name_of(id))
        .unwrap_or("-")
        .to_owned();

    send_message(
        sender,
        messages,
        "message-waypoint-info",
        &[
            ("index", index.to_string()),
            ("x", format!("{:.1}", pose.x)),
            ("y", format!("{:.1}", pose.y)),
            ("z", format!("{:.1}", pose.z)),
            ("world", world),
        ],
        evw_send_message,
    );
}

fn handle_info_command(
    mut evr_command: EventReader<CommandEvent<InfoCommand>>,
    q_player: Query<&Player>,
    waypoints: Res<WaypointMap>,
    worlds: Res<Worlds>,
    messages: Res<Messages>,
    mut evw_send_message: EventWriter<SendCommandMessageEvent>,
) {
    for ev in evr_command.read() {
        let Some(entity) = ev.sender.entity() else {
            send_message(&ev.sender, &messages, "error-only-in-game", &[], &mut evw_send_message);
            continue;
        };
        let Ok(player) = q_player.get(entity) else {
            continue;
        };

        let recorded = waypoints.waypoints(player.id()).unwrap_or(&[]);
        if recorded.is_empty() {
            send_message(
                &ev.sender,
                &messages,
                "error-no-waypoints-to-show",
                &[],
                &mut evw_send_message,
            );
            continue;
        }

        match ev.command.index {
            Some(index) => {
                if check_index(index, recorded.len(), &ev.sender, &messages, &mut evw_send_message) {
                    continue;
                }

                send_waypoint_line(&ev.sender, index, &recorded[index - 1], &worlds, &messages, &mut evw_send_message);
            }
            None => {
                for (position, pose) in recorded.iter().enumerate() {
                    send_waypoint_line(&ev.sender, position + 1, pose, &worlds, &messages, &mut evw_send_message);
                }
            }
        }
    }
}

pub(super) fn register(app: &mut App) {
    app.add_event::<CommandEvent<InfoCommand>>().add_systems(
        Update,
        (parse_command::<InfoCommand>, handle_info_command)
            .chain()
            .in_set(CameramanSet::Commands),
    );
}
